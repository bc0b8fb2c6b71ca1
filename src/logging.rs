//! Log output and the completion notice wrapped around every chart.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{info, Level};

/// Install the stdout subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

/// Resolve `path` against the current working directory
pub fn absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path.strip_prefix(".").unwrap_or(path)),
        Err(_) => path.to_path_buf(),
    }
}

/// Run a chart-producing operation and report where it saved its artifact.
///
/// The result is passed through untouched; failures are left for the
/// caller to report.
pub fn log_draw<F>(name: &str, draw: F) -> Result<PathBuf>
where
    F: FnOnce() -> Result<PathBuf>,
{
    let path = draw()?;
    info!("{}: Done. Saved to {}", name, absolute_path(&path).display());
    Ok(path)
}
