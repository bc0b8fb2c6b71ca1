//! Scheduler Plot - diagnostic charts for packet scheduler simulations.
//!
//! Reads the statistics a scheduler simulation writes out as YAML and
//! renders time allocation, per-queue and per-user delays, and
//! throughput/resource utilization as a fixed set of SVG charts.

mod chart;
mod logging;
mod plot;
mod stats;

use clap::Parser;
use plot::{FailurePolicy, Plotter, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Render diagnostic charts from scheduler simulation statistics
#[derive(Parser, Debug)]
#[command(name = "sched-plot")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the statistics YAML file
    #[arg(short, long)]
    file: PathBuf,

    /// Output directory for generated charts
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Resource budget that unused resources are measured against
    #[arg(long, default_value = "1.0")]
    max_resources: f64,

    /// Keep drawing the remaining charts when one fails
    #[arg(long)]
    isolate_failures: bool,

    /// Log debug details, including the loaded statistics
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);
    run(&args);
}

/// Load the statistics file and draw every chart. Failures are logged, never
/// returned, so the process always exits cleanly.
fn run(args: &Args) {
    info!("Plotter executed...");
    let stats = match stats::load_stats(&args.file) {
        Ok(stats) => stats,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };
    debug!("{}", stats);
    debug!(
        "{} queue delay(s), {} user delay(s)",
        stats.queue_delays.len(),
        stats.user_delays.len()
    );
    if stats.queue_delays.is_empty() && stats.user_delays.is_empty() {
        info!("No per-queue or per-user delays; delay charts show the scheduler bar only");
    }

    let policy = if args.isolate_failures {
        FailurePolicy::Isolate
    } else {
        FailurePolicy::Abort
    };

    let plotter = Plotter::new(&stats, &args.output, args.max_resources);
    let report = match plotter.run(policy) {
        Ok(report) => report,
        Err(e) => {
            error!("{:#}", e);
            return;
        }
    };

    info!(
        "Generated {} chart(s) in {}",
        report.generated.len(),
        logging::absolute_path(plotter.output_dir()).display()
    );
    for artifact in &report.generated {
        info!("  • {} ({})", artifact.path.display(), artifact.kind);
    }
    if !report.is_complete() {
        for failure in &report.failures {
            info!("  ✗ {}: {}", failure.kind, failure.message);
        }
        for kind in &report.skipped {
            info!("  - {} (skipped)", kind);
        }
    }
}
