//! Chart rendering and the batch run that produces every artifact.
//!
//! Each draw routine creates its own SVG drawing area, presents it and drops
//! it before returning, so nothing drawn for one chart leaks into the next.

use crate::chart::{self, BarChart, PieChart, UtilizationChart};
use crate::logging::log_draw;
use crate::stats::StatsRecord;
use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::IntoTextStyle;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// Output directory used when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "output";

const BAR_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
const REFERENCE_COLOR: RGBColor = RGBColor(0xff, 0x7f, 0x0e);
const USED_COLOR: RGBColor = RGBColor(0x2c, 0xa0, 0x2c);
const UNUSED_COLOR: RGBColor = RGBColor(0xd6, 0x27, 0x28);
const WEDGE_COLORS: [RGBColor; 3] = [BAR_COLOR, REFERENCE_COLOR, USED_COLOR];
const FILL_OPACITY: f64 = 0.9;

const BAR_HALF_WIDTH: f64 = 0.35;
const STACK_HALF_WIDTH: f64 = 0.2;
// Degrees, counter-clockwise from 3 o'clock
const PIE_START_ANGLE: f64 = 140.0;

/// The four artifacts, in run order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    ModellingTime,
    QueueDelays,
    UserDelays,
    Utilization,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::ModellingTime,
        ChartKind::QueueDelays,
        ChartKind::UserDelays,
        ChartKind::Utilization,
    ];

    /// Name used in completion notices and error messages
    pub fn name(self) -> &'static str {
        match self {
            ChartKind::ModellingTime => "draw_modelling_time_pie_chart",
            ChartKind::QueueDelays => "draw_queue_packet_processing_delay_bar_chart",
            ChartKind::UserDelays => "draw_user_packet_processing_delay_bar_chart",
            ChartKind::Utilization => "draw_scheduler_throughput_bar_chart",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::ModellingTime => "modelling_time_pie_chart.svg",
            ChartKind::QueueDelays => "queue_packet_processing_delay_bar_chart.svg",
            ChartKind::UserDelays => "user_packet_processing_delay_bar_chart.svg",
            ChartKind::Utilization => "scheduler_throughput_bar_chart.svg",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What happens to the rest of the batch when a chart fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log the failure and skip the remaining charts
    #[default]
    Abort,
    /// Log the failure and carry on with the next chart
    Isolate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub kind: ChartKind,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartFailure {
    pub kind: ChartKind,
    pub message: String,
}

/// Outcome of one batch run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub generated: Vec<Artifact>,
    pub failures: Vec<ChartFailure>,
    /// Charts never attempted because an earlier one failed
    pub skipped: Vec<ChartKind>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.skipped.is_empty()
    }
}

/// Renders the charts for one statistics record
pub struct Plotter<'a> {
    stats: &'a StatsRecord,
    output_dir: PathBuf,
    max_resources: f64,
}

impl<'a> Plotter<'a> {
    pub fn new<P: AsRef<Path>>(stats: &'a StatsRecord, output_dir: P, max_resources: f64) -> Self {
        Self {
            stats,
            output_dir: output_dir.as_ref().to_path_buf(),
            max_resources,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn path_for(&self, kind: ChartKind) -> PathBuf {
        self.output_dir.join(kind.file_name())
    }

    /// Draw a single chart and return where it was saved
    pub fn draw(&self, kind: ChartKind) -> Result<PathBuf> {
        match kind {
            ChartKind::ModellingTime => self.draw_modelling_time(),
            ChartKind::QueueDelays => self.draw_queue_delays(),
            ChartKind::UserDelays => self.draw_user_delays(),
            ChartKind::Utilization => self.draw_utilization(),
        }
    }

    pub fn draw_modelling_time(&self) -> Result<PathBuf> {
        let path = self.path_for(ChartKind::ModellingTime);
        render_pie_chart(&chart::modelling_time_chart(self.stats)?, &path)?;
        Ok(path)
    }

    pub fn draw_queue_delays(&self) -> Result<PathBuf> {
        let path = self.path_for(ChartKind::QueueDelays);
        render_bar_chart(&chart::queue_delay_chart(self.stats)?, &path)?;
        Ok(path)
    }

    pub fn draw_user_delays(&self) -> Result<PathBuf> {
        let path = self.path_for(ChartKind::UserDelays);
        render_bar_chart(&chart::user_delay_chart(self.stats)?, &path)?;
        Ok(path)
    }

    pub fn draw_utilization(&self) -> Result<PathBuf> {
        let path = self.path_for(ChartKind::Utilization);
        let data = chart::utilization_chart(self.stats, self.max_resources)?;
        render_utilization_chart(&data, &path)?;
        Ok(path)
    }

    /// Draw all four charts in order.
    ///
    /// Only a failure to create the output directory is returned as an
    /// error; chart failures are logged and recorded in the report.
    pub fn run(&self, policy: FailurePolicy) -> Result<BatchReport> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create output directory: {}", self.output_dir.display())
        })?;

        let mut report = BatchReport::default();
        for (idx, kind) in ChartKind::ALL.iter().copied().enumerate() {
            debug!("Drawing {}", kind);
            match log_draw(kind.name(), || self.draw(kind)) {
                Ok(path) => report.generated.push(Artifact { kind, path }),
                Err(e) => {
                    let message = format!("{:#}", e);
                    error!("{}: {}", kind, message);
                    report.failures.push(ChartFailure { kind, message });

                    if policy == FailurePolicy::Abort {
                        report.skipped = ChartKind::ALL[idx + 1..].to_vec();
                        if !report.skipped.is_empty() {
                            warn!("Skipping {} remaining chart(s)", report.skipped.len());
                        }
                        break;
                    }
                }
            }
        }

        Ok(report)
    }
}

fn text_style(area: &DrawingArea<SVGBackend, Shift>, size: u32, pos: Pos) -> TextStyle<'static> {
    ("sans-serif", size).into_text_style(area).pos(pos)
}

fn centered() -> Pos {
    Pos::new(HPos::Center, VPos::Center)
}

/// Point on a circle, angle in degrees counter-clockwise (pixel y grows downward)
fn polar(center: (f64, f64), radius: f64, degrees: f64) -> (i32, i32) {
    let rad = degrees.to_radians();
    (
        (center.0 + radius * rad.cos()).round() as i32,
        (center.1 - radius * rad.sin()).round() as i32,
    )
}

/// Closed outline of a pie wedge: center, arc, back to center
fn wedge_outline(center: (f64, f64), radius: f64, start: f64, sweep: f64) -> Vec<(i32, i32)> {
    let origin = (center.0.round() as i32, center.1.round() as i32);
    let steps = (sweep.ceil() as usize).max(1);

    let mut points = Vec::with_capacity(steps + 3);
    points.push(origin);
    for step in 0..=steps {
        let angle = start + sweep * step as f64 / steps as f64;
        points.push(polar(center, radius, angle));
    }
    points.push(origin);
    points
}

/// Render a pie with percentage labels and a category legend
fn render_pie_chart(chart: &PieChart, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, (900, 700)).into_drawing_area();
    root.fill(&WHITE)?;
    let area = root.titled(chart.title, ("sans-serif", 30))?;

    let (width, height) = area.dim_in_pixel();
    let center = (width as f64 * 0.4, height as f64 / 2.0);
    let radius = width.min(height) as f64 * 0.38;

    if chart.is_empty() {
        area.draw(&Text::new(
            "No data",
            (center.0 as i32, center.1 as i32),
            text_style(&area, 24, centered()),
        ))?;
    } else {
        let total = chart.total();
        let mut start = PIE_START_ANGLE;
        for (i, wedge) in chart.wedges.iter().enumerate() {
            let sweep = wedge.value / total * 360.0;
            if sweep <= 0.0 {
                continue;
            }
            let outline = wedge_outline(center, radius, start, sweep);
            let color = WEDGE_COLORS[i % WEDGE_COLORS.len()];
            area.draw(&Polygon::new(outline.clone(), color.filled()))?;
            area.draw(&PathElement::new(outline, BLACK.stroke_width(1)))?;
            area.draw(&Text::new(
                wedge.percent_label(),
                polar(center, radius * 0.6, start + sweep / 2.0),
                text_style(&area, 18, centered()),
            ))?;
            start += sweep;
        }
    }

    let legend_x = (width as f64 * 0.8) as i32;
    for (i, wedge) in chart.wedges.iter().enumerate() {
        let y = 40 + i as i32 * 30;
        let color = WEDGE_COLORS[i % WEDGE_COLORS.len()];
        area.draw(&Rectangle::new([(legend_x, y), (legend_x + 20, y + 20)], color.filled()))?;
        area.draw(&Rectangle::new(
            [(legend_x, y), (legend_x + 20, y + 20)],
            BLACK.stroke_width(1),
        ))?;
        area.draw(&Text::new(
            wedge.label,
            (legend_x + 30, y + 10),
            text_style(&area, 16, Pos::new(HPos::Left, VPos::Center)),
        ))?;
    }

    root.present()
        .with_context(|| format!("Failed to write chart: {}", path.display()))?;
    Ok(())
}

/// Label for a category axis whose categories sit on integer positions
fn category_label(labels: &[&str], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels
        .get(idx as usize)
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// Render one bar per entry; the reference bar gets its own color
fn render_bar_chart(chart: &BarChart, path: &Path) -> Result<()> {
    let n = chart.bars.len();
    let labels = chart.labels();
    let y_max = (chart.max_value() * 1.1).max(1.0);

    let root = SVGBackend::new(path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(chart.title, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), 0f64..y_max)?;

    let x_formatter = |x: &f64| category_label(&labels, *x);
    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(n * 2 + 1)
        .x_label_formatter(&x_formatter)
        .x_desc(chart.x_desc)
        .y_desc(chart.y_desc)
        .draw()?;

    ctx.draw_series(chart.bars.iter().enumerate().map(|(i, bar)| {
        let color = if bar.reference { REFERENCE_COLOR } else { BAR_COLOR };
        let x = i as f64;
        Rectangle::new(
            [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, bar.value)],
            color.filled(),
        )
    }))?;

    ctx.draw_series(chart.bars.iter().enumerate().map(|(i, bar)| {
        let x = i as f64;
        Rectangle::new(
            [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, bar.value)],
            BLACK.stroke_width(1),
        )
    }))?;

    let value_style = text_style(&root, 16, Pos::new(HPos::Center, VPos::Bottom));
    ctx.draw_series(chart.bars.iter().enumerate().map(|(i, bar)| {
        Text::new(
            format!("{:.2}", bar.value),
            (i as f64, bar.value),
            value_style.clone(),
        )
    }))?;

    root.present()
        .with_context(|| format!("Failed to write chart: {}", path.display()))?;
    Ok(())
}

fn used_style() -> ShapeStyle {
    USED_COLOR.mix(FILL_OPACITY).filled()
}

fn unused_style() -> ShapeStyle {
    UNUSED_COLOR.mix(FILL_OPACITY).filled()
}

/// Render side-by-side stacked used/unused columns
fn render_utilization_chart(chart: &UtilizationChart, path: &Path) -> Result<()> {
    let n = chart.groups.len();
    let labels: Vec<&str> = chart.groups.iter().map(|g| g.label).collect();

    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    // 0..125 leaves room for the legend above the 100% columns
    let mut ctx = ChartBuilder::on(&root)
        .caption(chart.title, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), 0f64..125f64)?;

    let x_formatter = |x: &f64| category_label(&labels, *x);
    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(n * 2 + 1)
        .x_label_formatter(&x_formatter)
        .y_desc(chart.y_desc)
        .draw()?;

    ctx.draw_series(chart.groups.iter().enumerate().map(|(i, g)| {
        let x = i as f64;
        Rectangle::new(
            [(x - STACK_HALF_WIDTH, 0.0), (x + STACK_HALF_WIDTH, g.used_percent)],
            used_style(),
        )
    }))?
    .label("Used")
    .legend(|(x, y)| Rectangle::new([(x, y - 6), (x + 16, y + 6)], used_style()));

    ctx.draw_series(chart.groups.iter().enumerate().map(|(i, g)| {
        let x = i as f64;
        Rectangle::new(
            [
                (x - STACK_HALF_WIDTH, g.used_percent),
                (x + STACK_HALF_WIDTH, g.used_percent + g.unused_percent),
            ],
            unused_style(),
        )
    }))?
    .label("Unused")
    .legend(|(x, y)| Rectangle::new([(x, y - 6), (x + 16, y + 6)], unused_style()));

    // Black edges around both segments
    ctx.draw_series(chart.groups.iter().enumerate().flat_map(|(i, g)| {
        let x = i as f64;
        [
            Rectangle::new(
                [(x - STACK_HALF_WIDTH, 0.0), (x + STACK_HALF_WIDTH, g.used_percent)],
                BLACK.stroke_width(1),
            ),
            Rectangle::new(
                [
                    (x - STACK_HALF_WIDTH, g.used_percent),
                    (x + STACK_HALF_WIDTH, g.used_percent + g.unused_percent),
                ],
                BLACK.stroke_width(1),
            ),
        ]
    }))?;

    let pct_style = text_style(&root, 16, centered());
    ctx.draw_series(chart.groups.iter().enumerate().flat_map(|(i, g)| {
        let x = i as f64;
        [
            Text::new(
                format!("{:.1}%", g.used_percent),
                (x, g.used_percent / 2.0),
                pct_style.clone(),
            ),
            Text::new(
                format!("{:.1}%", g.unused_percent),
                (x, g.used_percent + g.unused_percent / 2.0),
                pct_style.clone(),
            ),
        ]
    }))?;

    ctx.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()
        .with_context(|| format!("Failed to write chart: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::tests::sample_record;
    use tempfile::TempDir;

    #[test]
    fn test_run_generates_four_artifacts() {
        let stats = sample_record();
        let dir = TempDir::new().unwrap();
        let plotter = Plotter::new(&stats, dir.path().join("output"), 1.0);

        let report = plotter.run(FailurePolicy::Abort).unwrap();
        assert!(report.is_complete());
        assert_eq!(report.generated.len(), 4);

        let kinds: Vec<ChartKind> = report.generated.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, ChartKind::ALL.to_vec());
        for artifact in &report.generated {
            assert_eq!(artifact.path, plotter.path_for(artifact.kind));
            let content = fs::read_to_string(&artifact.path).unwrap();
            assert!(content.contains("<svg"), "{} is not SVG", artifact.path.display());
        }
    }

    #[test]
    fn test_queue_chart_content() {
        let stats = sample_record();
        let dir = TempDir::new().unwrap();
        let plotter = Plotter::new(&stats, dir.path(), 1.0);

        let path = plotter.draw_queue_delays().unwrap();
        assert!(path.ends_with("queue_packet_processing_delay_bar_chart.svg"));

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("Queue packet processing delay"));
        for label in ["Queue 1", "Queue 2", "Scheduler", "2.00", "3.00", "5.00"] {
            assert!(svg.contains(label), "missing {}", label);
        }
    }

    #[test]
    fn test_pie_chart_content() {
        let stats = sample_record();
        let dir = TempDir::new().unwrap();
        let plotter = Plotter::new(&stats, dir.path(), 1.0);

        let svg = fs::read_to_string(plotter.draw_modelling_time().unwrap()).unwrap();
        for label in ["80.0%", "15.0%", "5.0%", "Processing time", "Idle time", "Wait time"] {
            assert!(svg.contains(label), "missing {}", label);
        }
    }

    #[test]
    fn test_empty_pie_renders_placeholder() {
        let stats = StatsRecord::default();
        let dir = TempDir::new().unwrap();
        let plotter = Plotter::new(&stats, dir.path(), 1.0);

        let svg = fs::read_to_string(plotter.draw_modelling_time().unwrap()).unwrap();
        assert!(svg.contains("No data"));
    }

    #[test]
    fn test_utilization_chart_content() {
        let stats = sample_record();
        let dir = TempDir::new().unwrap();
        let plotter = Plotter::new(&stats, dir.path(), 1.0);

        let svg = fs::read_to_string(plotter.draw_utilization().unwrap()).unwrap();
        for label in ["50.5%", "49.5%", "70.0%", "30.0%", "Used", "Unused"] {
            assert!(svg.contains(label), "missing {}", label);
        }
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let stats = sample_record();
        let dir = TempDir::new().unwrap();
        let plotter = Plotter::new(&stats, dir.path(), 1.0);

        let first = plotter.run(FailurePolicy::Abort).unwrap();
        let before: Vec<Vec<u8>> = first
            .generated
            .iter()
            .map(|a| fs::read(&a.path).unwrap())
            .collect();

        let second = plotter.run(FailurePolicy::Abort).unwrap();
        assert!(second.is_complete());
        let after: Vec<Vec<u8>> = second
            .generated
            .iter()
            .map(|a| fs::read(&a.path).unwrap())
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_zero_max_throughput_fails_last_chart() {
        let mut stats = sample_record();
        stats.max_throughput = 0.0;
        let dir = TempDir::new().unwrap();
        let plotter = Plotter::new(&stats, dir.path(), 1.0);

        let report = plotter.run(FailurePolicy::Abort).unwrap();
        assert_eq!(report.generated.len(), 3);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].kind, ChartKind::Utilization);
        assert!(report.failures[0].message.contains("max throughput"));
        assert!(report.skipped.is_empty());
        assert!(!plotter.path_for(ChartKind::Utilization).exists());
    }

    #[test]
    fn test_overflowing_delay_fails_without_drawing() {
        let stats = StatsRecord::from_yaml_str(
            "scheduler_processing_time: 1.0\nscheduler_packet_processing_delay: 1.0e306\n",
        )
        .unwrap();
        let dir = TempDir::new().unwrap();
        let plotter = Plotter::new(&stats, dir.path(), 1.0);

        assert!(plotter.draw_queue_delays().is_err());
        assert!(plotter.draw_user_delays().is_err());
        assert!(!plotter.path_for(ChartKind::QueueDelays).exists());

        let report = plotter.run(FailurePolicy::Abort).unwrap();
        assert_eq!(report.generated.len(), 1);
        assert_eq!(report.failures[0].kind, ChartKind::QueueDelays);
        assert!(report.failures[0].message.contains("not a finite number"));
        assert_eq!(
            report.skipped,
            vec![ChartKind::UserDelays, ChartKind::Utilization]
        );
    }

    #[test]
    fn test_infinite_queue_delay_is_isolated() {
        let mut stats = StatsRecord::from_yaml_str(
            "queue_packet_processing_delays: {1: .inf, 2: 0.003}\n",
        )
        .unwrap();
        stats.processing_time = 1.0;
        stats.throughput = 1.0;
        stats.max_throughput = 2.0;
        let dir = TempDir::new().unwrap();
        let plotter = Plotter::new(&stats, dir.path(), 1.0);

        let report = plotter.run(FailurePolicy::Isolate).unwrap();
        let kinds: Vec<ChartKind> = report.generated.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChartKind::ModellingTime,
                ChartKind::UserDelays,
                ChartKind::Utilization
            ]
        );
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].message.contains("queue delay"));
    }

    #[test]
    fn test_abort_skips_remaining_charts() {
        let stats = sample_record();
        let dir = TempDir::new().unwrap();
        let plotter = Plotter::new(&stats, dir.path(), 1.0);
        // A directory where the queue chart should go makes its write fail
        fs::create_dir_all(plotter.path_for(ChartKind::QueueDelays)).unwrap();

        let report = plotter.run(FailurePolicy::Abort).unwrap();
        assert_eq!(report.generated.len(), 1);
        assert_eq!(report.generated[0].kind, ChartKind::ModellingTime);
        assert_eq!(report.failures[0].kind, ChartKind::QueueDelays);
        assert_eq!(
            report.skipped,
            vec![ChartKind::UserDelays, ChartKind::Utilization]
        );
        assert!(!plotter.path_for(ChartKind::UserDelays).exists());
    }

    #[test]
    fn test_isolate_continues_after_failure() {
        let stats = sample_record();
        let dir = TempDir::new().unwrap();
        let plotter = Plotter::new(&stats, dir.path(), 1.0);
        fs::create_dir_all(plotter.path_for(ChartKind::QueueDelays)).unwrap();

        let report = plotter.run(FailurePolicy::Isolate).unwrap();
        let kinds: Vec<ChartKind> = report.generated.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChartKind::ModellingTime,
                ChartKind::UserDelays,
                ChartKind::Utilization
            ]
        );
        assert_eq!(report.failures.len(), 1);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_unwritable_output_dir() {
        let stats = sample_record();
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, b"x").unwrap();

        let plotter = Plotter::new(&stats, blocker.join("output"), 1.0);
        assert!(plotter.run(FailurePolicy::Abort).is_err());
    }

    #[test]
    fn test_category_label() {
        let labels = ["Queue 1", "Scheduler"];
        assert_eq!(category_label(&labels, 0.0), "Queue 1");
        assert_eq!(category_label(&labels, 1.0), "Scheduler");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, -0.5), "");
        assert_eq!(category_label(&labels, 2.0), "");
    }

    #[test]
    fn test_wedge_outline_is_closed() {
        let outline = wedge_outline((100.0, 100.0), 50.0, 0.0, 90.0);
        assert_eq!(outline.first(), outline.last());
        assert_eq!(outline[1], (150, 100));
        assert_eq!(outline[outline.len() - 2], (100, 50));
    }
}
