//! Chart-ready data derived from a statistics record.
//!
//! Everything here is pure arithmetic: unit conversions, shares and
//! percentages. Rendering lives in `plot`.

use crate::stats::{DelayTable, StatsRecord};
use thiserror::Error;

/// Errors raised while preparing chart data
#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("Cannot normalize against {quantity}: it is zero")]
    ZeroDenominator { quantity: &'static str },

    #[error("{quantity} is not a finite number")]
    NonFinite { quantity: &'static str },
}

/// Seconds to milliseconds
pub fn to_millis(seconds: f64) -> f64 {
    seconds * 1000.0
}

/// A single bar
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// The aggregate bar drawn after the per-entry bars
    pub reference: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: &'static str,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn labels(&self) -> Vec<&str> {
        self.bars.iter().map(|b| b.label.as_str()).collect()
    }

    /// Largest bar height, at least 0
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0_f64, f64::max)
    }
}

/// One bar per table entry (1-based display index), then the scheduler aggregate.
/// Fails when a delay, or its millisecond value, is not finite.
fn delay_bars(
    prefix: &str,
    delays: &DelayTable,
    aggregate: f64,
    quantity: &'static str,
) -> Result<Vec<Bar>, ChartError> {
    let mut bars = Vec::with_capacity(delays.len() + 1);
    for (idx, delay) in delays.values().enumerate() {
        let millis = check_finite(to_millis(check_finite(delay, quantity)?), quantity)?;
        bars.push(Bar {
            label: format!("{} {}", prefix, idx + 1),
            value: millis,
            reference: false,
        });
    }

    let aggregate = check_finite(aggregate, "packet processing delay")?;
    bars.push(Bar {
        label: "Scheduler".to_string(),
        value: check_finite(to_millis(aggregate), "packet processing delay")?,
        reference: true,
    });
    Ok(bars)
}

/// Per-queue packet processing delay in milliseconds
pub fn queue_delay_chart(stats: &StatsRecord) -> Result<BarChart, ChartError> {
    Ok(BarChart {
        title: "Queue packet processing delay",
        x_desc: "Queue",
        y_desc: "Delay (ms)",
        bars: delay_bars(
            "Queue",
            &stats.queue_delays,
            stats.packet_processing_delay,
            "queue delay",
        )?,
    })
}

/// Per-user packet processing delay in milliseconds
pub fn user_delay_chart(stats: &StatsRecord) -> Result<BarChart, ChartError> {
    Ok(BarChart {
        title: "User packet processing delay",
        x_desc: "User",
        y_desc: "Delay (ms)",
        bars: delay_bars(
            "User",
            &stats.user_delays,
            stats.packet_processing_delay,
            "user delay",
        )?,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub label: &'static str,
    pub value: f64,
    /// Share of the pie, 0..=100
    pub percent: f64,
}

impl Wedge {
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.percent)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: &'static str,
    pub wedges: Vec<Wedge>,
}

impl PieChart {
    /// Sum of wedge values
    pub fn total(&self) -> f64 {
        self.wedges.iter().map(|w| w.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() <= 0.0
    }
}

/// Processing, idle and wait time as three separate shares of their sum.
/// A zero sum gives 0.0% everywhere. Negative values count as 0.
pub fn modelling_time_chart(stats: &StatsRecord) -> Result<PieChart, ChartError> {
    let parts = [
        ("Processing time", check_finite(stats.processing_time, "processing time")?),
        ("Idle time", check_finite(stats.idle_time, "idle time")?),
        ("Wait time", check_finite(stats.wait_time, "wait time")?),
    ];
    let total = check_finite(parts.iter().map(|(_, v)| v.max(0.0)).sum(), "modelling time")?;

    let wedges = parts
        .iter()
        .map(|&(label, value)| {
            let value = value.max(0.0);
            let percent = if total > 0.0 { value / total * 100.0 } else { 0.0 };
            Wedge { label, value, percent }
        })
        .collect();

    Ok(PieChart {
        title: "Modelling time proportions",
        wedges,
    })
}

/// A used/unused pair stacked into one column
#[derive(Debug, Clone, PartialEq)]
pub struct StackedGroup {
    pub label: &'static str,
    pub used_percent: f64,
    pub unused_percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UtilizationChart {
    pub title: &'static str,
    pub y_desc: &'static str,
    pub groups: Vec<StackedGroup>,
}

fn check_finite(value: f64, quantity: &'static str) -> Result<f64, ChartError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::NonFinite { quantity })
    }
}

/// Split `max` into used and unused percentages given the used amount
fn used_unused(used: f64, max: f64, quantity: &'static str) -> Result<(f64, f64), ChartError> {
    if max == 0.0 {
        return Err(ChartError::ZeroDenominator { quantity });
    }
    Ok((
        check_finite(used / max * 100.0, quantity)?,
        check_finite((max - used) / max * 100.0, quantity)?,
    ))
}

/// Throughput and resource block utilization.
///
/// `max_resources` is the resource budget `unused_resources` is measured
/// against; with a budget of 1 the unused value is already a fraction.
pub fn utilization_chart(
    stats: &StatsRecord,
    max_resources: f64,
) -> Result<UtilizationChart, ChartError> {
    let throughput = check_finite(stats.throughput, "throughput")?;
    let max_throughput = check_finite(stats.max_throughput, "max throughput")?;
    let unused = check_finite(stats.unused_resources, "unused resources")?;
    let max_resources = check_finite(max_resources, "max resources")?;

    let (tp_used, tp_unused) = used_unused(throughput, max_throughput, "max throughput")?;
    let (rb_used, rb_unused) =
        used_unused(max_resources - unused, max_resources, "max resources")?;

    Ok(UtilizationChart {
        title: "Scheduler utilization",
        y_desc: "Utilization (%)",
        groups: vec![
            StackedGroup {
                label: "Throughput",
                used_percent: tp_used,
                unused_percent: tp_unused,
            },
            StackedGroup {
                label: "Resource blocks",
                used_percent: rb_used,
                unused_percent: rb_unused,
            },
        ],
    })
}
