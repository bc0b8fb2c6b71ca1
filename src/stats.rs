//! Scheduler statistics record and its YAML loader.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a statistics file
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Statistics file not found or unreadable: {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse statistics file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Per-queue or per-user delays in seconds, kept in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DelayTable(Vec<(i64, f64)>);

impl From<Vec<(i64, f64)>> for DelayTable {
    fn from(entries: Vec<(i64, f64)>) -> Self {
        Self(entries)
    }
}

impl DelayTable {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(i64, f64)> {
        self.0.iter()
    }

    /// Delay values in order, ids dropped
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().map(|(_, v)| *v)
    }
}

impl fmt::Display for DelayTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (id, delay)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", id, delay)?;
        }
        write!(f, "}}")
    }
}

impl<'de> Deserialize<'de> for DelayTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DelayTableVisitor;

        impl<'de> Visitor<'de> for DelayTableVisitor {
            type Value = DelayTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping from integer ids to delays in seconds")
            }

            // `key:` with no value
            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(DelayTable::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((id, delay)) = map.next_entry::<i64, f64>()? {
                    entries.push((id, delay));
                }
                Ok(DelayTable(entries))
            }
        }

        deserializer.deserialize_any(DelayTableVisitor)
    }
}

/// Statistics reported by one scheduler simulation run.
///
/// Every field is optional in the source document and falls back to 0.0
/// (or an empty table), so a sparse file still yields a usable record.
/// Only the simulator's key names are read; any other key is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatsRecord {
    /// Total modelled time (s)
    #[serde(rename = "scheduler_total_time")]
    pub total_time: f64,
    /// Time spent processing packets (s)
    #[serde(rename = "scheduler_processing_time")]
    pub processing_time: f64,
    /// Time spent idle (s)
    #[serde(rename = "scheduler_idle_time")]
    pub idle_time: f64,
    /// Time spent waiting (s)
    #[serde(rename = "scheduler_wait_time")]
    pub wait_time: f64,
    /// Average packet processing delay over all queues (s)
    #[serde(rename = "scheduler_packet_processing_delay")]
    pub packet_processing_delay: f64,
    #[serde(rename = "queue_packet_processing_delays")]
    pub queue_delays: DelayTable,
    #[serde(rename = "user_packet_processing_delays")]
    pub user_delays: DelayTable,
    /// Average throughput
    #[serde(rename = "scheduler_throughput")]
    pub throughput: f64,
    /// Maximum theoretical throughput
    #[serde(rename = "max_scheduler_throughput")]
    pub max_throughput: f64,
    /// Unused share of the resource budget
    #[serde(rename = "scheduler_unused_resources")]
    pub unused_resources: f64,
}

impl StatsRecord {
    /// Parse a record from YAML text. An empty document gives the all-defaults record.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_yaml::from_value(value)
    }
}

impl fmt::Display for StatsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stats:")?;
        writeln!(f, "scheduler_total_time={:.6}, ", self.total_time)?;
        writeln!(f, "scheduler_processing_time={:.6}, ", self.processing_time)?;
        writeln!(f, "scheduler_idle_time={:.6}, ", self.idle_time)?;
        writeln!(f, "scheduler_wait_time={:.6}, ", self.wait_time)?;
        writeln!(
            f,
            "scheduler_packet_processing_delay={:.6}, ",
            self.packet_processing_delay
        )?;
        writeln!(f, "queue_packet_processing_delays={}, ", self.queue_delays)?;
        writeln!(f, "user_packet_processing_delays={}, ", self.user_delays)?;
        writeln!(f, "scheduler_throughput={:.6}, ", self.throughput)?;
        writeln!(f, "max_scheduler_throughput={:.6}, ", self.max_throughput)?;
        write!(f, "scheduler_unused_resources={:.6})", self.unused_resources)
    }
}

/// Load a statistics record from a YAML file
pub fn load_stats<P: AsRef<Path>>(path: P) -> Result<StatsRecord, StatsError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| StatsError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    StatsRecord::from_yaml_str(&content).map_err(|source| StatsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
