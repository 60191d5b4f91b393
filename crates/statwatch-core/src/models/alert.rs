use std::fmt;

use serde::{Deserialize, Serialize};

/// A breached threshold rule with the quantity it reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Warning {
    /// Raw load average.
    LoadAverageHigh { load_average: f64 },
    /// Used memory as a truncated percentage of total.
    MemoryUsageHigh { percent: u64 },
    /// Free disk space in whole megabytes.
    DiskSpaceLow { free_mb: u64 },
    /// Free network bandwidth in whole megabits per second.
    NetworkBandwidthLow { free_mbit_per_sec: u64 },
}

impl Warning {
    /// Short rule name for structured logging.
    pub fn rule(&self) -> &'static str {
        match self {
            Self::LoadAverageHigh { .. } => "load",
            Self::MemoryUsageHigh { .. } => "memory",
            Self::DiskSpaceLow { .. } => "disk",
            Self::NetworkBandwidthLow { .. } => "network",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadAverageHigh { load_average } => {
                write!(f, "Load Average is too high: {load_average}")
            }
            Self::MemoryUsageHigh { percent } => write!(f, "Memory usage too high: {percent}%"),
            Self::DiskSpaceLow { free_mb } => {
                write!(f, "Free disk space is too low: {free_mb} Mb left")
            }
            Self::NetworkBandwidthLow { free_mbit_per_sec } => write!(
                f,
                "Network bandwidth usage high: {free_mbit_per_sec} Mbit/s available"
            ),
        }
    }
}

/// One line handed to the alert sink.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alert {
    /// The endpoint failed for a full streak of consecutive cycles.
    Unreachable,
    /// A threshold rule fired on the latest snapshot.
    Threshold(Warning),
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable => f.write_str("Unable to fetch server statistic."),
            Self::Threshold(warning) => warning.fmt(f),
        }
    }
}

impl From<Warning> for Alert {
    fn from(warning: Warning) -> Self {
        Self::Threshold(warning)
    }
}
