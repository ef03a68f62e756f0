//! Probe series model types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest status code accepted as a real HTTP response.
pub const MIN_STATUS_CODE: i32 = 100;
/// Highest status code accepted as a real HTTP response.
pub const MAX_STATUS_CODE: i32 = 599;

/// Reasons a probe record is excluded from latency aggregation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidProbe {
    #[error("negative response time: {0}s")]
    NegativeResponseTime(f64),
    #[error("non-finite response time")]
    NonFiniteResponseTime,
    #[error("status code {0} out of range")]
    StatusCodeOutOfRange(i32),
}

/// A single observed check of a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeResult {
    #[serde(rename = "created_at")]
    pub timestamp: DateTime<Utc>,
    pub status_code: i32,
    /// Latency in seconds.
    pub response_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<i64>,
}

impl ProbeResult {
    pub fn new(timestamp: DateTime<Utc>, status_code: i32, response_time: f64) -> Self {
        Self {
            timestamp,
            status_code,
            response_time,
            resource_id: None,
        }
    }

    /// Check that the record can take part in latency statistics.
    pub fn validate(&self) -> Result<(), InvalidProbe> {
        if !self.latency_ms().is_finite() {
            return Err(InvalidProbe::NonFiniteResponseTime);
        }
        if self.response_time < 0.0 {
            return Err(InvalidProbe::NegativeResponseTime(self.response_time));
        }
        if !(MIN_STATUS_CODE..=MAX_STATUS_CODE).contains(&self.status_code) {
            return Err(InvalidProbe::StatusCodeOutOfRange(self.status_code));
        }
        Ok(())
    }

    /// Response time converted to milliseconds.
    pub fn latency_ms(&self) -> f64 {
        self.response_time * 1000.0
    }

    /// Whether the probe counts towards uptime: status code in [200, 400).
    pub fn is_success(&self) -> bool {
        (200..400).contains(&self.status_code)
    }

    /// A successful probe that is also well-formed. Malformed records are
    /// never considered up.
    pub fn is_up(&self) -> bool {
        self.is_success() && self.validate().is_ok()
    }
}

/// Availability state reported by the monitoring API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResourceState {
    Up,
    Down,
}

/// A monitored endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub resource_id: i64,
    pub url: String,
    pub state: ResourceState,
    pub updated_at: DateTime<Utc>,
}

/// Latency summary in whole milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyStats {
    pub average: u64,
    pub minimum: u64,
    pub maximum: u64,
    pub median: u64,
    pub p95: u64,
}

/// One cell of the fixed-width availability timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum HistorySlot {
    Success { label: String },
    Failure { label: String },
    Unknown,
}

impl HistorySlot {
    pub fn is_unknown(&self) -> bool {
        matches!(self, HistorySlot::Unknown)
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            HistorySlot::Success { label } | HistorySlot::Failure { label } => Some(label),
            HistorySlot::Unknown => None,
        }
    }
}

/// Latency band of a chart point relative to the whole series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LatencyClass {
    Fast,
    Medium,
    Slow,
}

/// A single bar of the bounded latency chart.
///
/// Height, width and offset are percentages of the chart area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub relative_height: f64,
    pub relative_width: f64,
    pub relative_offset: f64,
    pub classification: LatencyClass,
    pub latency_ms: u64,
    pub label: String,
}

/// Y-axis labels for the chart: top, middle and an implicit zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartAxis {
    pub max_ms: u64,
    pub mid_ms: u64,
}
