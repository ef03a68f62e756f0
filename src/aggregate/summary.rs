//! Complete detail view for one resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::chart::{build_chart_axis, build_chart_series, DEFAULT_CHART_WINDOW};
use super::format::{format_relative, format_time};
use super::history::{build_history_timeline, DEFAULT_HISTORY_WIDTH};
use super::models::{
    ChartAxis, ChartPoint, HistorySlot, LatencyStats, ProbeResult, Resource, ResourceState,
};
use super::stats::{compute_latency_stats, uptime_percent};

/// Sizes of the bounded outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOptions {
    pub history_width: usize,
    pub chart_window: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            history_width: DEFAULT_HISTORY_WIDTH,
            chart_window: DEFAULT_CHART_WINDOW,
        }
    }
}

/// Everything the detail view shows for a resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceSummary {
    pub resource: Resource,
    pub total_checks: usize,
    pub uptime: f64,
    pub current_status_code: i32,
    /// Time of the latest probe, `None` when there is no data.
    pub last_check: Option<String>,
    /// Age of the resource's last state change.
    pub updated: String,
    pub stats: LatencyStats,
    pub history: Vec<HistorySlot>,
    pub chart: Vec<ChartPoint>,
    pub axis: ChartAxis,
}

/// Aggregate a resource's probe series into its detail view.
///
/// `now` is only used for the relative age of `resource.updated_at`.
pub fn summarize(
    resource: Resource,
    probes: &[ProbeResult],
    now: DateTime<Utc>,
    options: SummaryOptions,
) -> ResourceSummary {
    let latest = probes.iter().max_by_key(|p| p.timestamp);

    let current_status_code = match (latest, resource.state) {
        (Some(p), _) => p.status_code,
        (None, ResourceState::Up) => 200,
        (None, ResourceState::Down) => 500,
    };

    tracing::debug!(
        "Summarizing resource {} ({} probes, width={}, window={})",
        resource.resource_id,
        probes.len(),
        options.history_width,
        options.chart_window
    );

    ResourceSummary {
        total_checks: probes.len(),
        uptime: uptime_percent(probes),
        current_status_code,
        last_check: latest.map(|p| format_time(p.timestamp)),
        updated: format_relative(resource.updated_at, now),
        stats: compute_latency_stats(probes),
        history: build_history_timeline(probes, options.history_width),
        chart: build_chart_series(probes, options.chart_window),
        axis: build_chart_axis(probes),
        resource,
    }
}
