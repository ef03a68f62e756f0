//! Bounded latency chart with relative bar sizing.
//!
//! Bars are scaled against the slowest probe of the whole series and
//! classified against whole-series stats, so a bar keeps its height and
//! colour while the window slides.

use super::format::chart_label;
use super::models::{ChartAxis, ChartPoint, LatencyClass, LatencyStats, ProbeResult};
use super::stats::{round_ms, stats_from_ms};

/// Number of most recent probes shown in the chart.
pub const DEFAULT_CHART_WINDOW: usize = 20;

/// Well-formed probes in chronological order, paired with their latency.
fn ordered_latencies(probes: &[ProbeResult]) -> Vec<(&ProbeResult, f64)> {
    let mut ordered: Vec<(&ProbeResult, f64)> = probes
        .iter()
        .filter(|p| p.validate().is_ok())
        .map(|p| (p, p.latency_ms()))
        .collect();
    ordered.sort_by_key(|(p, _)| p.timestamp);
    ordered
}

fn max_latency(ordered: &[(&ProbeResult, f64)]) -> f64 {
    ordered.iter().map(|&(_, ms)| ms).fold(0.0, f64::max)
}

/// Band a latency: above p95 is slow, above the average is medium.
pub fn classify(latency_ms: f64, stats: &LatencyStats) -> LatencyClass {
    if latency_ms > stats.p95 as f64 {
        LatencyClass::Slow
    } else if latency_ms > stats.average as f64 {
        LatencyClass::Medium
    } else {
        LatencyClass::Fast
    }
}

/// Build chart points for the last `window` probes.
///
/// Returns an empty series when there is no well-formed probe.
pub fn build_chart_series(probes: &[ProbeResult], window: usize) -> Vec<ChartPoint> {
    let ordered = ordered_latencies(probes);
    if ordered.is_empty() {
        return Vec::new();
    }

    let latencies: Vec<f64> = ordered.iter().map(|&(_, ms)| ms).collect();
    let stats = stats_from_ms(&latencies);
    let max = max_latency(&ordered);

    let visible = &ordered[ordered.len().saturating_sub(window)..];
    let count = visible.len() as f64;
    let width = 100.0 / count - 1.0;

    visible
        .iter()
        .enumerate()
        .map(|(i, &(probe, ms))| ChartPoint {
            relative_height: if max > 0.0 { ms / max * 100.0 } else { 0.0 },
            relative_width: width,
            relative_offset: i as f64 / count * 100.0,
            classification: classify(ms, &stats),
            latency_ms: round_ms(ms),
            label: chart_label(probe),
        })
        .collect()
}

/// Y-axis scale for the chart, taken over the whole series.
pub fn build_chart_axis(probes: &[ProbeResult]) -> ChartAxis {
    let max = max_latency(&ordered_latencies(probes));
    ChartAxis {
        max_ms: round_ms(max),
        mid_ms: round_ms(max / 2.0),
    }
}
