//! Latency statistics and uptime over a probe series.
//!
//! All arithmetic happens in milliseconds. Results are rounded half-up to the
//! nearest whole millisecond (`f64::round` on non-negative values).

use super::models::{LatencyStats, ProbeResult};

/// Fraction used for the nearest-rank 95th percentile.
const P95_RANK: f64 = 0.95;

/// Latencies in milliseconds of every well-formed probe, in input order.
///
/// Malformed records are skipped and logged.
pub fn valid_latencies_ms(probes: &[ProbeResult]) -> Vec<f64> {
    probes
        .iter()
        .filter_map(|p| match p.validate() {
            Ok(()) => Some(p.latency_ms()),
            Err(e) => {
                tracing::debug!("Skipping probe at {} from latency stats: {}", p.timestamp, e);
                None
            }
        })
        .collect()
}

/// Compute latency statistics over the whole series.
///
/// An empty (or fully malformed) series yields all-zero stats.
pub fn compute_latency_stats(probes: &[ProbeResult]) -> LatencyStats {
    stats_from_ms(&valid_latencies_ms(probes))
}

/// Compute latency statistics from values already converted to milliseconds.
pub fn stats_from_ms(latencies: &[f64]) -> LatencyStats {
    if latencies.is_empty() {
        return LatencyStats::default();
    }

    let mut sorted = latencies.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let count = sorted.len();
    // divide before summing so huge latencies cannot overflow to inf
    let mean: f64 = sorted.iter().map(|v| v / count as f64).sum();

    let mid = count / 2;
    let median = if count % 2 == 0 {
        sorted[mid - 1] / 2.0 + sorted[mid] / 2.0
    } else {
        sorted[mid]
    };

    LatencyStats {
        average: round_ms(mean),
        minimum: round_ms(sorted[0]),
        maximum: round_ms(sorted[count - 1]),
        median: round_ms(median),
        p95: round_ms(nearest_rank(&sorted, P95_RANK)),
    }
}

/// Nearest-rank percentile: `sorted[floor(len * q)]`, or the last element
/// when that index runs past the end.
fn nearest_rank(sorted: &[f64], q: f64) -> f64 {
    let index = (sorted.len() as f64 * q).floor() as usize;
    sorted
        .get(index)
        .or_else(|| sorted.last())
        .copied()
        .unwrap_or(0.0)
}

/// Round a millisecond value half-up to a whole millisecond.
pub fn round_ms(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

/// Percentage of successful probes, rounded to one decimal place.
///
/// Malformed records count as failures. Returns 0.0 for an empty series.
pub fn uptime_percent(probes: &[ProbeResult]) -> f64 {
    if probes.is_empty() {
        return 0.0;
    }
    let up = probes.iter().filter(|p| p.is_up()).count();
    let ratio = up as f64 / probes.len() as f64 * 100.0;
    (ratio * 10.0).round() / 10.0
}
