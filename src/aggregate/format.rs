//! Label formatting for timeline and chart entries.

use chrono::{DateTime, Utc};

use super::models::ProbeResult;
use super::stats::round_ms;

/// Format a timestamp as `HH:MM` (24-hour, UTC).
pub fn format_time(ts: DateTime<Utc>) -> String {
    ts.format("%H:%M").to_string()
}

/// Describe how long ago `ts` was relative to `now`, truncated to the
/// largest whole unit.
pub fn format_relative(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - ts;
    let days = elapsed.num_days();
    let hours = elapsed.num_hours();
    let minutes = elapsed.num_minutes();

    if days > 0 {
        format!("{} d ago", days)
    } else if hours > 0 {
        format!("{} h ago", hours)
    } else if minutes > 0 {
        format!("{} min ago", minutes)
    } else {
        "just now".to_string()
    }
}

/// Latency of a probe for display, or `n/a` when the record is malformed.
fn latency_text(probe: &ProbeResult) -> String {
    match probe.validate() {
        Ok(()) => format!("{}ms", round_ms(probe.latency_ms())),
        Err(_) => "n/a".to_string(),
    }
}

/// `HH:MM - CODE (Nms)`
pub fn history_label(probe: &ProbeResult) -> String {
    format!(
        "{} - {} ({})",
        format_time(probe.timestamp),
        probe.status_code,
        latency_text(probe)
    )
}

/// `HH:MM: Nms (CODE)`
pub fn chart_label(probe: &ProbeResult) -> String {
    format!(
        "{}: {} ({})",
        format_time(probe.timestamp),
        latency_text(probe),
        probe.status_code
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_time() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 4, 7, 5, 59).unwrap();
        assert_eq!(format_time(ts), "07:05");
    }

    #[test]
    fn test_format_relative() {
        let now = Utc.with_ymd_and_hms(2026, 1, 4, 12, 0, 0).unwrap();
        assert_eq!(format_relative(now - Duration::seconds(59), now), "just now");
        assert_eq!(format_relative(now - Duration::minutes(5), now), "5 min ago");
        assert_eq!(format_relative(now - Duration::minutes(150), now), "2 h ago");
        assert_eq!(format_relative(now - Duration::hours(49), now), "2 d ago");
        // clock skew: future timestamps read as fresh
        assert_eq!(format_relative(now + Duration::minutes(3), now), "just now");
    }

    #[test]
    fn test_labels() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 4, 20, 14, 0).unwrap();
        let probe = ProbeResult::new(ts, 503, 0.1234);
        assert_eq!(history_label(&probe), "20:14 - 503 (123ms)");
        assert_eq!(chart_label(&probe), "20:14: 123ms (503)");

        let broken = ProbeResult::new(ts, 200, -1.0);
        assert_eq!(history_label(&broken), "20:14 - 200 (n/a)");
    }
}
