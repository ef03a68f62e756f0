//! Fixed-width availability timeline.

use super::format::history_label;
use super::models::{HistorySlot, ProbeResult};

/// Number of slots in the dashboard timeline.
pub const DEFAULT_HISTORY_WIDTH: usize = 48;

/// Build a timeline of exactly `width` slots, oldest first.
///
/// Probes are sorted by timestamp (input order is not trusted) and only the
/// most recent `width` are kept. Missing slots are padded on the left with
/// [`HistorySlot::Unknown`].
pub fn build_history_timeline(probes: &[ProbeResult], width: usize) -> Vec<HistorySlot> {
    let mut sorted: Vec<&ProbeResult> = probes.iter().collect();
    sorted.sort_by_key(|p| p.timestamp);

    let kept = &sorted[sorted.len().saturating_sub(width)..];
    let padding = width - kept.len();

    let mut slots = Vec::with_capacity(width);
    slots.extend(std::iter::repeat(HistorySlot::Unknown).take(padding));
    slots.extend(kept.iter().map(|p| history_slot(p)));
    slots
}

fn history_slot(probe: &ProbeResult) -> HistorySlot {
    let label = history_label(probe);
    if probe.is_up() {
        HistorySlot::Success { label }
    } else {
        HistorySlot::Failure { label }
    }
}
