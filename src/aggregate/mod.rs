//! Probe series aggregation.
//!
//! Turns an unordered series of probe results for one resource into latency
//! statistics, a fixed-width availability timeline and a bounded latency
//! chart. Every function here is pure and synchronous.

mod chart;
mod format;
mod history;
mod models;
mod stats;
mod summary;

pub use chart::*;
pub use format::*;
pub use history::*;
pub use models::*;
pub use stats::*;
pub use summary::*;
