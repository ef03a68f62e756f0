//! ProbeTrail - probe series aggregation for uptime dashboards.
//!
//! Turns the probe history of a monitored resource into latency statistics,
//! an availability timeline and a bounded latency chart.

pub mod aggregate;
pub mod config;
pub mod web;
