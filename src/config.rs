//! Configuration module for ProbeTrail.
//!
//! Loads configuration from environment variables with sensible defaults.

use std::env;
use std::str::FromStr;

use crate::aggregate::{SummaryOptions, DEFAULT_CHART_WINDOW, DEFAULT_HISTORY_WIDTH};

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port for the web server (default: 8080)
    pub http_port: u16,
    /// Timeline width used when a request does not ask for one (default: 48)
    pub history_width: usize,
    /// Chart window used when a request does not ask for one (default: 20)
    pub chart_window: usize,
    /// Largest width or window a request may ask for (default: 1000)
    pub max_points: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: 8080,
            history_width: DEFAULT_HISTORY_WIDTH,
            chart_window: DEFAULT_CHART_WINDOW,
            max_points: 1000,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PROBETRAIL_HTTP_PORT`: HTTP port (default: 8080)
    /// - `PROBETRAIL_HISTORY_WIDTH`: default timeline width (default: 48)
    /// - `PROBETRAIL_CHART_WINDOW`: default chart window (default: 20)
    /// - `PROBETRAIL_MAX_POINTS`: upper bound for requested sizes (default: 1000)
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        override_from(&lookup, "PROBETRAIL_HTTP_PORT", &mut cfg.http_port);
        override_from(&lookup, "PROBETRAIL_HISTORY_WIDTH", &mut cfg.history_width);
        override_from(&lookup, "PROBETRAIL_CHART_WINDOW", &mut cfg.chart_window);
        override_from(&lookup, "PROBETRAIL_MAX_POINTS", &mut cfg.max_points);

        cfg
    }

    /// Default output sizes for requests that do not override them.
    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions {
            history_width: self.history_width,
            chart_window: self.chart_window,
        }
    }
}

fn override_from<F, T>(lookup: &F, key: &str, slot: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(raw) = lookup(key) {
        match raw.trim().parse() {
            Ok(value) => *slot = value,
            Err(_) => tracing::warn!("Ignoring invalid value for {}: {:?}", key, raw),
        }
    }
}
