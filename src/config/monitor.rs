//! Monitoring cadence and threshold configuration.

use std::time::Duration;

use serde::Deserialize;

/// Polling intervals and alert thresholds for the monitoring engine.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
    /// Seconds between streak-watch ticks.
    #[serde(default = "default_streak_interval_secs")]
    pub streak_interval_secs: u64,
    /// Seconds between live-watch ticks.
    #[serde(default = "default_live_interval_secs")]
    pub live_interval_secs: u64,
    /// Consecutive losses at which streak alerts start firing.
    #[serde(default = "default_streak_threshold")]
    pub streak_threshold: usize,
    /// How many recent matches the streak evaluation looks back over.
    ///
    /// A streak longer than this window is reported as the window
    /// length; widening the window changes alert timing.
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
}

const fn default_streak_interval_secs() -> u64 {
    900
}

const fn default_live_interval_secs() -> u64 {
    60
}

const fn default_streak_threshold() -> usize {
    3
}

const fn default_history_depth() -> usize {
    10
}

impl MonitorConfig {
    /// Streak loop cadence.
    #[must_use]
    pub const fn streak_interval(&self) -> Duration {
        Duration::from_secs(self.streak_interval_secs)
    }

    /// Live loop cadence.
    #[must_use]
    pub const fn live_interval(&self) -> Duration {
        Duration::from_secs(self.live_interval_secs)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            streak_interval_secs: default_streak_interval_secs(),
            live_interval_secs: default_live_interval_secs(),
            streak_threshold: default_streak_threshold(),
            history_depth: default_history_depth(),
        }
    }
}
