//! Riot API endpoint configuration.

use std::time::Duration;

use serde::Deserialize;

/// Riot API configuration.
///
/// The API key is never read from the config file; `Config::load` fills
/// it in from the `RIOT_API_KEY` environment variable.
#[derive(Debug, Clone, Deserialize)]
pub struct RiotConfig {
    /// Platform region for summoner, league, and spectator endpoints.
    #[serde(default = "default_platform")]
    pub platform: String,
    /// Regional routing value for account and match endpoints.
    #[serde(default = "default_routing")]
    pub routing: String,
    /// Per-request timeout in seconds.
    ///
    /// Bounds how long one hung request can stall a tick.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_platform() -> String {
    "kr".into()
}

fn default_routing() -> String {
    "asia".into()
}

const fn default_request_timeout_secs() -> u64 {
    10
}

impl RiotConfig {
    /// Base URL for platform-routed endpoints.
    #[must_use]
    pub fn platform_base(&self) -> String {
        format!("https://{}.api.riotgames.com", self.platform)
    }

    /// Base URL for regionally-routed endpoints.
    #[must_use]
    pub fn routing_base(&self) -> String {
        format!("https://{}.api.riotgames.com", self.routing)
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for RiotConfig {
    fn default() -> Self {
        Self {
            platform: default_platform(),
            routing: default_routing(),
            request_timeout_secs: default_request_timeout_secs(),
            api_key: None,
        }
    }
}
