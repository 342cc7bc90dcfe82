//! Telegram surface configuration.

use serde::Deserialize;

const fn default_true() -> bool {
    true
}

/// Telegram toggle in the config file.
///
/// Credentials (`TELEGRAM_BOT_TOKEN`, `TELEGRAM_CHAT_ID`) come from the
/// environment, never from the file.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Enable the Telegram notifier and command listener.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}
