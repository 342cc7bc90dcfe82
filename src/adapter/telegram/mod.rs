//! Telegram adapter: alert delivery plus the watchlist command surface.
//!
//! Requires the `telegram` feature.

pub mod command;
pub mod control;
pub mod format;
pub mod notifier;

pub use control::TelegramControl;
pub use notifier::{spawn_command_listener, TelegramBotConfig, TelegramNotifier};
