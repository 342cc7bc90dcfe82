//! Application wiring.
//!
//! Builds the Riot client, the notifier registry, and the monitoring
//! engine, spawns the two polling loops, and (with the `telegram`
//! feature) starts the command listener. The polling loops idle until
//! the alert sinks are wired, then run until process shutdown.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use crate::adapter::riot::RiotApiClient;
use crate::application::Monitor;
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::port::{LogNotifier, NotifierRegistry};

/// Main application struct.
pub struct App;

impl App {
    /// Run the bot until process shutdown.
    pub async fn run(config: Config) -> Result<()> {
        let api_key = config
            .riot
            .api_key
            .as_deref()
            .ok_or(ConfigError::MissingField {
                field: "RIOT_API_KEY",
            })?;

        let riot = Arc::new(RiotApiClient::new(&config.riot, api_key)?);

        let mut notifiers = NotifierRegistry::new();
        notifiers.register(Box::new(LogNotifier));

        #[cfg(feature = "telegram")]
        let telegram = build_telegram(&config, &mut notifiers);

        let notifiers = Arc::new(notifiers);
        info!(notifiers = notifiers.len(), "Notifiers initialized");

        let monitor = Arc::new(Monitor::new(
            Arc::clone(&riot) as Arc<dyn crate::port::AccountResolver>,
            Arc::clone(&riot) as Arc<dyn crate::port::MatchHistoryProvider>,
            Arc::clone(&riot) as Arc<dyn crate::port::LiveStatusProvider>,
            Arc::clone(&notifiers),
            config.monitor.clone(),
        ));

        #[cfg(feature = "telegram")]
        if let Some(telegram) = telegram {
            use crate::adapter::telegram::{spawn_command_listener, TelegramControl};
            let control = TelegramControl::new(Arc::clone(&monitor), Arc::clone(&riot));
            spawn_command_listener(telegram, control);
        }

        // Loops hold off on requests until the sinks above are wired.
        let (ready_tx, ready_rx) = watch::channel(false);
        let (streak_handle, live_handle) = monitor.spawn_loops(ready_rx);

        let _ = ready_tx.send(true);
        info!(
            streak_interval_secs = config.monitor.streak_interval_secs,
            live_interval_secs = config.monitor.live_interval_secs,
            "Monitoring loops running"
        );

        // The loops only return on shutdown.
        let _ = tokio::join!(streak_handle, live_handle);
        Ok(())
    }
}

/// Build the Telegram notifier when the feature and config allow it.
#[cfg(feature = "telegram")]
fn build_telegram(
    config: &Config,
    notifiers: &mut NotifierRegistry,
) -> Option<crate::adapter::telegram::TelegramBotConfig> {
    use crate::adapter::telegram::{TelegramBotConfig, TelegramNotifier};
    use tracing::warn;

    if !config.telegram.enabled {
        info!("Telegram disabled in config; alerts will only be logged");
        return None;
    }

    match TelegramBotConfig::from_env() {
        Some(telegram) => {
            notifiers.register(Box::new(TelegramNotifier::new(telegram.clone())));
            Some(telegram)
        }
        None => {
            warn!(
                "TELEGRAM_BOT_TOKEN / TELEGRAM_CHAT_ID missing; alerts will only be logged"
            );
            None
        }
    }
}
