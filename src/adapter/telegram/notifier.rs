//! Telegram notification and command handling.
//!
//! Provides the [`TelegramNotifier`] for delivering monitoring alerts
//! and a background command listener for the watchlist commands.
//!
//! Requires the `telegram` feature to be enabled.

use teloxide::prelude::*;
use teloxide::types::{BotCommand, ParseMode};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::port::{AlertEvent, Notifier};

use super::control::{command_response_for_message, TelegramControl};
use super::format::format_alert_message;

/// Credentials for the Telegram bot.
#[derive(Debug, Clone)]
pub struct TelegramBotConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat ID for alerts; also the only chat allowed to issue
    /// commands.
    pub chat_id: i64,
}

impl TelegramBotConfig {
    /// Create credentials from environment variables.
    ///
    /// Reads `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`. Returns `None`
    /// if either is missing or invalid.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN").ok()?;
        let chat_id = std::env::var("TELEGRAM_CHAT_ID")
            .ok()
            .and_then(|s| s.parse().ok())?;

        Some(Self { bot_token, chat_id })
    }
}

/// Telegram notifier that sends alerts to a chat.
///
/// Implements the [`Notifier`] port; `notify` only queues on a channel
/// so the polling loops never wait on Telegram I/O.
pub struct TelegramNotifier {
    sender: mpsc::UnboundedSender<AlertEvent>,
}

impl TelegramNotifier {
    /// Create a new Telegram notifier and spawn the delivery worker.
    #[must_use]
    pub fn new(config: TelegramBotConfig) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(telegram_worker(config, receiver));
        Self { sender }
    }
}

impl Notifier for TelegramNotifier {
    fn notify(&self, event: AlertEvent) {
        if self.sender.send(event).is_err() {
            warn!("Telegram notifier channel closed");
        }
    }
}

/// Background worker that sends Telegram messages.
async fn telegram_worker(
    config: TelegramBotConfig,
    mut receiver: mpsc::UnboundedReceiver<AlertEvent>,
) {
    let bot = Bot::new(&config.bot_token);
    let chat_id = ChatId(config.chat_id);

    info!(chat_id = config.chat_id, "Telegram notifier started");

    while let Some(event) = receiver.recv().await {
        let text = format_alert_message(&event);
        if let Err(e) = bot
            .send_message(chat_id, &text)
            .parse_mode(ParseMode::MarkdownV2)
            .await
        {
            error!(error = %e, "Failed to send Telegram message");
        }
    }

    warn!("Telegram notifier worker shutting down");
}

/// Spawn the background worker that handles inbound commands.
pub fn spawn_command_listener(config: TelegramBotConfig, control: TelegramControl) {
    tokio::spawn(telegram_command_worker(config, control));
}

/// Background worker that handles inbound Telegram commands.
async fn telegram_command_worker(config: TelegramBotConfig, control: TelegramControl) {
    let bot = Bot::new(&config.bot_token);
    let allowed_chat = ChatId(config.chat_id);

    // Register commands with Telegram so they appear in the "/" menu
    if let Err(e) = register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    info!(chat_id = config.chat_id, "Telegram command listener started");

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let control = control.clone();
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };

            if let Some(response) =
                command_response_for_message(text, msg.chat.id, allowed_chat, &control).await
            {
                // Command replies are plain text; MarkdownV2 is reserved
                // for the alert worker, which escapes its messages fully.
                if let Err(e) = bot.send_message(msg.chat.id, response).await {
                    error!(error = %e, "Failed to send Telegram command response");
                }
            }

            respond(())
        }
    })
    .await;
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = super::command::bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
