//! Command execution against the monitoring engine.

use std::sync::Arc;

use teloxide::types::ChatId;
use tracing::warn;

use crate::adapter::riot::RiotApiClient;
use crate::application::{Monitor, WatchKind};
use crate::domain::RiotId;

use super::command::{command_help, parse_command, CommandParseError, TelegramCommand};
use super::format::{format_active_game, format_rank_card};

/// Executes parsed commands and renders reply text.
#[derive(Clone)]
pub struct TelegramControl {
    monitor: Arc<Monitor>,
    riot: Arc<RiotApiClient>,
}

impl TelegramControl {
    /// Create a control around the monitor and the Riot client.
    #[must_use]
    pub fn new(monitor: Arc<Monitor>, riot: Arc<RiotApiClient>) -> Self {
        Self { monitor, riot }
    }

    /// Execute one parsed command and return response text.
    pub async fn execute(&self, command: TelegramCommand) -> String {
        match command {
            TelegramCommand::Start | TelegramCommand::Help => command_help().to_string(),
            TelegramCommand::Watch(id) => self.watch_text(WatchKind::Streak, id).await,
            TelegramCommand::Unwatch(id) => self.unwatch_text(WatchKind::Streak, &id),
            TelegramCommand::Watching => self.watching_text(WatchKind::Streak),
            TelegramCommand::LiveWatch(id) => self.watch_text(WatchKind::Live, id).await,
            TelegramCommand::LiveUnwatch(id) => self.unwatch_text(WatchKind::Live, &id),
            TelegramCommand::LiveWatching => self.watching_text(WatchKind::Live),
            TelegramCommand::Rank(id) => self.rank_text(&id).await,
            TelegramCommand::Game(id) => self.game_text(&id).await,
        }
    }

    async fn watch_text(&self, kind: WatchKind, id: RiotId) -> String {
        if let Err(error) = self.monitor.watch(kind, id.clone()).await {
            return format!("❌ {error}");
        }

        // A pre-existing streak should announce itself right away rather
        // than waiting out the first 15-minute tick.
        if kind == WatchKind::Streak {
            if let Err(error) = self.monitor.probe_streak(&id).await {
                warn!(riot_id = %id, error = %error, "Initial streak check failed");
            }
        }

        let rank_card = self.rank_text(&id).await;
        format!(
            "✅ {id} added to the {} watchlist\n\n{rank_card}",
            kind.label()
        )
    }

    fn unwatch_text(&self, kind: WatchKind, id: &RiotId) -> String {
        match self.monitor.unwatch(kind, id) {
            Ok(()) => format!("✅ {id} removed from the {} watchlist", kind.label()),
            Err(error) => format!("❌ {error}"),
        }
    }

    fn watching_text(&self, kind: WatchKind) -> String {
        let mut members = self.monitor.watching(kind);
        if members.is_empty() {
            return format!("📋 The {} watchlist is empty", kind.label());
        }

        members.sort_by_key(std::string::ToString::to_string);
        let listing = members
            .iter()
            .map(std::string::ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        format!("📋 {} watchlist:\n{listing}", kind.label())
    }

    async fn rank_text(&self, id: &RiotId) -> String {
        let profile = match self.riot.summoner_profile(id).await {
            Ok(profile) => profile,
            Err(error) => return format!("❌ could not look up {id}: {error}"),
        };

        match self.riot.solo_rank(&profile.summoner_id).await {
            Ok(rank) => format_rank_card(id, rank.as_ref()),
            Err(error) => format!("❌ could not fetch rank for {id}: {error}"),
        }
    }

    async fn game_text(&self, id: &RiotId) -> String {
        use crate::port::AccountResolver;

        let puuid = match self.riot.resolve(id).await {
            Ok(puuid) => puuid,
            Err(error) => return format!("❌ could not look up {id}: {error}"),
        };

        match self.riot.active_game(&puuid).await {
            Ok(Some(game)) => format_active_game(id, &game),
            Ok(None) => format!("💤 {id} is not in a game right now"),
            Err(error) => format!("❌ could not fetch game info for {id}: {error}"),
        }
    }
}

/// Process a message and return a response if it's an authorized command.
///
/// Returns `None` for messages from unauthorized chats and for messages
/// that are not commands; invalid commands get an error reply with the
/// help text.
pub async fn command_response_for_message(
    text: &str,
    incoming_chat: ChatId,
    allowed_chat: ChatId,
    control: &TelegramControl,
) -> Option<String> {
    if !is_authorized_chat(incoming_chat, allowed_chat) {
        return None;
    }

    match parse_command(text) {
        Ok(command) => Some(control.execute(command).await),
        Err(CommandParseError::NotACommand) => None,
        Err(err) => Some(format!("Invalid command: {err}\n\n{}", command_help())),
    }
}

/// Check if a chat is authorized to send commands.
fn is_authorized_chat(incoming_chat: ChatId, allowed_chat: ChatId) -> bool {
    if incoming_chat == allowed_chat {
        return true;
    }

    warn!(
        chat_id = incoming_chat.0,
        "Ignoring Telegram message from unauthorized chat"
    );
    false
}
