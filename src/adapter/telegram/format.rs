//! Message formatting for Telegram.
//!
//! Alert messages are MarkdownV2 with full escaping; command replies
//! are plain text and sent without a parse mode, so the card formatters
//! here emit no markup.

use crate::domain::{ActiveGame, RankSnapshot, RiotId};
use crate::port::AlertEvent;

/// Format an alert into a MarkdownV2 Telegram message.
#[must_use]
pub fn format_alert_message(event: &AlertEvent) -> String {
    match event {
        AlertEvent::LossStreak { id, streak } => format!(
            "📉 *{} loss streak\\!*\n\
            \n\
            🎮 {}\n\
            💀 {} losses in a row",
            streak,
            escape_markdown(&id.to_string()),
            streak
        ),
        AlertEvent::GameStarted { id } => format!(
            "🕹️ *Game started\\!*\n\
            \n\
            🎮 {} is in a live game right now",
            escape_markdown(&id.to_string())
        ),
    }
}

/// Format a ranked standing card for command replies. Plain text.
#[must_use]
pub fn format_rank_card(id: &RiotId, rank: Option<&RankSnapshot>) -> String {
    match rank {
        Some(rank) => {
            let division = if rank.division.is_empty() {
                String::new()
            } else {
                format!(" {}", rank.division)
            };
            format!(
                "🏆 {id}\n\
                \n\
                🎖️ Tier: {}{}\n\
                🔹 LP: {}\n\
                ⚔️ Record: {}W / {}L\n\
                📊 Winrate: {}%",
                rank.tier,
                division,
                rank.league_points,
                rank.wins,
                rank.losses,
                rank.winrate_percent()
            )
        }
        None => format!(
            "🏆 {id}\n\
            \n\
            🎖️ Unranked in solo queue"
        ),
    }
}

/// Format a live-game info card. Plain text.
#[must_use]
pub fn format_active_game(id: &RiotId, game: &ActiveGame) -> String {
    let started = game
        .started_at
        .map_or_else(|| "just now".to_string(), |t| t.format("%H:%M UTC").to_string());

    format!(
        "🕹️ {id}: current game\n\
        \n\
        🎮 Mode: {}\n\
        ⏱️ Started: {}\n\
        🟦 Blue: {}\n\
        🟥 Red: {}",
        game.game_mode,
        started,
        game.blue_team.join(", "),
        game.red_team.join(", ")
    )
}

/// Escape characters reserved by Telegram MarkdownV2.
#[must_use]
pub fn escape_markdown(text: &str) -> String {
    const RESERVED: &[char] = &[
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
    ];

    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if RESERVED.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
