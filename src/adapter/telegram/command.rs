//! Telegram command parsing.

use crate::domain::RiotId;

/// Supported Telegram commands.
#[derive(Debug, Clone, PartialEq)]
pub enum TelegramCommand {
    Start,
    Help,
    Watch(RiotId),
    Unwatch(RiotId),
    Watching,
    LiveWatch(RiotId),
    LiveUnwatch(RiotId),
    LiveWatching,
    Rank(RiotId),
    Game(RiotId),
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidRiotId(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
            Self::MissingArgument(name) => write!(f, "missing argument `{name}`"),
            Self::InvalidRiotId(value) => {
                write!(f, "invalid Riot ID `{value}` (expected `name#tag`)")
            }
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a bot command.
pub fn parse_command(text: &str) -> Result<TelegramCommand, CommandParseError> {
    let trimmed = text.trim();
    let Some(raw_command) = trimmed.split_whitespace().next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    // `/watch@BotName` form used in group chats.
    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);

    // Riot IDs contain spaces, so the argument is the whole remainder.
    let argument = trimmed[raw_command.len()..].trim();

    match command {
        "/start" => Ok(TelegramCommand::Start),
        "/help" => Ok(TelegramCommand::Help),
        "/watching" => Ok(TelegramCommand::Watching),
        "/livewatching" => Ok(TelegramCommand::LiveWatching),
        "/watch" => Ok(TelegramCommand::Watch(parse_riot_id(argument)?)),
        "/unwatch" => Ok(TelegramCommand::Unwatch(parse_riot_id(argument)?)),
        "/livewatch" => Ok(TelegramCommand::LiveWatch(parse_riot_id(argument)?)),
        "/liveunwatch" => Ok(TelegramCommand::LiveUnwatch(parse_riot_id(argument)?)),
        "/rank" => Ok(TelegramCommand::Rank(parse_riot_id(argument)?)),
        "/game" => Ok(TelegramCommand::Game(parse_riot_id(argument)?)),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_riot_id(argument: &str) -> Result<RiotId, CommandParseError> {
    if argument.is_empty() {
        return Err(CommandParseError::MissingArgument("name#tag"));
    }
    RiotId::parse(argument).map_err(|_| CommandParseError::InvalidRiotId(argument.to_string()))
}

/// Help text returned by `/start` and `/help`.
#[must_use]
pub const fn command_help() -> &'static str {
    "📋 Commands\n\n\
    /watch <name#tag> - 📉 Watch for loss streaks\n\
    /unwatch <name#tag> - Stop loss-streak watching\n\
    /watching - List loss-streak watchlist\n\
    /livewatch <name#tag> - 🕹️ Watch for live games\n\
    /liveunwatch <name#tag> - Stop live-game watching\n\
    /livewatching - List live-game watchlist\n\
    /rank <name#tag> - 🏆 Ranked standing lookup\n\
    /game <name#tag> - 🎮 Current game info\n\
    /help - This message"
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("watch", "Watch a player for loss streaks"),
        ("unwatch", "Stop loss-streak watching"),
        ("watching", "List the loss-streak watchlist"),
        ("livewatch", "Watch a player for live games"),
        ("liveunwatch", "Stop live-game watching"),
        ("livewatching", "List the live-game watchlist"),
        ("rank", "Ranked standing lookup"),
        ("game", "Current game info"),
        ("help", "Show available commands"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_watch_with_spaced_name() {
        let command = parse_command("/watch Hide on bush#KR1").unwrap();
        assert_eq!(
            command,
            TelegramCommand::Watch(RiotId::new("Hide on bush", "KR1"))
        );
    }

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(parse_command("/watching").unwrap(), TelegramCommand::Watching);
        assert_eq!(parse_command("/help").unwrap(), TelegramCommand::Help);
    }

    #[test]
    fn test_parse_strips_bot_mention() {
        let command = parse_command("/rank@tiltwatch_bot Faker#T1").unwrap();
        assert_eq!(command, TelegramCommand::Rank(RiotId::new("Faker", "T1")));
    }

    #[test]
    fn test_parse_missing_argument() {
        assert_eq!(
            parse_command("/watch"),
            Err(CommandParseError::MissingArgument("name#tag"))
        );
    }

    #[test]
    fn test_parse_invalid_riot_id() {
        assert!(matches!(
            parse_command("/watch Faker"),
            Err(CommandParseError::InvalidRiotId(_))
        ));
    }

    #[test]
    fn test_parse_non_command_text() {
        assert_eq!(parse_command("hello"), Err(CommandParseError::NotACommand));
        assert_eq!(parse_command("   "), Err(CommandParseError::NotACommand));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_command("/frobnicate"),
            Err(CommandParseError::UnknownCommand("/frobnicate".to_string()))
        );
    }
}
