//! Riot ID display identity.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string cannot be parsed as a Riot ID.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid Riot ID `{input}` (expected `name#tag`)")]
pub struct ParseRiotIdError {
    pub input: String,
}

/// A player's display identity: game name plus tag line.
///
/// This is the key into watchlists and alert-dedup maps. Equality is
/// exact string-pair equality; no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiotId {
    game_name: String,
    tag_line: String,
}

impl RiotId {
    /// Create a Riot ID from its two components.
    pub fn new(game_name: impl Into<String>, tag_line: impl Into<String>) -> Self {
        Self {
            game_name: game_name.into(),
            tag_line: tag_line.into(),
        }
    }

    /// Parse a `name#tag` display string.
    ///
    /// Splits on the first `#`; both halves must be non-empty after
    /// trimming surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, ParseRiotIdError> {
        let trimmed = input.trim();
        let Some((name, tag)) = trimmed.split_once('#') else {
            return Err(ParseRiotIdError {
                input: input.to_string(),
            });
        };

        let name = name.trim();
        let tag = tag.trim();
        if name.is_empty() || tag.is_empty() {
            return Err(ParseRiotIdError {
                input: input.to_string(),
            });
        }

        Ok(Self::new(name, tag))
    }

    /// Game name half of the identity.
    #[must_use]
    pub fn game_name(&self) -> &str {
        &self.game_name
    }

    /// Tag line half of the identity.
    #[must_use]
    pub fn tag_line(&self) -> &str {
        &self.tag_line
    }
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

impl std::str::FromStr for RiotId {
    type Err = ParseRiotIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_riot_id() {
        let id = RiotId::parse("Hide on bush#KR1").unwrap();
        assert_eq!(id.game_name(), "Hide on bush");
        assert_eq!(id.tag_line(), "KR1");
        assert_eq!(id.to_string(), "Hide on bush#KR1");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let id = RiotId::parse("  Faker # T1 ").unwrap();
        assert_eq!(id.game_name(), "Faker");
        assert_eq!(id.tag_line(), "T1");
    }

    #[test]
    fn test_parse_splits_on_first_hash() {
        let id = RiotId::parse("a#b#c").unwrap();
        assert_eq!(id.game_name(), "a");
        assert_eq!(id.tag_line(), "b#c");
    }

    #[test]
    fn test_parse_rejects_missing_hash() {
        assert!(RiotId::parse("Faker").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_halves() {
        assert!(RiotId::parse("#KR1").is_err());
        assert!(RiotId::parse("Faker#").is_err());
        assert!(RiotId::parse("#").is_err());
    }

    #[test]
    fn test_equality_is_exact() {
        assert_eq!(RiotId::new("Faker", "T1"), RiotId::new("Faker", "T1"));
        assert_ne!(RiotId::new("Faker", "T1"), RiotId::new("faker", "T1"));
    }
}
