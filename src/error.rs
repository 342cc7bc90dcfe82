use thiserror::Error;

use crate::domain::riot_id::RiotId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Watchlist mutation errors, surfaced to the command layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WatchError {
    #[error("`{0}` is already on the watchlist")]
    AlreadyWatched(RiotId),

    #[error("`{0}` is not on the watchlist")]
    NotWatched(RiotId),

    #[error("could not resolve `{id}`: {reason}")]
    Unresolvable { id: RiotId, reason: String },
}

/// Riot API request errors.
///
/// These are always subject-local during a polling tick: the poll loop
/// logs them and moves on to the next watched player.
#[derive(Error, Debug)]
pub enum RiotApiError {
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: &'static str, status: u16 },

    #[error("player not found in match {match_id}")]
    PlayerNotInMatch { match_id: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Watch(#[from] WatchError),

    #[error(transparent)]
    RiotApi(#[from] RiotApiError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
