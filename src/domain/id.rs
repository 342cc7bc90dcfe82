//! Opaque identifier types returned by the Riot API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Player universally unique identifier - newtype for type safety.
///
/// Returned by account resolution and stable for a given Riot ID. The
/// inner String is private so all construction goes through the defined
/// constructors; the monitoring core never inspects its content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Puuid(String);

impl Puuid {
    /// Create a new `Puuid` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the PUUID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Puuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Puuid {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Puuid {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Encrypted summoner identifier - newtype for type safety.
///
/// Used by the league-v4 ranked entry lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SummonerId(String);

impl SummonerId {
    /// Create a new `SummonerId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the summoner ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SummonerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SummonerId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SummonerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
