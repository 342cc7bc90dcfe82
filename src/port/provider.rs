//! Outbound data-provider ports.
//!
//! These traits are the monitoring engine's only view of the Riot API.
//! The engine calls them as black boxes; transport, encoding, and
//! endpoint details live in the adapter layer.

use async_trait::async_trait;

use crate::domain::{MatchOutcome, Puuid, RiotId};
use crate::error::Result;

/// Resolve a display identity to an opaque player id.
///
/// Invalid identities and transport failures are both reported as plain
/// errors; the engine does not distinguish them.
#[async_trait]
pub trait AccountResolver: Send + Sync {
    async fn resolve(&self, id: &RiotId) -> Result<Puuid>;
}

/// Fetch a bounded window of recent match outcomes.
#[async_trait]
pub trait MatchHistoryProvider: Send + Sync {
    /// Return up to `count` outcomes, ordered newest-first.
    async fn recent_outcomes(&self, puuid: &Puuid, count: usize) -> Result<Vec<MatchOutcome>>;
}

/// Query whether a player is currently in an active game.
#[async_trait]
pub trait LiveStatusProvider: Send + Sync {
    async fn in_active_game(&self, puuid: &Puuid) -> Result<bool>;
}
