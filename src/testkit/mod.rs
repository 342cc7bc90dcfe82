//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests). Provides scripted implementations of the
//! provider ports plus a recording notifier, so the monitoring engine
//! can be driven through whole poll scenarios without network access.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{MatchOutcome, Puuid, RiotId};
use crate::error::{Result, RiotApiError};
use crate::port::{
    AccountResolver, AlertEvent, LiveStatusProvider, MatchHistoryProvider, Notifier,
};

/// Build an outcome window from a `W`/`L` pattern, newest-first.
#[must_use]
pub fn outcomes(pattern: &str) -> Vec<MatchOutcome> {
    pattern
        .chars()
        .map(|c| match c {
            'W' => MatchOutcome::win(),
            'L' => MatchOutcome::loss(),
            other => panic!("bad outcome pattern char {other}"),
        })
        .collect()
}

/// Resolver backed by a fixed identity table.
#[derive(Debug, Default)]
pub struct StaticResolver {
    table: Mutex<HashMap<RiotId, Puuid>>,
    failing: Mutex<HashSet<RiotId>>,
}

impl StaticResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map an identity to a puuid.
    pub fn insert(&self, id: RiotId, puuid: Puuid) {
        self.table.lock().insert(id, puuid);
    }

    /// Make resolution fail for an identity even if it is mapped.
    pub fn fail_for(&self, id: RiotId) {
        self.failing.lock().insert(id);
    }
}

#[async_trait]
impl AccountResolver for StaticResolver {
    async fn resolve(&self, id: &RiotId) -> Result<Puuid> {
        if self.failing.lock().contains(id) {
            return Err(RiotApiError::Status {
                endpoint: "account-v1",
                status: 503,
            }
            .into());
        }
        self.table.lock().get(id).cloned().ok_or_else(|| {
            RiotApiError::Status {
                endpoint: "account-v1",
                status: 404,
            }
            .into()
        })
    }
}

/// Match-history provider returning scripted windows.
#[derive(Debug, Default)]
pub struct ScriptedHistory {
    windows: Mutex<HashMap<Puuid, Vec<MatchOutcome>>>,
    failing: Mutex<HashSet<Puuid>>,
}

impl ScriptedHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the outcome window served for a player.
    pub fn set_outcomes(&self, puuid: Puuid, window: Vec<MatchOutcome>) {
        self.windows.lock().insert(puuid, window);
    }

    /// Make history fetches fail for a player.
    pub fn fail_for(&self, puuid: Puuid) {
        self.failing.lock().insert(puuid);
    }

    /// Clear a previously scripted failure.
    pub fn recover(&self, puuid: &Puuid) {
        self.failing.lock().remove(puuid);
    }
}

#[async_trait]
impl MatchHistoryProvider for ScriptedHistory {
    async fn recent_outcomes(&self, puuid: &Puuid, count: usize) -> Result<Vec<MatchOutcome>> {
        if self.failing.lock().contains(puuid) {
            return Err(RiotApiError::Status {
                endpoint: "match-v5 ids",
                status: 500,
            }
            .into());
        }
        let mut window = self.windows.lock().get(puuid).cloned().unwrap_or_default();
        window.truncate(count);
        Ok(window)
    }
}

/// Live-status provider returning scripted booleans.
#[derive(Debug, Default)]
pub struct ScriptedLiveStatus {
    in_game: Mutex<HashMap<Puuid, bool>>,
    failing: Mutex<HashSet<Puuid>>,
}

impl ScriptedLiveStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether a player is currently in a game.
    pub fn set_in_game(&self, puuid: Puuid, in_game: bool) {
        self.in_game.lock().insert(puuid, in_game);
    }

    /// Make status queries fail for a player.
    pub fn fail_for(&self, puuid: Puuid) {
        self.failing.lock().insert(puuid);
    }
}

#[async_trait]
impl LiveStatusProvider for ScriptedLiveStatus {
    async fn in_active_game(&self, puuid: &Puuid) -> Result<bool> {
        if self.failing.lock().contains(puuid) {
            return Err(RiotApiError::Status {
                endpoint: "spectator-v5",
                status: 500,
            }
            .into());
        }
        Ok(self.in_game.lock().get(puuid).copied().unwrap_or(false))
    }
}

/// Notifier that records every alert it receives.
///
/// Clones share the same buffer, so one clone can be registered while
/// the test keeps another to assert on.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<AlertEvent>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All alerts received so far, in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<AlertEvent> {
        self.events.lock().clone()
    }

    /// Number of alerts received so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Whether any alert has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: AlertEvent) {
        self.events.lock().push(event);
    }
}
