//! Edge-triggered live-game alert deduplication.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::domain::{LiveState, RiotId};

/// Per-player memory of the last observed live classification.
///
/// An alert fires only on the transition into a game: the previous state
/// was not [`LiveState::InGame`] and the current observation is in-game.
/// Every idle observation records [`LiveState::Idle`] regardless of the
/// previous value, which is what re-arms the trigger for the player's
/// next game. Players never observed before start as
/// [`LiveState::Unknown`], which also arms the trigger.
#[derive(Debug, Default)]
pub struct LiveTracker {
    states: Mutex<HashMap<RiotId, LiveState>>,
}

impl LiveTracker {
    /// Create a tracker with no recorded observations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one live-status observation.
    ///
    /// Returns `true` when the observation is an alertable idle-to-in-game
    /// edge. Check and state update share one critical section.
    pub fn observe(&self, id: &RiotId, in_game: bool) -> bool {
        let mut states = self.states.lock();

        if in_game {
            let previous = states.get(id).copied().unwrap_or_default();
            if previous.arms_game_start() {
                states.insert(id.clone(), LiveState::InGame);
                return true;
            }
            false
        } else {
            states.insert(id.clone(), LiveState::Idle);
            false
        }
    }

    /// The recorded state for a player.
    #[must_use]
    pub fn state(&self, id: &RiotId) -> LiveState {
        self.states.lock().get(id).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> RiotId {
        RiotId::new("Faker", "T1")
    }

    #[test]
    fn test_first_in_game_observation_fires() {
        let tracker = LiveTracker::new();
        assert!(tracker.observe(&id(), true));
        assert_eq!(tracker.state(&id()), LiveState::InGame);
    }

    #[test]
    fn test_repeated_in_game_is_silent() {
        let tracker = LiveTracker::new();
        assert!(tracker.observe(&id(), true));
        assert!(!tracker.observe(&id(), true));
        assert!(!tracker.observe(&id(), true));
    }

    #[test]
    fn test_idle_observation_never_fires() {
        let tracker = LiveTracker::new();
        assert!(!tracker.observe(&id(), false));
        assert_eq!(tracker.state(&id()), LiveState::Idle);
    }

    #[test]
    fn test_idle_rearms_the_edge() {
        let tracker = LiveTracker::new();
        assert!(tracker.observe(&id(), true));
        assert!(!tracker.observe(&id(), false));
        assert!(tracker.observe(&id(), true));
    }

    #[test]
    fn test_idle_after_idle_stays_idle() {
        let tracker = LiveTracker::new();
        assert!(!tracker.observe(&id(), false));
        assert!(!tracker.observe(&id(), false));
        assert_eq!(tracker.state(&id()), LiveState::Idle);
    }

    #[test]
    fn test_players_are_independent() {
        let tracker = LiveTracker::new();
        let other = RiotId::new("Chovy", "GEN");
        assert!(tracker.observe(&id(), true));
        assert!(tracker.observe(&other, true));
    }
}
