//! Live-game observation state.

use chrono::{DateTime, Utc};

/// Last-observed live classification for a watched player.
///
/// `Unknown` is the state before any observation (including after a
/// restart, which re-arms every player). Both `Unknown` and `Idle`
/// qualify as the "not in game" side of the idle-to-in-game edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiveState {
    #[default]
    Unknown,
    Idle,
    InGame,
}

impl LiveState {
    /// Whether a fresh in-game observation is an alertable transition
    /// out of this state.
    #[must_use]
    pub const fn arms_game_start(self) -> bool {
        !matches!(self, Self::InGame)
    }
}

/// Details of a game currently in progress, from the spectator API.
#[derive(Debug, Clone)]
pub struct ActiveGame {
    /// Game mode label as reported by the API (e.g. `CLASSIC`, `ARAM`).
    pub game_mode: String,
    /// When the game started.
    pub started_at: Option<DateTime<Utc>>,
    /// Display names of the blue-side participants (team 100).
    pub blue_team: Vec<String>,
    /// Display names of the red-side participants (team 200).
    pub red_team: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_and_idle_arm_the_edge() {
        assert!(LiveState::Unknown.arms_game_start());
        assert!(LiveState::Idle.arms_game_start());
        assert!(!LiveState::InGame.arms_game_start());
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(LiveState::default(), LiveState::Unknown);
    }
}
