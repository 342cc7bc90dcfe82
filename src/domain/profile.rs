//! Summoner profile and ranked standing.

use crate::domain::id::{Puuid, SummonerId};

/// Basic summoner profile resolved from a Riot ID.
#[derive(Debug, Clone)]
pub struct SummonerProfile {
    pub puuid: Puuid,
    pub summoner_id: SummonerId,
    pub profile_icon_id: i64,
}

/// Solo-queue ranked standing for one summoner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankSnapshot {
    /// Tier name as reported by the API (e.g. `GOLD`, `CHALLENGER`).
    pub tier: String,
    /// Division within the tier (e.g. `II`); empty at apex tiers.
    pub division: String,
    pub league_points: i64,
    pub wins: u32,
    pub losses: u32,
}

impl RankSnapshot {
    /// Win rate over ranked games, as a percentage rounded to two
    /// decimal places. Zero when no games have been played.
    #[must_use]
    pub fn winrate_percent(&self) -> f64 {
        let total = self.wins + self.losses;
        if total == 0 {
            return 0.0;
        }
        let raw = f64::from(self.wins) / f64::from(total) * 100.0;
        (raw * 100.0).round() / 100.0
    }
}
