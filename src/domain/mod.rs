//! Provider-agnostic domain types: identities, match outcomes, live
//! state, and ranked standings.

pub mod id;
pub mod live;
pub mod match_outcome;
pub mod profile;
pub mod riot_id;

pub use id::{Puuid, SummonerId};
pub use live::{ActiveGame, LiveState};
pub use match_outcome::{loss_streak, MatchOutcome};
pub use profile::{RankSnapshot, SummonerProfile};
pub use riot_id::{ParseRiotIdError, RiotId};
