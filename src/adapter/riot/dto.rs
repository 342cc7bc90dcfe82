//! Riot API response payloads.
//!
//! Only the fields the bot consumes are modeled; everything else in the
//! responses is ignored.

use serde::Deserialize;

/// account-v1 by-riot-id response.
#[derive(Debug, Deserialize)]
pub struct AccountDto {
    pub puuid: String,
}

/// summoner-v4 by-puuid response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub id: String,
    pub profile_icon_id: i64,
}

/// One league-v4 ranked entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub league_points: i64,
    pub wins: u32,
    pub losses: u32,
}

/// match-v5 match detail, trimmed to the participant outcomes.
#[derive(Debug, Deserialize)]
pub struct MatchDto {
    pub info: MatchInfoDto,
}

#[derive(Debug, Deserialize)]
pub struct MatchInfoDto {
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Deserialize)]
pub struct ParticipantDto {
    pub puuid: String,
    pub win: bool,
}

/// spectator-v5 active game response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameDto {
    #[serde(default)]
    pub game_mode: Option<String>,
    /// Milliseconds since the Unix epoch; zero while loading screen.
    #[serde(default)]
    pub game_start_time: i64,
    #[serde(default)]
    pub participants: Vec<CurrentGameParticipantDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameParticipantDto {
    pub team_id: i64,
    #[serde(default)]
    pub riot_id: Option<String>,
    #[serde(default)]
    pub summoner_name: Option<String>,
}

impl CurrentGameParticipantDto {
    /// Best available display name for a participant.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.riot_id
            .as_deref()
            .or(self.summoner_name.as_deref())
            .unwrap_or("(unknown)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_account() {
        let account: AccountDto =
            serde_json::from_str(r#"{"puuid":"abc","gameName":"Faker","tagLine":"T1"}"#).unwrap();
        assert_eq!(account.puuid, "abc");
    }

    #[test]
    fn test_deserialize_match_participants() {
        let json = r#"{
            "metadata": {"matchId": "KR_123"},
            "info": {
                "participants": [
                    {"puuid": "a", "win": true, "championName": "Ahri"},
                    {"puuid": "b", "win": false}
                ]
            }
        }"#;
        let m: MatchDto = serde_json::from_str(json).unwrap();
        assert_eq!(m.info.participants.len(), 2);
        assert!(m.info.participants[0].win);
        assert!(!m.info.participants[1].win);
    }

    #[test]
    fn test_deserialize_league_entry() {
        let json = r#"[{
            "queueType": "RANKED_SOLO_5x5",
            "tier": "GOLD",
            "rank": "II",
            "leaguePoints": 57,
            "wins": 104,
            "losses": 96
        }]"#;
        let entries: Vec<LeagueEntryDto> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].queue_type, "RANKED_SOLO_5x5");
        assert_eq!(entries[0].league_points, 57);
    }

    #[test]
    fn test_current_game_display_name_fallbacks() {
        let with_riot_id = CurrentGameParticipantDto {
            team_id: 100,
            riot_id: Some("Faker#T1".into()),
            summoner_name: Some("Faker".into()),
        };
        assert_eq!(with_riot_id.display_name(), "Faker#T1");

        let with_summoner_name = CurrentGameParticipantDto {
            team_id: 200,
            riot_id: None,
            summoner_name: Some("Faker".into()),
        };
        assert_eq!(with_summoner_name.display_name(), "Faker");

        let anonymous = CurrentGameParticipantDto {
            team_id: 200,
            riot_id: None,
            summoner_name: None,
        };
        assert_eq!(anonymous.display_name(), "(unknown)");
    }
}
