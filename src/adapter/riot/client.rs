//! Riot REST API client.
//!
//! Implements the provider ports over the account-v1, match-v5,
//! spectator-v5, summoner-v4, and league-v4 endpoints. Account and
//! match endpoints use the regional routing host; the rest use the
//! platform host.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::RiotConfig;
use crate::domain::{
    ActiveGame, MatchOutcome, Puuid, RankSnapshot, RiotId, SummonerId, SummonerProfile,
};
use crate::error::{Result, RiotApiError};
use crate::port::{AccountResolver, LiveStatusProvider, MatchHistoryProvider};

use super::dto::{AccountDto, CurrentGameDto, LeagueEntryDto, MatchDto, SummonerDto};

const API_KEY_HEADER: &str = "X-Riot-Token";
const SOLO_QUEUE: &str = "RANKED_SOLO_5x5";

/// Client for the Riot REST API.
///
/// Cheap to share behind an [`Arc`](std::sync::Arc); the underlying
/// reqwest client pools connections. Every request carries the API key
/// header and the configured timeout, so a hung request cannot stall a
/// polling tick indefinitely.
pub struct RiotApiClient {
    http: reqwest::Client,
    platform_base: Url,
    routing_base: Url,
}

impl RiotApiClient {
    /// Build a client from config plus the API key.
    pub fn new(config: &RiotConfig, api_key: &str) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(api_key).map_err(|_| {
            crate::error::ConfigError::InvalidValue {
                field: "RIOT_API_KEY",
                reason: "contains characters not valid in an HTTP header".into(),
            }
        })?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            platform_base: Url::parse(&config.platform_base())?,
            routing_base: Url::parse(&config.routing_base())?,
        })
    }

    /// Append percent-encoded path segments to a base URL.
    fn url(base: &Url, segments: &[&str]) -> Url {
        let mut url = base.clone();
        // https bases always have mutable path segments.
        url.path_segments_mut()
            .expect("https URL has path segments")
            .extend(segments);
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, endpoint: &'static str) -> Result<T> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RiotApiError::Status {
                endpoint,
                status: status.as_u16(),
            }
            .into());
        }
        Ok(response.json().await?)
    }

    /// Resolve a Riot ID to its full summoner profile.
    pub async fn summoner_profile(&self, id: &RiotId) -> Result<SummonerProfile> {
        let puuid = self.resolve(id).await?;
        let url = Self::url(
            &self.platform_base,
            &["lol", "summoner", "v4", "summoners", "by-puuid", puuid.as_str()],
        );
        let summoner: SummonerDto = self.get_json(url, "summoner-v4").await?;

        Ok(SummonerProfile {
            puuid,
            summoner_id: SummonerId::new(summoner.id),
            profile_icon_id: summoner.profile_icon_id,
        })
    }

    /// Solo-queue ranked standing, or `None` when unranked.
    pub async fn solo_rank(&self, summoner_id: &SummonerId) -> Result<Option<RankSnapshot>> {
        let url = Self::url(
            &self.platform_base,
            &["lol", "league", "v4", "entries", "by-summoner", summoner_id.as_str()],
        );
        let entries: Vec<LeagueEntryDto> = self.get_json(url, "league-v4").await?;

        Ok(entries
            .into_iter()
            .find(|entry| entry.queue_type == SOLO_QUEUE)
            .map(|entry| RankSnapshot {
                tier: entry.tier,
                division: entry.rank,
                league_points: entry.league_points,
                wins: entry.wins,
                losses: entry.losses,
            }))
    }

    /// Recent match IDs for a player, newest-first.
    async fn match_ids(&self, puuid: &Puuid, count: usize) -> Result<Vec<String>> {
        let mut url = Self::url(
            &self.routing_base,
            &["lol", "match", "v5", "matches", "by-puuid", puuid.as_str(), "ids"],
        );
        url.query_pairs_mut()
            .append_pair("start", "0")
            .append_pair("count", &count.to_string());
        self.get_json(url, "match-v5 ids").await
    }

    /// Outcome of one match from the given player's perspective.
    async fn match_outcome(&self, match_id: &str, puuid: &Puuid) -> Result<MatchOutcome> {
        let url = Self::url(
            &self.routing_base,
            &["lol", "match", "v5", "matches", match_id],
        );
        let detail: MatchDto = self.get_json(url, "match-v5 detail").await?;

        detail
            .info
            .participants
            .iter()
            .find(|p| p.puuid == puuid.as_str())
            .map(|p| MatchOutcome { win: p.win })
            .ok_or_else(|| {
                RiotApiError::PlayerNotInMatch {
                    match_id: match_id.to_string(),
                }
                .into()
            })
    }

    /// Full spectator payload, or `None` when the player is not in game.
    pub async fn active_game(&self, puuid: &Puuid) -> Result<Option<ActiveGame>> {
        let url = Self::url(
            &self.platform_base,
            &["lol", "spectator", "v5", "active-games", "by-summoner", puuid.as_str()],
        );

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(RiotApiError::Status {
                endpoint: "spectator-v5",
                status: status.as_u16(),
            }
            .into());
        }

        let game: CurrentGameDto = response.json().await?;
        let started_at = (game.game_start_time > 0)
            .then(|| chrono::DateTime::from_timestamp_millis(game.game_start_time))
            .flatten();

        let (blue_team, red_team) = game.participants.iter().partition::<Vec<_>, _>(|p| {
            p.team_id == 100
        });

        Ok(Some(ActiveGame {
            game_mode: game.game_mode.unwrap_or_else(|| "UNKNOWN".into()),
            started_at,
            blue_team: blue_team.iter().map(|p| p.display_name().to_string()).collect(),
            red_team: red_team.iter().map(|p| p.display_name().to_string()).collect(),
        }))
    }
}

#[async_trait]
impl AccountResolver for RiotApiClient {
    async fn resolve(&self, id: &RiotId) -> Result<Puuid> {
        let url = Self::url(
            &self.routing_base,
            &[
                "riot",
                "account",
                "v1",
                "accounts",
                "by-riot-id",
                id.game_name(),
                id.tag_line(),
            ],
        );
        let account: AccountDto = self.get_json(url, "account-v1").await?;
        Ok(Puuid::new(account.puuid))
    }
}

#[async_trait]
impl MatchHistoryProvider for RiotApiClient {
    async fn recent_outcomes(&self, puuid: &Puuid, count: usize) -> Result<Vec<MatchOutcome>> {
        let match_ids = self.match_ids(puuid, count).await?;

        let mut outcomes = Vec::with_capacity(match_ids.len());
        for match_id in &match_ids {
            // A single unfetchable match is dropped from the window
            // rather than failing the whole history query.
            match self.match_outcome(match_id, puuid).await {
                Ok(outcome) => outcomes.push(outcome),
                Err(error) => {
                    warn!(match_id = %match_id, error = %error, "Skipping match detail");
                }
            }
        }

        debug!(puuid = %puuid, window = outcomes.len(), "Fetched match outcomes");
        Ok(outcomes)
    }
}

#[async_trait]
impl LiveStatusProvider for RiotApiClient {
    async fn in_active_game(&self, puuid: &Puuid) -> Result<bool> {
        let url = Self::url(
            &self.platform_base,
            &["lol", "spectator", "v5", "active-games", "by-summoner", puuid.as_str()],
        );

        let response = self.http.get(url).send().await?;
        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(RiotApiError::Status {
                endpoint: "spectator-v5",
                status: status.as_u16(),
            }
            .into()),
        }
    }
}
