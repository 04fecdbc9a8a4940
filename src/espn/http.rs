//! HTTP access to ESPN's fantasy hockey (`fhl`) API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    cli::types::MatchupPeriod,
    config::EspnConfig,
    core::{espn_header_map, IntoHeaderValue, PlayersFilter, ScheduleFilter, Val, FANTASY_FILTER_HEADER},
    espn::types::{EspnPlayer, LeagueResponse},
    Result,
};


/// Base path for ESPN Fantasy Hockey v3 API.
pub const FHL_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/fhl";

/// League views needed to build standings and the draft board.
pub const LEAGUE_VIEWS: &[&str] = &["mTeam", "mRoster", "mDraftDetail", "mStatus"];

/// Schedule views that carry per-player matchup totals.
pub const BOX_SCORE_VIEWS: &[&str] = &["mMatchupScore", "mScoreboard"];

/// Thin client over the few ESPN endpoints the redraft tools read.
///
/// Requests are sent one at a time; transport errors are returned as-is and
/// nothing is retried.
#[derive(Debug, Clone)]
pub struct EspnClient {
    http: Client,
    base_url: String,
    config: EspnConfig,
}

impl EspnClient {
    pub fn new(config: EspnConfig) -> Self {
        Self::with_base_url(config, FHL_BASE_URL)
    }

    /// Point the client at another host (used by tests with a mock server).
    pub fn with_base_url(config: EspnConfig, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            config,
        }
    }

    pub fn config(&self) -> &EspnConfig {
        &self.config
    }

    fn league_url(&self) -> String {
        format!(
            "{}/seasons/{}/segments/0/leagues/{}",
            self.base_url, self.config.season, self.config.league_id
        )
    }

    /// League document with the given `view`s.
    pub async fn get_league(&self, views: &[&str]) -> Result<LeagueResponse> {
        let params: Vec<(&str, &str)> = views.iter().map(|v| ("view", *v)).collect();
        debug!(league_id = %self.config.league_id, season = %self.config.season, ?views, "fetching league");
        self.get_json(&self.league_url(), &params, None).await
    }

    /// Box scores (per-player totals for both lineups) of one matchup period.
    pub async fn get_box_scores(&self, period: MatchupPeriod) -> Result<LeagueResponse> {
        let period_id = period.to_string();
        let mut params: Vec<(&str, &str)> = BOX_SCORE_VIEWS.iter().map(|v| ("view", *v)).collect();
        params.push(("scoringPeriodId", period_id.as_str()));
        let filter = ScheduleFilter::for_period(period).to_header_value()?;

        debug!(%period, "fetching box scores");
        self.get_json(&self.league_url(), &params, Some(filter)).await
    }

    /// Active player pool for the season, used to resolve names and positions.
    pub async fn get_player_pool(&self) -> Result<Vec<EspnPlayer>> {
        let url = format!("{}/seasons/{}/players", self.base_url, self.config.season);
        let filter = PlayersFilter {
            filter_active: Some(Val { value: true }),
        }
        .to_header_value()?;

        debug!(season = %self.config.season, "fetching player pool");
        self.get_json(&url, &[("view", "players_wl"), ("scoringPeriodId", "0")], Some(filter))
            .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
        filter: Option<reqwest::header::HeaderValue>,
    ) -> Result<T> {
        let mut headers = espn_header_map(&self.config)?;
        if let Some(filter) = filter {
            headers.insert(FANTASY_FILTER_HEADER, filter);
        }

        let res = self
            .http
            .get(url)
            .headers(headers)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(res)
    }
}
