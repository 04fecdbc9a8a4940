//! Turns ESPN league payloads into draft records.
//!
//! The assembly functions are pure so they can be tested against fixture
//! payloads; [`LeagueClient`] strings them together over HTTP and memoizes
//! what it fetched for the rest of the run.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::{
    cli::types::{MatchupPeriod, PlayerId},
    config::EspnConfig,
    draft::models::{DraftPick, PickSelection, Player, TeamStanding},
    espn::{
        http::{EspnClient, LEAGUE_VIEWS},
        types::{EspnPlayer, LeagueResponse},
    },
    Result,
};


const UNKNOWN: &str = "Unknown";

/// Names and position labels gathered from whatever ESPN payloads mention a player.
///
/// The first non-empty value seen for a player wins.
#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    names: HashMap<PlayerId, String>,
    positions: HashMap<PlayerId, String>,
}

impl PlayerDirectory {
    pub fn record(&mut self, player: &EspnPlayer) {
        if let Some(name) = player.full_name.as_deref().filter(|n| !n.is_empty()) {
            self.names.entry(player.id).or_insert_with(|| name.to_string());
        }
        let label = player.position_label();
        if !label.is_empty() {
            self.positions.entry(player.id).or_insert_with(|| label.to_string());
        }
    }

    /// Every player card on every team roster.
    pub fn record_rosters(&mut self, league: &LeagueResponse) {
        let cards = league
            .teams
            .iter()
            .filter_map(|t| t.roster.as_ref())
            .flat_map(|r| r.entries.iter())
            .filter_map(|e| e.player_pool_entry.as_ref()?.player.as_ref());
        for card in cards {
            self.record(card);
        }
    }

    pub fn record_pool(&mut self, pool: &[EspnPlayer]) {
        for card in pool {
            self.record(card);
        }
    }

    pub fn name(&self, id: PlayerId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn position(&self, id: PlayerId) -> Option<&str> {
        self.positions.get(&id).map(String::as_str)
    }

    /// Whether both a name and a position are known for `id`.
    pub fn knows(&self, id: PlayerId) -> bool {
        self.names.contains_key(&id) && self.positions.contains_key(&id)
    }
}

/// Season-long fantasy points per player.
#[derive(Debug, Clone, Default)]
pub struct SeasonTotals {
    points: HashMap<PlayerId, f64>,
}

impl SeasonTotals {
    /// Add every lineup total from one period's box scores.
    ///
    /// Schedule entries for other periods are skipped, so a response that
    /// ignores the period filter is not double counted.
    pub fn add_box_scores(
        &mut self,
        period: MatchupPeriod,
        box_scores: &LeagueResponse,
        directory: &mut PlayerDirectory,
    ) {
        let lineups = box_scores
            .schedule
            .iter()
            .filter(|m| m.matchup_period_id == period)
            .flat_map(|m| m.sides())
            .flat_map(|side| side.lineup());

        for entry in lineups {
            let Some(pool_entry) = entry.player_pool_entry.as_ref() else {
                continue;
            };
            if let Some(points) = pool_entry.applied_stat_total {
                *self.points.entry(entry.player_id).or_insert(0.0) += points;
            }
            if let Some(card) = pool_entry.player.as_ref() {
                directory.record(card);
            }
        }
    }

    /// 0.0 for players who never appeared in a box score.
    pub fn points(&self, id: PlayerId) -> f64 {
        self.points.get(&id).copied().unwrap_or(0.0)
    }
}

/// League table sorted by rank; teams without a seed go last.
pub fn standings_from(league: &LeagueResponse) -> Vec<TeamStanding> {
    let owners: HashMap<&str, String> = league
        .members
        .iter()
        .filter_map(|m| Some((m.id.as_str(), m.owner_name()?)))
        .collect();

    let mut standings: Vec<TeamStanding> = league
        .teams
        .iter()
        .map(|team| {
            let record = team.record.clone().unwrap_or_default().overall;
            TeamStanding {
                team_id: team.id,
                team_name: team.display_name(),
                owner: team
                    .owners
                    .first()
                    .and_then(|id| owners.get(id.as_str()).cloned())
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                wins: record.wins,
                losses: record.losses,
                ties: record.ties,
                standing: team.playoff_seed.unwrap_or(0),
            }
        })
        .collect();

    standings.sort_by_key(|t| (t.standing == 0, t.standing));
    standings
}

/// Draft board in chronological order, numbered from 1.
///
/// Unfilled slots are dropped. Players without a known name or team fall back
/// to "Unknown"; players without a known position get an empty label.
pub fn draft_from(
    league: &LeagueResponse,
    directory: &PlayerDirectory,
    totals: &SeasonTotals,
) -> Vec<DraftPick> {
    let team_names: HashMap<_, _> = league
        .teams
        .iter()
        .map(|t| (t.id, t.display_name()))
        .collect();

    let selections = league
        .draft_detail
        .iter()
        .flat_map(|d| d.picks.iter())
        .filter_map(|pick| {
            let player_id = pick.selected_player()?;
            Some(PickSelection {
                round_num: pick.round_id,
                pick_num: pick.round_pick_number,
                team_id: pick.team_id,
                team_name: team_names
                    .get(&pick.team_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                player: Player::new(
                    player_id,
                    directory.name(player_id).unwrap_or(UNKNOWN),
                    directory.position(player_id).unwrap_or_default(),
                    totals.points(player_id),
                ),
            })
        });

    DraftPick::chronological(selections)
}

/// Drafted player ids, in pick order.
pub fn drafted_player_ids(league: &LeagueResponse) -> Vec<PlayerId> {
    league
        .draft_detail
        .iter()
        .flat_map(|d| d.picks.iter())
        .filter_map(|p| p.selected_player())
        .collect()
}

/// ESPN league access with per-run memoization.
pub struct LeagueClient {
    client: EspnClient,
    league: Option<LeagueResponse>,
    season: Option<(SeasonTotals, PlayerDirectory)>,
}

impl LeagueClient {
    pub fn new(client: EspnClient) -> Self {
        Self {
            client,
            league: None,
            season: None,
        }
    }

    pub fn config(&self) -> &EspnConfig {
        self.client.config()
    }

    async fn league(&mut self) -> Result<&LeagueResponse> {
        let league = match self.league.take() {
            Some(league) => league,
            None => self.client.get_league(LEAGUE_VIEWS).await?,
        };
        Ok(self.league.insert(league))
    }

    /// Current standings, best first.
    pub async fn standings(&mut self) -> Result<Vec<TeamStanding>> {
        Ok(standings_from(self.league().await?))
    }

    pub async fn team_count(&mut self) -> Result<usize> {
        Ok(self.league().await?.teams.len())
    }

    /// Full draft with every player's season points attached.
    pub async fn draft_order(&mut self) -> Result<Vec<DraftPick>> {
        let drafted = drafted_player_ids(self.league().await?);
        if drafted.is_empty() {
            warn!("league has no draft results yet");
            return Ok(Vec::new());
        }

        self.load_season(&drafted).await?;
        match (&self.league, &self.season) {
            (Some(league), Some((totals, directory))) => Ok(draft_from(league, directory, totals)),
            _ => Ok(Vec::new()),
        }
    }

    /// Sum box scores for every completed period and resolve drafted players' cards.
    async fn load_season(&mut self, drafted: &[PlayerId]) -> Result<()> {
        if self.season.is_some() {
            return Ok(());
        }

        let league = self.league().await?;
        let current = league
            .status
            .as_ref()
            .and_then(|s| s.current_matchup_period)
            .unwrap_or(MatchupPeriod::new(0));
        let mut directory = PlayerDirectory::default();
        directory.record_rosters(league);

        let mut totals = SeasonTotals::default();
        for period in current.through() {
            let box_scores = self.client.get_box_scores(period).await?;
            totals.add_box_scores(period, &box_scores, &mut directory);
        }
        info!(periods = current.as_u16(), "season totals loaded");

        let missing = drafted.iter().filter(|id| !directory.knows(**id)).count();
        if missing > 0 {
            debug!(missing, "resolving drafted players from the player pool");
            directory.record_pool(&self.client.get_player_pool().await?);
        }

        self.season = Some((totals, directory));
        Ok(())
    }
}
