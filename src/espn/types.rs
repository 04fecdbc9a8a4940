//! Raw ESPN fantasy hockey payloads.
//!
//! Only the fields the redraft tools read are modelled; everything else in
//! ESPN's responses is ignored. Most fields default when absent because ESPN
//! omits whole sections depending on which `view`s were requested.

use serde::Deserialize;

use crate::cli::types::{MatchupPeriod, PlayerId, TeamId};


/// League document returned by `/seasons/{year}/segments/0/leagues/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueResponse {
    #[serde(default)]
    pub teams: Vec<EspnTeam>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(rename = "draftDetail", default)]
    pub draft_detail: Option<DraftDetail>,
    #[serde(default)]
    pub status: Option<LeagueStatus>,
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
}

/// League member (a person who owns one or more teams).
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub id: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
}

impl Member {
    /// "First Last" when ESPN shares it, otherwise the display name.
    pub fn owner_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}").trim().to_string()),
            _ => self.display_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EspnTeam {
    pub id: TeamId,
    #[serde(default)]
    pub name: Option<String>,
    /// Older seasons split the team name in two.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(default)]
    pub record: Option<TeamRecord>,
    #[serde(rename = "playoffSeed", default)]
    pub playoff_seed: Option<u32>,
    #[serde(default)]
    pub roster: Option<Roster>,
}

impl EspnTeam {
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.trim().to_string();
        }
        let joined = format!(
            "{} {}",
            self.location.as_deref().unwrap_or_default(),
            self.nickname.as_deref().unwrap_or_default()
        );
        let joined = joined.trim();
        if joined.is_empty() {
            format!("Team {}", self.id)
        } else {
            joined.to_string()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamRecord {
    #[serde(default)]
    pub overall: RecordLine,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordLine {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub entries: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    #[serde(rename = "playerPoolEntry", default)]
    pub player_pool_entry: Option<PlayerPoolEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerPoolEntry {
    /// Fantasy points for the period the roster covers.
    #[serde(rename = "appliedStatTotal", default)]
    pub applied_stat_total: Option<f64>,
    #[serde(default)]
    pub player: Option<EspnPlayer>,
}

/// Player card as it appears in rosters and in `/players`.
#[derive(Debug, Clone, Deserialize)]
pub struct EspnPlayer {
    pub id: PlayerId,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "defaultPositionId", default)]
    pub default_position_id: Option<i32>,
}

impl EspnPlayer {
    /// Position label for ESPN's hockey `defaultPositionId`; empty when unknown.
    pub fn position_label(&self) -> &'static str {
        position_label(self.default_position_id)
    }
}

/// ESPN hockey position ids: 1 C, 2 LW, 3 RW, 4 D, 5 G.
pub fn position_label(default_position_id: Option<i32>) -> &'static str {
    match default_position_id {
        Some(1) => "Center",
        Some(2) => "Left Wing",
        Some(3) => "Right Wing",
        Some(4) => "Defense",
        Some(5) => "Goalie",
        _ => "",
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftDetail {
    #[serde(default)]
    pub drafted: bool,
    #[serde(default)]
    pub picks: Vec<RawPick>,
}

/// One pick as ESPN lists it, in chronological order.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPick {
    /// `-1` for a slot that has not been filled yet.
    #[serde(rename = "playerId")]
    pub player_id: i64,
    #[serde(rename = "roundId")]
    pub round_id: u16,
    #[serde(rename = "roundPickNumber")]
    pub round_pick_number: u16,
    #[serde(rename = "teamId")]
    pub team_id: TeamId,
}

impl RawPick {
    /// The selected player, if the slot has been used.
    pub fn selected_player(&self) -> Option<PlayerId> {
        u64::try_from(self.player_id)
            .ok()
            .filter(|id| *id > 0)
            .map(PlayerId::new)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueStatus {
    #[serde(rename = "currentMatchupPeriod", default)]
    pub current_matchup_period: Option<MatchupPeriod>,
}

/// A head-to-head matchup from the league schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleEntry {
    #[serde(rename = "matchupPeriodId")]
    pub matchup_period_id: MatchupPeriod,
    #[serde(default)]
    pub home: Option<MatchupSide>,
    #[serde(default)]
    pub away: Option<MatchupSide>,
}

impl ScheduleEntry {
    /// Both lineups; byes have no away side.
    pub fn sides(&self) -> impl Iterator<Item = &MatchupSide> {
        self.home.iter().chain(self.away.iter())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchupSide {
    #[serde(rename = "teamId")]
    pub team_id: TeamId,
    #[serde(rename = "rosterForMatchupPeriod", default)]
    pub roster_for_matchup_period: Option<Roster>,
    #[serde(rename = "rosterForCurrentScoringPeriod", default)]
    pub roster_for_current_scoring_period: Option<Roster>,
}

impl MatchupSide {
    /// Lineup for the whole matchup period, falling back to the current scoring period.
    pub fn lineup(&self) -> &[RosterEntry] {
        self.roster_for_matchup_period
            .as_ref()
            .or(self.roster_for_current_scoring_period.as_ref())
            .map(|r| r.entries.as_slice())
            .unwrap_or_default()
    }
}
