//! Draft records shared by the ESPN client, the ranking engine and the renderers.

use serde::{Deserialize, Serialize};

use crate::cli::types::{classify, PlayerId, Position, TeamId};

/// A drafted player and their season-long production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub player_name: String,
    /// Position label as ESPN reports it ("Center", "Goalie", ...). May be empty.
    #[serde(default)]
    pub position: String,
    /// Fantasy points accumulated this season; 0.0 when ESPN has none on record.
    #[serde(default)]
    pub total_points: f64,
}

impl Player {
    pub fn new(
        player_id: PlayerId,
        player_name: impl Into<String>,
        position: impl Into<String>,
        total_points: f64,
    ) -> Self {
        Self {
            player_id,
            player_name: player_name.into(),
            position: position.into(),
            total_points,
        }
    }

    /// Ranking group for this player's position label.
    pub fn position_group(&self) -> Position {
        classify(&self.position)
    }
}

/// One selection as the data provider reports it, before it is numbered.
#[derive(Debug, Clone, PartialEq)]
pub struct PickSelection {
    pub round_num: u16,
    pub pick_num: u16,
    pub team_id: TeamId,
    pub team_name: String,
    pub player: Player,
}

/// A numbered pick in the draft.
///
/// `overall_pick` is never read from the provider: it is the 1-based position
/// of the pick in the chronological sequence handed to [`DraftPick::chronological`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftPick {
    pub round_num: u16,
    pub pick_num: u16,
    overall_pick: u32,
    pub team_id: TeamId,
    pub team_name: String,
    pub player: Player,
}

impl DraftPick {
    /// Number selections in the order given, starting at 1.
    pub fn chronological(selections: impl IntoIterator<Item = PickSelection>) -> Vec<DraftPick> {
        selections
            .into_iter()
            .zip(1u32..)
            .map(|(s, overall_pick)| DraftPick {
                round_num: s.round_num,
                pick_num: s.pick_num,
                overall_pick,
                team_id: s.team_id,
                team_name: s.team_name,
                player: s.player,
            })
            .collect()
    }

    pub fn overall_pick(&self) -> u32 {
        self.overall_pick
    }
}

/// A team's place in the league table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStanding {
    pub team_id: TeamId,
    pub team_name: String,
    pub owner: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    /// 1-based rank
    pub standing: u32,
}

impl TeamStanding {
    /// W-L-T
    pub fn record(&self) -> String {
        format!("{}-{}-{}", self.wins, self.losses, self.ties)
    }
}

/// Where a player was actually drafted versus where hindsight would put them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RedraftComparison {
    pub actual_pick: u32,
    /// 1-based rank over every drafted player, regardless of any round filter.
    pub redraft_pick: u32,
    pub player: Player,
    pub team_name: String,
}

impl RedraftComparison {
    /// Positive: drafted earlier than the ranking warrants (bust).
    /// Negative: drafted later than the ranking warrants (steal).
    pub fn pick_difference(&self) -> i64 {
        i64::from(self.actual_pick) - i64::from(self.redraft_pick)
    }
}

/// Output of [`compare`](crate::draft::redraft::compare).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RedraftResult {
    /// One entry per displayed pick, in draft order.
    pub comparisons: Vec<RedraftComparison>,
    /// Every drafted player, best first.
    pub ranked_players: Vec<Player>,
    pub strategy_name: String,
    pub strategy_description: String,
}
