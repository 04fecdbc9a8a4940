//! Replacement-level baselines for value-over-replacement ranking.
//!
//! A replacement level is what a freely available player at a position is
//! expected to score: the best player who would not make a starting lineup
//! once every team has filled its slots at that position.

use serde::{Deserialize, Serialize};

use crate::cli::types::Position;
use crate::draft::models::Player;

pub const DEFAULT_FORWARD_REPLACEMENT: f64 = 46.1;
pub const DEFAULT_DEFENSE_REPLACEMENT: f64 = 45.0;
pub const DEFAULT_GOALIE_REPLACEMENT: f64 = 72.6;

/// Per-position baseline subtracted from a player's season total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReplacementLevels {
    pub forward: f64,
    pub defense: f64,
    pub goalie: f64,
}

impl Default for ReplacementLevels {
    /// Baselines observed in a typical 12-team league.
    fn default() -> Self {
        Self {
            forward: DEFAULT_FORWARD_REPLACEMENT,
            defense: DEFAULT_DEFENSE_REPLACEMENT,
            goalie: DEFAULT_GOALIE_REPLACEMENT,
        }
    }
}

impl ReplacementLevels {
    pub fn get(&self, position: Position) -> f64 {
        match position {
            Position::Forward => self.forward,
            Position::Defense => self.defense,
            Position::Goalie => self.goalie,
        }
    }
}

/// League size and starting lineup shape.
///
/// Doubles as the `[roster]` table of the config file; missing keys take the
/// defaults of a standard 12-team ESPN hockey league.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterSpots {
    pub num_teams: usize,
    pub forward: usize,
    pub defense: usize,
    pub goalie: usize,
}

impl Default for RosterSpots {
    fn default() -> Self {
        Self {
            num_teams: 12,
            forward: 9,
            defense: 4,
            goalie: 2,
        }
    }
}

impl RosterSpots {
    /// Starting slots per team at `position`.
    pub fn spots(&self, position: Position) -> usize {
        match position {
            Position::Forward => self.forward,
            Position::Defense => self.defense,
            Position::Goalie => self.goalie,
        }
    }

    /// Starters league-wide at `position`.
    pub fn starters_needed(&self, position: Position) -> usize {
        self.num_teams * self.spots(position)
    }
}

/// Derive replacement levels from a player pool.
///
/// For each position the pool is sorted by points, best first, and the
/// replacement level is the score at index `starters_needed`. A position with
/// too few players falls back to its worst player; an empty position is 0.0.
pub fn calculate_replacement_levels(players: &[Player], roster: &RosterSpots) -> ReplacementLevels {
    let level = |position: Position| {
        let mut points: Vec<f64> = players
            .iter()
            .filter(|p| p.position_group() == position)
            .map(|p| p.total_points)
            .collect();
        points.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

        let starters = roster.starters_needed(position);
        points
            .get(starters)
            .or_else(|| points.last())
            .copied()
            .unwrap_or(0.0)
    };

    ReplacementLevels {
        forward: level(Position::Forward),
        defense: level(Position::Defense),
        goalie: level(Position::Goalie),
    }
}
