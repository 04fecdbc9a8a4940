//! Player ranking strategies.
//!
//! Every strategy turns a pool of players into a best-to-worst order by
//! sorting on a strategy-specific score. The sort is stable, so players with
//! equal scores keep the order they were given in and repeated runs over the
//! same input always agree.

use std::cmp::Ordering;

use crate::cli::types::{Position, StrategyKind};
use crate::draft::models::Player;
use crate::draft::vor::ReplacementLevels;


/// Discount applied to goalie totals by the position-adjusted ranking.
pub const DEFAULT_GOALIE_MULTIPLIER: f64 = 0.75;

/// The fixed set of ranking algorithms.
#[derive(Debug, Clone, PartialEq)]
pub enum RankingStrategy {
    /// Raw season totals. Ignores positional scarcity entirely.
    TotalPoints,
    /// Season totals with goalie points scaled by `goalie_multiplier`,
    /// since goalies rack up points faster than skaters under most scoring.
    PositionAdjusted { goalie_multiplier: f64 },
    /// Season totals minus the replacement level at the player's position.
    ValueOverReplacement { levels: ReplacementLevels },
}

impl Default for RankingStrategy {
    fn default() -> Self {
        RankingStrategy::ValueOverReplacement {
            levels: ReplacementLevels::default(),
        }
    }
}

impl From<StrategyKind> for RankingStrategy {
    /// The strategy a name selects, with default parameters.
    fn from(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Vor => RankingStrategy::default(),
            StrategyKind::Total => RankingStrategy::TotalPoints,
            StrategyKind::Adjusted => RankingStrategy::PositionAdjusted {
                goalie_multiplier: DEFAULT_GOALIE_MULTIPLIER,
            },
        }
    }
}

impl RankingStrategy {
    pub fn kind(&self) -> StrategyKind {
        match self {
            RankingStrategy::TotalPoints => StrategyKind::Total,
            RankingStrategy::PositionAdjusted { .. } => StrategyKind::Adjusted,
            RankingStrategy::ValueOverReplacement { .. } => StrategyKind::Vor,
        }
    }

    /// Sort key for `player`; higher is better.
    pub fn score(&self, player: &Player) -> f64 {
        match self {
            RankingStrategy::TotalPoints => player.total_points,
            RankingStrategy::PositionAdjusted { goalie_multiplier } => {
                if player.position_group() == Position::Goalie {
                    player.total_points * goalie_multiplier
                } else {
                    player.total_points
                }
            }
            RankingStrategy::ValueOverReplacement { levels } => {
                player.total_points - levels.get(player.position_group())
            }
        }
    }

    /// Order `players` from best to worst.
    pub fn rank(&self, players: &[Player]) -> Vec<Player> {
        let mut scored: Vec<(f64, &Player)> = players.iter().map(|p| (self.score(p), p)).collect();
        // `sort_by` is stable: equal scores keep their input order.
        scored.sort_by(|(a, _), (b, _)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
        scored.into_iter().map(|(_, p)| p.clone()).collect()
    }

    pub fn name(&self) -> String {
        match self {
            RankingStrategy::TotalPoints => "Total Points".to_string(),
            RankingStrategy::PositionAdjusted { goalie_multiplier } => {
                format!("Position Adjusted (G x{goalie_multiplier})")
            }
            RankingStrategy::ValueOverReplacement { .. } => {
                "Value Over Replacement (VOR)".to_string()
            }
        }
    }

    pub fn description(&self) -> String {
        match self {
            RankingStrategy::TotalPoints => {
                "Ranks players by total fantasy points scored this season.".to_string()
            }
            RankingStrategy::PositionAdjusted { goalie_multiplier } => format!(
                "Ranks by total fantasy points with goalie points multiplied by {goalie_multiplier}."
            ),
            RankingStrategy::ValueOverReplacement { levels } => format!(
                "Ranks by points above a freely available player at the same position \
                 (replacement level F {:.1}, D {:.1}, G {:.1}).",
                levels.forward, levels.defense, levels.goalie
            ),
        }
    }
}

/// Rank `players` with `strategy`, best first.
pub fn rank(players: &[Player], strategy: &RankingStrategy) -> Vec<Player> {
    strategy.rank(players)
}
