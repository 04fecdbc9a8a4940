//! Actual draft versus hindsight redraft.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    cli::types::PlayerId,
    draft::{
        models::{DraftPick, Player, RedraftComparison, RedraftResult},
        ranking::RankingStrategy,
    },
    error::EspnError,
    Result,
};


/// How many steals and busts the reports list.
pub const DEFAULT_SUMMARY_LIMIT: usize = 5;

/// Compare every pick of the draft against the strategy's ideal order.
///
/// The ranking always covers every drafted player. `round_limit` only trims
/// which comparisons are returned, so a pick's `redraft_pick` is the same
/// whether or not later rounds are displayed.
pub fn compare(
    all_picks: &[DraftPick],
    strategy: &RankingStrategy,
    round_limit: Option<u16>,
) -> Result<RedraftResult> {
    let pool: Vec<Player> = all_picks.iter().map(|pick| pick.player.clone()).collect();
    let ranked_players = strategy.rank(&pool);

    let redraft_position: HashMap<PlayerId, u32> = ranked_players
        .iter()
        .zip(1u32..)
        .map(|(player, rank)| (player.player_id, rank))
        .collect();

    let comparisons = all_picks
        .iter()
        .filter(|pick| round_limit.map_or(true, |limit| pick.round_num <= limit))
        .map(|pick| {
            let redraft_pick = redraft_position
                .get(&pick.player.player_id)
                .copied()
                .ok_or(EspnError::RankingInconsistency {
                    player_id: pick.player.player_id,
                })?;
            Ok(RedraftComparison {
                actual_pick: pick.overall_pick(),
                redraft_pick,
                player: pick.player.clone(),
                team_name: pick.team_name.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        strategy = %strategy.name(),
        ranked = ranked_players.len(),
        displayed = comparisons.len(),
        "redraft comparison built"
    );

    Ok(RedraftResult {
        comparisons,
        ranked_players,
        strategy_name: strategy.name(),
        strategy_description: strategy.description(),
    })
}

impl RedraftResult {
    /// The player the ranking would have taken at output slot `slot` (0-based).
    pub fn ideal_at(&self, slot: usize) -> Option<&Player> {
        self.ranked_players.get(slot)
    }

    /// Players taken earlier than their ranking warrants, worst first.
    pub fn biggest_busts(&self, limit: usize) -> Vec<&RedraftComparison> {
        let mut busts: Vec<&RedraftComparison> = self
            .comparisons
            .iter()
            .filter(|c| c.pick_difference() > 0)
            .collect();
        busts.sort_by_key(|c| std::cmp::Reverse(c.pick_difference()));
        busts.truncate(limit);
        busts
    }

    /// Players taken later than their ranking warrants, biggest bargain first.
    pub fn biggest_steals(&self, limit: usize) -> Vec<&RedraftComparison> {
        let mut steals: Vec<&RedraftComparison> = self
            .comparisons
            .iter()
            .filter(|c| c.pick_difference() < 0)
            .collect();
        steals.sort_by_key(|c| c.pick_difference());
        steals.truncate(limit);
        steals
    }
}
