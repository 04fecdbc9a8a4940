//! Redraft analysis engine.
//!
//! - `models`: immutable draft records (players, picks, standings, results)
//! - `ranking`: interchangeable "best to worst" player orderings
//! - `vor`: replacement-level baselines used by the VOR ranking
//! - `redraft`: joins a ranking against the actual draft

pub mod models;
pub mod ranking;
pub mod redraft;
pub mod vor;

pub use models::{DraftPick, PickSelection, Player, RedraftComparison, RedraftResult, TeamStanding};
pub use ranking::{rank, RankingStrategy, DEFAULT_GOALIE_MULTIPLIER};
pub use redraft::{compare, DEFAULT_SUMMARY_LIMIT};
pub use vor::{calculate_replacement_levels, ReplacementLevels, RosterSpots};
