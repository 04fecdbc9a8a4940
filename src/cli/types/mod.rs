//! Type-safe wrappers and enums for ESPN Fantasy Hockey data.

pub mod format;
pub mod ids;
pub mod position;
pub mod strategy;
pub mod time;

pub use format::OutputFormat;
pub use ids::{LeagueId, PlayerId, TeamId};
pub use position::{classify, position_abbrev, Position};
pub use strategy::StrategyKind;
pub use time::{MatchupPeriod, Season};
