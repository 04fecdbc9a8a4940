//! ESPN Fantasy Hockey redraft analysis
//!
//! Pulls standings and the draft board of an ESPN fantasy hockey league,
//! totals every drafted player's season points from the weekly box scores,
//! and replays the draft in hindsight to show who was a steal and who was a bust.
//!
//! ## Features
//!
//! - **Standings and draft board**: league table and every pick with season points
//! - **Ranking strategies**: total points, position-adjusted, value over replacement
//! - **Redraft comparison**: actual pick versus hindsight pick for each player
//! - **Output**: fixed-width tables, CSV for spreadsheets, or JSON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use espn_fhl::{
//!     draft::{compare, RankingStrategy},
//!     espn::{EspnClient, LeagueClient},
//!     EspnConfig, LeagueId, Season,
//! };
//!
//! # async fn example() -> espn_fhl::Result<()> {
//! let config = EspnConfig {
//!     league_id: LeagueId::new(123456),
//!     season: Season::default(),
//!     swid: None,
//!     espn_s2: None,
//!     roster: None,
//! };
//! let mut league = LeagueClient::new(EspnClient::new(config));
//! let picks = league.draft_order().await?;
//!
//! let result = compare(&picks, &RankingStrategy::default(), Some(1))?;
//! for busted in result.biggest_busts(5) {
//!     println!("{} went {} but ranks {}", busted.player.player_name, busted.actual_pick, busted.redraft_pick);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export ESPN_LEAGUE_ID=123456
//! export ESPN_YEAR=2026
//! # private leagues only
//! export ESPN_SWID='{...}'
//! export ESPN_S2='...'
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod draft;
pub mod error;
pub mod espn;

// Re-export commonly used types
pub use cli::types::{
    classify, position_abbrev, LeagueId, MatchupPeriod, OutputFormat, PlayerId, Position, Season,
    StrategyKind, TeamId,
};
pub use config::EspnConfig;
pub use draft::{DraftPick, Player, RankingStrategy, RedraftComparison, RedraftResult, TeamStanding};
pub use error::{EspnError, Result};

pub const LEAGUE_ID_ENV_VAR: &str = "ESPN_LEAGUE_ID";
pub const SEASON_ENV_VAR: &str = "ESPN_YEAR";
pub const SWID_ENV_VAR: &str = "ESPN_SWID";
pub const ESPN_S2_ENV_VAR: &str = "ESPN_S2";
pub const CONFIG_PATH_ENV_VAR: &str = "ESPN_FHL_CONFIG";
