//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{LeagueId, OutputFormat, Season, StrategyKind};

use crate::config::ConfigOverrides;

/// Options shared by every command.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// League ID (or set `ESPN_LEAGUE_ID` env var).
    #[clap(long, short, global = true)]
    pub league_id: Option<LeagueId>,

    /// Season year, named for the year it ends in (or set `ESPN_YEAR`; default 2026).
    #[clap(long, short, global = true)]
    pub season: Option<Season>,

    /// TOML config file (or set `ESPN_FHL_CONFIG`; default `./espn-fhl.toml` if present).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log progress to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            league_id: self.league_id,
            season: self.season,
            config_path: self.config.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the league table.
    Standings {
        /// Output format.
        #[clap(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show who was drafted where, with season points.
    Draft {
        /// Only show the first N rounds.
        #[clap(long, short, value_parser = clap::value_parser!(u16).range(1..))]
        rounds: Option<u16>,

        /// Output format.
        #[clap(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Compare the actual draft against a hindsight redraft.
    ///
    /// Every drafted player is ranked by the chosen strategy; `--rounds` only
    /// limits how many picks are displayed.
    Redraft {
        /// Number of rounds to display.
        #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
        rounds: u16,

        /// Ranking strategy: vor, total or adjusted.
        #[clap(long, default_value_t = StrategyKind::Vor)]
        strategy: StrategyKind,

        /// Output format (`csv` pastes cleanly into a spreadsheet).
        #[clap(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Goalie discount for the adjusted strategy (default 0.75).
        #[clap(long)]
        goalie_multiplier: Option<f64>,

        /// Compute VOR replacement levels from the drafted players instead of the defaults.
        #[clap(long)]
        computed_baselines: bool,

        /// League size for computed baselines (default: config `[roster]`, then the league's team count).
        #[clap(long)]
        num_teams: Option<usize>,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "espn-fhl",
    about = "ESPN Fantasy Hockey standings, draft board and redraft analysis"
)]
pub struct ESPN {
    #[clap(flatten)]
    pub global: GlobalArgs,

    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_redraft_defaults() {
        let app = ESPN::try_parse_from(["espn-fhl", "redraft"]).unwrap();
        assert!(!app.global.verbose);
        match app.command {
            Commands::Redraft {
                rounds,
                strategy,
                format,
                goalie_multiplier,
                computed_baselines,
                num_teams,
            } => {
                assert_eq!(rounds, 1);
                assert_eq!(strategy, StrategyKind::Vor);
                assert_eq!(format, OutputFormat::Table);
                assert_eq!(goalie_multiplier, None);
                assert!(!computed_baselines);
                assert_eq!(num_teams, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_redraft_flags() {
        let app = ESPN::try_parse_from([
            "espn-fhl",
            "redraft",
            "--rounds",
            "3",
            "--strategy",
            "ADJUSTED",
            "--format",
            "csv",
            "--goalie-multiplier",
            "0.6",
            "--league-id",
            "424242",
        ])
        .unwrap();

        assert_eq!(app.global.league_id, Some(LeagueId::new(424242)));
        match app.command {
            Commands::Redraft {
                rounds,
                strategy,
                format,
                goalie_multiplier,
                ..
            } => {
                assert_eq!(rounds, 3);
                assert_eq!(strategy, StrategyKind::Adjusted);
                assert_eq!(format, OutputFormat::Csv);
                assert_eq!(goalie_multiplier, Some(0.6));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let err = ESPN::try_parse_from(["espn-fhl", "redraft", "--strategy", "war"]).unwrap_err();
        assert!(err.to_string().contains("Unknown strategy"));
    }

    #[test]
    fn test_zero_rounds_rejected() {
        assert!(ESPN::try_parse_from(["espn-fhl", "redraft", "--rounds", "0"]).is_err());
        assert!(ESPN::try_parse_from(["espn-fhl", "draft", "--rounds", "0"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let app = ESPN::try_parse_from([
            "espn-fhl",
            "standings",
            "--season",
            "2025",
            "--config",
            "league.toml",
            "-v",
        ])
        .unwrap();

        assert_eq!(app.global.season, Some(Season::new(2025)));
        assert!(app.global.verbose);
        let overrides = app.global.overrides();
        assert_eq!(overrides.config_path, Some(PathBuf::from("league.toml")));
        assert!(matches!(app.command, Commands::Standings { .. }));
    }

    #[test]
    fn test_draft_rounds_optional() {
        let app = ESPN::try_parse_from(["espn-fhl", "draft"]).unwrap();
        match app.command {
            Commands::Draft { rounds, format } => {
                assert_eq!(rounds, None);
                assert_eq!(format, OutputFormat::Table);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
