//! Redraft command implementation

use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::{
    cli::types::{OutputFormat, StrategyKind},
    config::EspnConfig,
    draft::{
        calculate_replacement_levels, compare, DraftPick, Player, RankingStrategy, RosterSpots,
        DEFAULT_GOALIE_MULTIPLIER,
    },
    espn::LeagueClient,
    Result,
};

use super::{league_client, render::write_redraft};

/// Rounds shown when `--rounds` is not given.
pub const DEFAULT_ROUNDS: u16 = 1;

#[derive(Debug, Clone, Copy)]
pub struct RedraftParams {
    pub rounds: u16,
    pub strategy: StrategyKind,
    pub format: OutputFormat,
    /// Only used by the position-adjusted ranking.
    pub goalie_multiplier: Option<f64>,
    /// Derive VOR baselines from the drafted pool instead of the fixed defaults.
    pub computed_baselines: bool,
    /// League size for computed baselines.
    pub num_teams: Option<usize>,
}

impl Default for RedraftParams {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            strategy: StrategyKind::default(),
            format: OutputFormat::default(),
            goalie_multiplier: None,
            computed_baselines: false,
            num_teams: None,
        }
    }
}

/// Handle the redraft command
pub async fn handle_redraft(config: EspnConfig, params: RedraftParams) -> Result<()> {
    let mut client = league_client(config);
    run_redraft(&mut client, params, &mut io::stdout().lock()).await
}

pub async fn run_redraft<W: Write>(
    client: &mut LeagueClient,
    params: RedraftParams,
    out: &mut W,
) -> Result<()> {
    let picks = client.draft_order().await?;
    let strategy = build_strategy(client, &params, &picks).await?;
    info!(strategy = %strategy.name(), picks = picks.len(), rounds = params.rounds, "running redraft");

    let result = compare(&picks, &strategy, Some(params.rounds))?;
    write_redraft(out, &result, params.rounds, params.format)
}

/// The ranking the flags select.
pub async fn build_strategy(
    client: &mut LeagueClient,
    params: &RedraftParams,
    picks: &[DraftPick],
) -> Result<RankingStrategy> {
    if params.goalie_multiplier.is_some() && params.strategy != StrategyKind::Adjusted {
        warn!(strategy = %params.strategy, "--goalie-multiplier only applies to the adjusted strategy");
    }
    if params.computed_baselines && params.strategy != StrategyKind::Vor {
        warn!(strategy = %params.strategy, "--computed-baselines only applies to the vor strategy");
    }

    let strategy = match params.strategy {
        StrategyKind::Total => RankingStrategy::TotalPoints,
        StrategyKind::Adjusted => RankingStrategy::PositionAdjusted {
            goalie_multiplier: params.goalie_multiplier.unwrap_or(DEFAULT_GOALIE_MULTIPLIER),
        },
        StrategyKind::Vor if params.computed_baselines => {
            let roster = roster_spots(client, params.num_teams).await?;
            let pool: Vec<Player> = picks.iter().map(|p| p.player.clone()).collect();
            let levels = calculate_replacement_levels(&pool, &roster);
            debug!(?roster, ?levels, "computed replacement levels");
            RankingStrategy::ValueOverReplacement { levels }
        }
        StrategyKind::Vor => RankingStrategy::default(),
    };
    Ok(strategy)
}

/// Lineup shape for computed baselines.
///
/// League size comes from `--num-teams`, then the config `[roster]` table,
/// then the number of teams in the league.
pub async fn roster_spots(
    client: &mut LeagueClient,
    num_teams: Option<usize>,
) -> Result<RosterSpots> {
    let configured = client.config().roster;
    let mut roster = configured.unwrap_or_default();

    roster.num_teams = match (num_teams, configured) {
        (Some(n), _) => n,
        (None, Some(r)) => r.num_teams,
        (None, None) => match client.team_count().await? {
            0 => roster.num_teams,
            n => n,
        },
    };
    Ok(roster)
}
