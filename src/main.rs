//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use espn_fhl::{
    cli::{Commands, ESPN},
    commands::{
        draft_order::{handle_draft_order, DraftOrderParams},
        redraft::{handle_redraft, RedraftParams},
        standings::handle_standings,
    },
    EspnConfig,
};
use tracing_subscriber::EnvFilter;

/// Log to stderr so table, CSV and JSON output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default = if verbose { "espn_fhl=info" } else { "espn_fhl=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = ESPN::parse();
    init_tracing(app.global.verbose);

    let config = EspnConfig::load(app.global.overrides()).context("failed to load configuration")?;

    match app.command {
        Commands::Standings { format } => handle_standings(config, format).await?,

        Commands::Draft { rounds, format } => {
            handle_draft_order(config, DraftOrderParams { rounds, format }).await?
        }

        Commands::Redraft {
            rounds,
            strategy,
            format,
            goalie_multiplier,
            computed_baselines,
            num_teams,
        } => {
            handle_redraft(
                config,
                RedraftParams {
                    rounds,
                    strategy,
                    format,
                    goalie_multiplier,
                    computed_baselines,
                    num_teams,
                },
            )
            .await?
        }
    }

    Ok(())
}
