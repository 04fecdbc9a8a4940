//! Standings command implementation

use std::io::{self, Write};

use tracing::info;

use crate::{
    cli::types::OutputFormat,
    config::EspnConfig,
    espn::LeagueClient,
    Result,
};

use super::{league_client, render::write_standings};

/// Handle the standings command
pub async fn handle_standings(config: EspnConfig, format: OutputFormat) -> Result<()> {
    let mut client = league_client(config);
    run_standings(&mut client, format, &mut io::stdout().lock()).await
}

pub async fn run_standings<W: Write>(
    client: &mut LeagueClient,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let standings = client.standings().await?;
    info!(teams = standings.len(), "standings loaded");
    write_standings(out, &standings, format)
}
