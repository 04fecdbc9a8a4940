//! Draft order command implementation

use std::io::{self, Write};

use tracing::info;

use crate::{
    cli::types::OutputFormat,
    config::EspnConfig,
    espn::LeagueClient,
    Result,
};

use super::{league_client, render::write_draft};

#[derive(Debug, Clone, Copy, Default)]
pub struct DraftOrderParams {
    /// Only show the first N rounds; every round when `None`.
    pub rounds: Option<u16>,
    pub format: OutputFormat,
}

/// Handle the draft command
pub async fn handle_draft_order(config: EspnConfig, params: DraftOrderParams) -> Result<()> {
    let mut client = league_client(config);
    run_draft_order(&mut client, params, &mut io::stdout().lock()).await
}

pub async fn run_draft_order<W: Write>(
    client: &mut LeagueClient,
    params: DraftOrderParams,
    out: &mut W,
) -> Result<()> {
    let mut picks = client.draft_order().await?;
    if let Some(rounds) = params.rounds {
        picks.retain(|p| p.round_num <= rounds);
    }
    info!(picks = picks.len(), "draft order loaded");
    write_draft(out, &picks, params.rounds, params.format)
}
