//! Command implementations for the ESPN Fantasy Hockey CLI
//!
//! Each command has a `handle_*` entry point used by the binary, which talks
//! to ESPN and prints to stdout, and a `run_*` function that takes the league
//! client and output sink explicitly.

pub mod draft_order;
pub mod redraft;
pub mod render;
pub mod standings;

use crate::{
    config::EspnConfig,
    espn::{EspnClient, LeagueClient},
};


/// League client for the configured league against the live ESPN API.
fn league_client(config: EspnConfig) -> LeagueClient {
    LeagueClient::new(EspnClient::new(config))
}
