//! Error types for the ESPN Fantasy Hockey CLI

use std::path::PathBuf;

use thiserror::Error;

use crate::cli::types::PlayerId;


pub type Result<T> = std::result::Result<T, EspnError>;

#[derive(Error, Debug)]
pub enum EspnError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse number: {0}")]
    InvalidLeagueId(#[from] std::num::ParseIntError),

    #[error("Invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Unknown strategy: {name} (available strategies: vor, total, adjusted)")]
    UnknownStrategy { name: String },

    #[error("Player {player_id} was drafted but is missing from the ranking")]
    RankingInconsistency { player_id: PlayerId },
}
