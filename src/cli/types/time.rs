//! Time-related types for ESPN Fantasy Hockey seasons and matchup periods.

use crate::error::{EspnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default season analyzed when neither a flag, `ESPN_YEAR` nor a config file names one.
pub const DEFAULT_SEASON: u16 = 2026;

/// Type-safe wrapper for Season years
///
/// ESPN names hockey seasons by the year they end in, so the 2025-26
/// season is `Season(2026)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(DEFAULT_SEASON)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for head-to-head matchup periods (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchupPeriod(pub u16);

impl MatchupPeriod {
    pub fn new(period: u16) -> Self {
        Self(period)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Every period from the first through `self`, inclusive.
    pub fn through(self) -> impl Iterator<Item = MatchupPeriod> {
        (1..=self.0).map(MatchupPeriod)
    }
}

impl fmt::Display for MatchupPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
