//! Ranking strategy identifiers accepted on the command line.

use crate::error::{EspnError, Result};
use std::fmt;
use std::str::FromStr;

/// Name of a ranking strategy, as typed by the user.
///
/// Parsing is case-insensitive. Anything other than `vor`, `total` or
/// `adjusted` is rejected with [`EspnError::UnknownStrategy`] instead of
/// silently falling back to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyKind {
    /// Value over replacement
    #[default]
    Vor,
    /// Raw season total
    Total,
    /// Season total with goalies discounted
    Adjusted,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [StrategyKind::Vor, StrategyKind::Total, StrategyKind::Adjusted];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Vor => "vor",
            StrategyKind::Total => "total",
            StrategyKind::Adjusted => "adjusted",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "vor" => Ok(StrategyKind::Vor),
            "total" => Ok(StrategyKind::Total),
            "adjusted" => Ok(StrategyKind::Adjusted),
            _ => Err(EspnError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}
