//! ESPN API filter utilities.
//!
//! ESPN reads request filters from a JSON `x-fantasy-filter` header rather
//! than from query parameters. Two filters matter here:
//!
//! - **filterActive** on `/players`: limits the player pool to active players
//! - **filterMatchupPeriodIds** on the league schedule: limits box scores to
//!   the requested matchup periods

use crate::cli::types::MatchupPeriod;
use crate::Result;
use reqwest::header::HeaderValue;
use serde::Serialize;

/// Header carrying filter JSON.
pub const FANTASY_FILTER_HEADER: &str = "x-fantasy-filter";

/// Wrapper for ESPN-style filter values.
///
/// ESPN API expects filter values to be wrapped in objects with a "value" field.
/// For example: `{"filterActive": {"value": true}}`
#[derive(Debug, Serialize)]
pub struct Val<T> {
    pub value: T,
}

/// Filter for ESPN's `/players` endpoint.
///
/// # Examples
///
/// ```rust
/// use espn_fhl::core::filters::{IntoHeaderValue, PlayersFilter, Val};
///
/// let filter = PlayersFilter {
///     filter_active: Some(Val { value: true }),
/// };
/// let header_value = filter.to_header_value().unwrap();
/// assert_eq!(header_value.to_str().unwrap(), r#"{"filterActive":{"value":true}}"#);
/// ```
#[derive(Debug, Default, Serialize)]
pub struct PlayersFilter {
    #[serde(rename = "filterActive", skip_serializing_if = "Option::is_none")]
    pub filter_active: Option<Val<bool>>,
}

/// Filter for the league `schedule`, used when pulling box scores.
#[derive(Debug, Serialize)]
pub struct ScheduleFilter {
    pub schedule: MatchupPeriodFilter,
}

#[derive(Debug, Serialize)]
pub struct MatchupPeriodFilter {
    #[serde(rename = "filterMatchupPeriodIds")]
    pub filter_matchup_period_ids: Val<Vec<u16>>,
}

impl ScheduleFilter {
    /// Restrict the schedule to a single matchup period.
    pub fn for_period(period: MatchupPeriod) -> Self {
        Self {
            schedule: MatchupPeriodFilter {
                filter_matchup_period_ids: Val {
                    value: vec![period.as_u16()],
                },
            },
        }
    }
}

/// General-purpose helper: any Serialize → JSON → HeaderValue
pub trait IntoHeaderValue {
    fn to_header_value(&self) -> Result<HeaderValue>;
}

impl<T> IntoHeaderValue for T
where
    T: Serialize,
{
    fn to_header_value(&self) -> Result<HeaderValue> {
        let s = serde_json::to_string(self)?;
        Ok(HeaderValue::from_str(&s)?)
    }
}
