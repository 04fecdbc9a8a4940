//! Core utilities for the ESPN Fantasy Hockey CLI
//!
//! - `filters`: ESPN `x-fantasy-filter` header structures
//! - `http`: default request headers and cookie handling

pub mod filters;
pub mod http;

pub use filters::{IntoHeaderValue, PlayersFilter, ScheduleFilter, Val, FANTASY_FILTER_HEADER};
pub use http::espn_header_map;
