//! Fantasy hockey position classification.

use serde::Serialize;
use std::fmt;

/// Position group used for ranking.
///
/// ESPN reports a free-text label per player ("Center", "Left Wing",
/// "Defense", "Goalie", ...). Ranking only cares about three groups, so
/// every label collapses into one of them via [`classify`].
///
/// # Examples
///
/// ```rust
/// use espn_fhl::{classify, Position};
///
/// assert_eq!(classify("Goalie"), Position::Goalie);
/// assert_eq!(classify("Left Wing"), Position::Forward);
/// assert_eq!(classify(""), Position::Forward);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Position {
    Forward,
    Defense,
    Goalie,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::Forward => "Forward",
            Position::Defense => "Defense",
            Position::Goalie => "Goalie",
        };
        write!(f, "{}", s)
    }
}

/// Classify a raw position label. Never fails: anything that is not
/// exactly "goalie" or "defense" (ignoring case) is a forward.
pub fn classify(raw_label: &str) -> Position {
    if raw_label.eq_ignore_ascii_case("goalie") {
        Position::Goalie
    } else if raw_label.eq_ignore_ascii_case("defense") {
        Position::Defense
    } else {
        Position::Forward
    }
}

/// Short label used in tables and CSV output.
///
/// Skater sub-positions collapse to `F`; unknown labels fall back to their
/// first letter and an empty label renders as `?`.
pub fn position_abbrev(raw_label: &str) -> String {
    let lower = raw_label.to_lowercase();
    match lower.as_str() {
        "" => "?".to_string(),
        "goalie" => "G".to_string(),
        "defense" => "D".to_string(),
        "center" | "left wing" | "right wing" => "F".to_string(),
        _ => raw_label
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string()),
    }
}
