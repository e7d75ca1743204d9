use serde::{Deserialize, Serialize};

/// Classified result of a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Win,
    Loss,
    Draw,
    Unknown,
}

/// Map an arbitrary result cell to an outcome. Total over all inputs:
/// trims and uppercases, then matches on first letter or score value.
pub fn classify(raw: Option<&str>) -> MatchOutcome {
    let Some(raw) = raw else {
        return MatchOutcome::Unknown;
    };

    let value = raw.trim().to_uppercase();
    if value.is_empty() {
        MatchOutcome::Unknown
    } else if value.starts_with('W') || value == "1" {
        MatchOutcome::Win
    } else if value.starts_with('L') || value == "0" {
        MatchOutcome::Loss
    } else if value.starts_with('D') || value == "0.5" || value == "½" {
        MatchOutcome::Draw
    } else {
        MatchOutcome::Unknown
    }
}
