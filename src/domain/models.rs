use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::outcome::MatchOutcome;

/// One leaderboard row, normalized from the sheet. Built once per source row
/// during a load and replaced wholesale on each refresh.
///
/// Numeric fields come from lenient coercion and may be `NaN` when the cell
/// was missing or unparseable; aggregation treats `NaN` as "exclude from
/// averages, keep in population counts".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStanding {
    /// Stable slug derived from the display name, unique within one load.
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub games: f64,
    pub wins: f64,
    pub losses: f64,
    pub draws: f64,
    /// `wins / games` when `games > 0`, else `0.0`.
    pub winrate: f64,
    pub peak: f64,
    /// Rating change since the previous publication; `NaN` when the sheet
    /// carries no delta column.
    pub rating_delta: f64,
    pub last_active: Option<DateTime<Utc>>,
    pub joined: Option<DateTime<Utc>>,
    /// Most recent match outcomes when the sheet has a form column.
    pub recent_form: Vec<MatchOutcome>,
}

impl PlayerStanding {
    pub fn has_rating(&self) -> bool {
        self.rating.is_finite()
    }

    pub fn has_games(&self) -> bool {
        self.games.is_finite()
    }
}

/// The externally observed loader state. `players` always holds the
/// last-known-good standings: a failed or cancelled load never clears it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsResult {
    /// Selector key of the data source this state belongs to.
    pub source: String,
    pub players: Vec<PlayerStanding>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl StandingsResult {
    pub fn empty(source: &str) -> Self {
        Self {
            source: source.to_string(),
            players: Vec::new(),
            is_loading: false,
            error: None,
            refreshed_at: None,
        }
    }
}
