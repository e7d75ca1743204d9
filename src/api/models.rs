use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::PlayerStanding;

/// Leaderboard list payload: the loader snapshot with 1-based ranks in sheet
/// order.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsResponse {
    pub source: String,
    pub items: Vec<RankedPlayer>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refreshed_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPlayer {
    pub rank: usize,
    #[serde(flatten)]
    pub player: PlayerStanding,
}
