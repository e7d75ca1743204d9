use serde::Deserialize;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::loader::StandingsLoader;

pub mod admin;
pub mod standings;

pub struct AppState {
    pub loader: Arc<StandingsLoader>,
    pub config: AppConfig,
}

#[derive(Deserialize)]
pub struct StatsParams {
    pub buckets: Option<usize>,
    pub include_zero_games: Option<bool>,
}

#[derive(Deserialize)]
pub struct RefreshParams {
    pub source: Option<String>,
}
