use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::models::{RankedPlayer, StandingsResponse};
use crate::stats::{compute_summary, make_rating_histogram, make_winrate_scatter};
use super::{AppState, StatsParams};

pub async fn get_standings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.loader.snapshot();

    let items = snapshot
        .players
        .into_iter()
        .enumerate()
        .map(|(i, player)| RankedPlayer {
            rank: i + 1,
            player,
        })
        .collect();

    Json(StandingsResponse {
        source: snapshot.source,
        items,
        is_loading: snapshot.is_loading,
        error: snapshot.error,
        refreshed_at: snapshot.refreshed_at,
    })
}

pub async fn get_player_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let snapshot = state.loader.snapshot();

    match snapshot.players.into_iter().find(|p| p.id == id) {
        Some(player) => Json(player).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn get_summary(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.loader.snapshot();
    let summary = compute_summary(&snapshot.players, Utc::now(), &state.config.stats);
    Json(summary)
}

pub async fn get_histogram(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StatsParams>,
) -> impl IntoResponse {
    let snapshot = state.loader.snapshot();
    let buckets = params
        .buckets
        .unwrap_or(state.config.stats.histogram_buckets)
        .clamp(1, 100);
    Json(make_rating_histogram(&snapshot.players, buckets))
}

pub async fn get_scatter(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StatsParams>,
) -> impl IntoResponse {
    let snapshot = state.loader.snapshot();
    let include_zero_games = params.include_zero_games.unwrap_or(true);
    Json(make_winrate_scatter(&snapshot.players, include_zero_games))
}
