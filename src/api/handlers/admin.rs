use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::config::find_source;
use super::{AppState, RefreshParams};

/// Cancel-and-reload, optionally switching the data source. Requires a
/// bearer token when ADMIN_TOKEN is set in the environment.
pub async fn admin_refresh(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RefreshParams>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if let Ok(expected) = std::env::var("ADMIN_TOKEN") {
        let auth_header = headers.get("Authorization").and_then(|h| h.to_str().ok());
        if auth_header != Some(format!("Bearer {expected}").as_str()) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
    }

    let key = params
        .source
        .unwrap_or_else(|| state.config.loader.default_source.to_string());
    let Some(source) = find_source(&key) else {
        return (StatusCode::BAD_REQUEST, format!("Unknown source: {key}")).into_response();
    };

    let loader = state.loader.clone();
    tokio::spawn(async move {
        log::info!("Admin triggered refresh for source {}", source.key);
        if let Err(e) = loader.refresh(&source).await {
            log::error!("Admin refresh failed: {}", e);
        }
    });

    (StatusCode::ACCEPTED, "Refresh triggered").into_response()
}
