use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    admin::admin_refresh,
    standings::{get_histogram, get_player_detail, get_scatter, get_standings, get_summary},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/standings", get(get_standings))
        .route("/api/standings/:id", get(get_player_detail))
        .route("/api/summary", get(get_summary))
        .route("/api/histogram", get(get_histogram))
        .route("/api/scatter", get(get_scatter))
        .route("/api/admin/refresh", post(admin_refresh))
        .with_state(state)
}
