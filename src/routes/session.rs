use crate::{
    handlers::session::{get_classification, get_lap_times, get_sessions},
    utils::state::AppState,
};
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn session_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sessions/{season}", get(get_sessions))
        .route("/{session_key}/laps", get(get_lap_times))
        .route("/{session_key}/classification", get(get_classification))
}
