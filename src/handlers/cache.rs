use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use http::StatusCode;
use serde_json::json;

use crate::utils::state::AppState;

pub async fn cache_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.openf1.stats()))
}

pub async fn clear_cache(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.openf1.clear_cache();
    (StatusCode::OK, Json(json!({"message": "Cache cleared"})))
}
