use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{handlers::season::season_statistics, utils::state::AppState};

pub fn season_routes() -> Router<Arc<AppState>> {
    Router::new().route("/{season}/statistics", get(season_statistics))
}
