use crate::{
    handlers::standings::{constructor_standings, driver_standings, standings},
    utils::state::AppState,
};
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn standings_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/{season}", get(standings))
        .route("/driver_standings/{season}", get(driver_standings))
        .route("/constructor_standings/{season}", get(constructor_standings))
}
