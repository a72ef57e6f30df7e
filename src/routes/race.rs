use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handlers::race::{get_circuits, get_constructors, get_meetings},
    utils::state::AppState,
};

pub fn race_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/meetings/{season}", get(get_meetings))
        .route("/circuits/{season}", get(get_circuits))
        .route("/constructors/{season}", get(get_constructors))
}
