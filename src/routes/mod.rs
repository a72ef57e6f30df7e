pub mod race;
pub mod season;
pub mod session;
pub mod standings;
use axum::{
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::{
    handlers::cache::{cache_stats, clear_cache},
    routes::{
        race::race_routes, season::season_routes, session::session_routes,
        standings::standings_routes,
    },
    utils::state::AppState,
};

pub fn log_level(raw: &str) -> Level {
    match raw.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    }
}

pub fn init_tracing(raw_level: &str) {
    let level = log_level(raw_level);

    let filter = filter::Targets::new()
        .with_target("tower_http::trace::on_response", Level::TRACE)
        .with_target("tower_http::trace::on_request", Level::TRACE)
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target("axum::rejection", Level::TRACE)
        .with_target(env!("CARGO_CRATE_NAME"), level)
        .with_default(Level::INFO);

    let tracing_layer = tracing_subscriber::fmt::layer();

    Registry::default().with(tracing_layer).with(filter).init();
}

pub fn make_app(state: AppState) -> Router {
    info!("Initializing application...");
    let state = Arc::new(state);

    let app = Router::new()
        .route("/", get(health_check))
        .nest("/season", season_routes())
        .nest("/standings", standings_routes())
        .nest("/race", race_routes())
        .nest("/session", session_routes())
        .route("/cache/stats", get(cache_stats))
        .route("/cache", delete(clear_cache))
        .layer(TraceLayer::new_for_http())
        .with_state(state);
    info!("Application initialized successfully");

    app
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"message": "OK"}))).into_response()
}
