use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    handlers::resolve_season,
    models::{error::ApiError, telemetry::LapQuery},
    utils::state::AppState,
};

pub async fn get_sessions(
    State(state): State<Arc<AppState>>,
    Path(season): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let year = resolve_season(&season, state.config.default_season)?;
    Ok(Json(state.openf1.sessions_for_year(year).await?))
}

/// Lap-time series of one driver, or every lap of the session when no
/// driver is given.
pub async fn get_lap_times(
    State(state): State<Arc<AppState>>,
    Path(session_key): Path<u32>,
    Query(params): Query<LapQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(driver_number) = params.driver_number else {
        let laps = state.openf1.laps(session_key, None).await?;
        return Ok(Json(laps).into_response());
    };
    let series = state
        .openf1
        .lap_time_series(session_key, driver_number)
        .await?;
    Ok(Json(series).into_response())
}

pub async fn get_classification(
    State(state): State<Arc<AppState>>,
    Path(session_key): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.openf1.final_classification(session_key).await?))
}
