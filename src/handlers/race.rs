use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{handlers::resolve_season, models::error::ApiError, utils::state::AppState};

pub async fn get_meetings(
    State(state): State<Arc<AppState>>,
    Path(season): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let year = resolve_season(&season, state.config.default_season)?;
    Ok(Json(state.openf1.meetings_for_year(year).await?))
}

pub async fn get_circuits(
    State(state): State<Arc<AppState>>,
    Path(season): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let year = resolve_season(&season, state.config.default_season)?;
    Ok(Json(state.openf1.circuits(year).await?))
}

pub async fn get_constructors(
    State(state): State<Arc<AppState>>,
    Path(season): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let year = resolve_season(&season, state.config.default_season)?;
    Ok(Json(state.openf1.constructors(year).await?))
}
