use std::{collections::HashMap, sync::Arc};

use crate::{handlers::resolve_season, models::error::ApiError, utils::state::AppState};
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

fn limit_param(params: &HashMap<String, String>) -> usize {
    params
        .get("limit")
        .and_then(|l| l.parse::<usize>().ok())
        .unwrap_or(30)
}

pub async fn standings(
    State(state): State<Arc<AppState>>,
    Path(season): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let year = resolve_season(&season, state.config.default_season)?;
    let res = state.openf1.standings(year).await?;
    Ok(Json(res))
}

pub async fn driver_standings(
    State(state): State<Arc<AppState>>,
    Path(season): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, ApiError> {
    let year = resolve_season(&season, state.config.default_season)?;
    let limit = limit_param(&params);
    let mut res = state.openf1.standings(year).await?;
    res.drivers.truncate(limit);
    Ok(Json(res.drivers))
}

pub async fn constructor_standings(
    State(state): State<Arc<AppState>>,
    Path(season): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, ApiError> {
    let year = resolve_season(&season, state.config.default_season)?;
    let limit = limit_param(&params);
    let mut res = state.openf1.standings(year).await?;
    res.constructors.truncate(limit);
    Ok(Json(res.constructors))
}
