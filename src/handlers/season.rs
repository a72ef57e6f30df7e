use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{handlers::resolve_season, models::error::ApiError, utils::state::AppState};

pub async fn season_statistics(
    State(state): State<Arc<AppState>>,
    Path(season): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let year = resolve_season(&season, state.config.default_season)?;
    Ok(Json(state.openf1.season_statistics(year).await?))
}
