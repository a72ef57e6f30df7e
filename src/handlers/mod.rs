pub mod cache;
pub mod race;
pub mod season;
pub mod session;
pub mod standings;

use http::StatusCode;

use crate::models::error::ApiError;

/// `"current"` maps to the configured default season; anything else must be
/// a year.
pub fn resolve_season(raw: &str, default_season: i32) -> Result<i32, ApiError> {
    if raw.eq_ignore_ascii_case("current") {
        return Ok(default_season);
    }
    raw.parse::<i32>()
        .map_err(|_| ApiError::new(StatusCode::BAD_REQUEST, &format!("invalid season: {raw}")))
}
