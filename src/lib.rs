//! Season standings and statistics built from the OpenF1 API.
//!
//! [`openf1::OpenF1`] is the single service object: it owns the HTTP client,
//! the response cache and the rate limiter, and exposes the typed fetchers.
//! The [`season`] module folds those records into standings and summaries,
//! and [`routes`] serves them as JSON.

pub mod handlers;
pub mod models;
pub mod openf1;
pub mod routes;
pub mod season;
pub mod utils;

pub use models::error::{ApiError, Error, Result};
pub use openf1::OpenF1;
pub use season::standings::{compute_standings, StandingsOptions, StandingsTable};
pub use season::SeasonSource;
pub use utils::config::Config;
