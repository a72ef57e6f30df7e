pub mod config;
pub mod race_utils;
pub mod rate_limiter;
pub mod response_cache;
pub mod state;
