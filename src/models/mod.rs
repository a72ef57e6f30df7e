pub mod cache;
pub mod driver;
pub mod error;
pub mod race;
pub mod season;
pub mod session;
pub mod standings;
pub mod telemetry;
