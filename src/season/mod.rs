//! Season-level views computed from upstream records: derived circuits and
//! constructors, championship standings, and the season summary.

pub mod derived;
pub mod standings;
pub mod summary;

use async_trait::async_trait;

use crate::models::driver::Driver;
use crate::models::error::Result;
use crate::models::session::Session;
use crate::models::telemetry::Position;
use crate::openf1::OpenF1;

/// The upstream data the standings aggregator needs.
#[async_trait]
pub trait SeasonSource: Send + Sync {
    /// Championship races of the season, chronological.
    async fn race_sessions(&self, year: i32) -> Result<Vec<Session>>;

    /// Every driver entered in the season, in roster order.
    async fn season_roster(&self, year: i32) -> Result<Vec<Driver>>;

    /// Final classification of one race.
    async fn race_classification(&self, session_key: u32) -> Result<Vec<Position>>;
}

#[async_trait]
impl SeasonSource for OpenF1 {
    async fn race_sessions(&self, year: i32) -> Result<Vec<Session>> {
        OpenF1::race_sessions(self, year).await
    }

    async fn season_roster(&self, year: i32) -> Result<Vec<Driver>> {
        self.drivers_for_year(year).await
    }

    async fn race_classification(&self, session_key: u32) -> Result<Vec<Position>> {
        self.final_classification(session_key).await
    }
}
