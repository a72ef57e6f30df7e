use super::{OpenF1, Pace};
use crate::models::error::Result;
use crate::models::telemetry::{Lap, LapTimePoint};

const RESOURCE: &str = "laps";

impl OpenF1 {
    pub async fn laps(&self, session_key: u32, driver_number: Option<u32>) -> Result<Vec<Lap>> {
        let mut params = vec![("session_key", session_key.to_string())];
        if let Some(driver_number) = driver_number {
            params.push(("driver_number", driver_number.to_string()));
        }
        self.cached(RESOURCE, &params, Pace::Direct).await
    }

    /// Timed laps of one driver in lap order, for lap-time charts.
    pub async fn lap_time_series(
        &self,
        session_key: u32,
        driver_number: u32,
    ) -> Result<Vec<LapTimePoint>> {
        let laps = self.laps(session_key, Some(driver_number)).await?;
        Ok(lap_time_series(&laps))
    }
}

pub fn lap_time_series(laps: &[Lap]) -> Vec<LapTimePoint> {
    let mut series: Vec<LapTimePoint> = laps.iter().filter_map(LapTimePoint::from_lap).collect();
    series.sort_by_key(|point| point.lap_number);
    series
}
