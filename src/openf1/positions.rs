use std::collections::HashMap;

use super::{OpenF1, Pace};
use crate::models::error::Result;
use crate::models::telemetry::Position;

const RESOURCE: &str = "position";

impl OpenF1 {
    /// Every position change in a session. Throttled: the aggregator calls
    /// this once per race in quick succession.
    pub async fn positions(&self, session_key: u32) -> Result<Vec<Position>> {
        self.cached(
            RESOURCE,
            &[("session_key", session_key.to_string())],
            Pace::Throttled,
        )
        .await
    }

    pub async fn driver_positions(
        &self,
        session_key: u32,
        driver_number: u32,
    ) -> Result<Vec<Position>> {
        self.cached(
            RESOURCE,
            &[
                ("session_key", session_key.to_string()),
                ("driver_number", driver_number.to_string()),
            ],
            Pace::Direct,
        )
        .await
    }

    pub async fn final_classification(&self, session_key: u32) -> Result<Vec<Position>> {
        let positions = self.positions(session_key).await?;
        Ok(final_classification(&positions))
    }
}

/// Reduces a position time series to each driver's last reported place,
/// drops unclassified entries and orders the rest by position.
pub fn final_classification(positions: &[Position]) -> Vec<Position> {
    let mut latest: HashMap<u32, &Position> = HashMap::new();
    for position in positions {
        latest
            .entry(position.driver_number)
            .and_modify(|existing| {
                if position.date >= existing.date {
                    *existing = position;
                }
            })
            .or_insert(position);
    }

    let mut classified: Vec<Position> = latest
        .into_values()
        .filter(|p| p.is_classified())
        .cloned()
        .collect();
    classified.sort_by_key(|p| (p.position, p.driver_number));
    classified
}
