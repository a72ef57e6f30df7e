use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::race::Circuit;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Leader {
    pub name: String,
    pub points: u32,
    pub wins: u32,
}

/// Everything the season overview page needs in one object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeasonStatistics {
    pub year: i32,
    pub total_races: u32,
    pub completed_races: u32,
    pub upcoming_races: u32,
    pub contributing_races: u32,
    pub driver_count: usize,
    pub constructor_count: usize,
    pub circuit_count: usize,
    pub circuits: Vec<Circuit>,
    pub driver_leader: Option<Leader>,
    pub constructor_leader: Option<Leader>,
    pub last_updated: DateTime<Utc>,
}
