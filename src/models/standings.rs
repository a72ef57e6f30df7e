use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriverStanding {
    /// 1-based championship position.
    pub position: u32,
    pub driver_number: u32,
    pub full_name: Option<String>,
    pub name_acronym: Option<String>,
    pub team_name: Option<String>,
    pub team_colour: Option<String>,
    pub points: u32,
    pub wins: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstructorStanding {
    pub position: u32,
    pub team_name: String,
    pub team_colour: Option<String>,
    pub driver_numbers: Vec<u32>,
    pub points: u32,
    pub wins: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandingsResult {
    pub year: i32,
    pub drivers: Vec<DriverStanding>,
    pub constructors: Vec<ConstructorStanding>,
    pub total_races: u32,
    pub completed_races: u32,
    pub upcoming_races: u32,
    /// Completed races whose classification was applied.
    pub contributing_races: u32,
    /// Session keys of completed races that could not be scored.
    pub skipped_races: Vec<u32>,
    pub computed_at: DateTime<Utc>,
}

impl StandingsResult {
    pub fn is_partial(&self) -> bool {
        self.contributing_races < self.completed_races
    }
}
