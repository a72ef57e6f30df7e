use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LapQuery {
    pub driver_number: Option<u32>,
}

/// A driver's classification at one instant of a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub driver_number: u32,
    pub session_key: u32,
    #[serde(default)]
    pub meeting_key: Option<u32>,
    /// Zero or negative means "not classified".
    pub position: i32,
    pub date: DateTime<Utc>,
}

impl Position {
    pub fn is_classified(&self) -> bool {
        self.position > 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lap {
    pub driver_number: u32,
    pub session_key: u32,
    pub lap_number: u32,
    #[serde(default)]
    pub date_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub lap_duration: Option<f64>,
    #[serde(default)]
    pub duration_sector_1: Option<f64>,
    #[serde(default)]
    pub duration_sector_2: Option<f64>,
    #[serde(default)]
    pub duration_sector_3: Option<f64>,
    #[serde(default)]
    pub i1_speed: Option<u32>,
    #[serde(default)]
    pub i2_speed: Option<u32>,
    #[serde(default)]
    pub st_speed: Option<u32>,
    #[serde(default)]
    pub is_pit_out_lap: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LapTimePoint {
    pub lap_number: u32,
    pub lap_duration: f64,
    pub sectors: [Option<f64>; 3],
    pub is_pit_out_lap: bool,
}

impl LapTimePoint {
    /// Laps without a timed duration (in/out of the pits under red flag,
    /// aborted laps) have no place in a lap-time series.
    pub fn from_lap(lap: &Lap) -> Option<Self> {
        let lap_duration = lap.lap_duration?;
        Some(LapTimePoint {
            lap_number: lap.lap_number,
            lap_duration,
            sectors: [
                lap.duration_sector_1,
                lap.duration_sector_2,
                lap.duration_sector_3,
            ],
            is_pit_out_lap: lap.is_pit_out_lap.unwrap_or(false),
        })
    }
}
