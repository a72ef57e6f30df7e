use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::race_utils::is_championship_race;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub session_key: u32,
    pub meeting_key: u32,
    pub session_name: String,
    pub session_type: String,
    pub date_start: DateTime<Utc>,
    #[serde(default)]
    pub date_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub circuit_key: Option<u32>,
    #[serde(default)]
    pub circuit_short_name: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub year: i32,
}

impl Session {
    /// Grand prix races only; sprints, practice and qualifying score nothing.
    pub fn is_points_race(&self) -> bool {
        is_championship_race(&self.session_name, &self.session_type)
    }

    /// A session counts as completed once its `date_end` lies before the
    /// cutoff. Sessions without an end time are still upcoming.
    pub fn is_completed(&self, as_of: DateTime<Utc>) -> bool {
        self.date_end.is_some_and(|end| end < as_of)
    }
}
