use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A race weekend as returned by `meetings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meeting {
    pub meeting_key: u32,
    pub circuit_key: u32,
    pub circuit_short_name: String,
    pub meeting_name: String,
    #[serde(default)]
    pub meeting_official_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    pub date_start: DateTime<Utc>,
    #[serde(default)]
    pub gmt_offset: Option<String>,
    pub year: i32,
}

/// Circuits have no upstream endpoint; one is derived per distinct
/// `circuit_key` from the first meeting held there.
///
/// Field mapping from [`Meeting`]:
/// `circuit_key` → `circuit_key`, `circuit_short_name` → `name`,
/// `location`/`country_name`/`country_code` copied, `meeting_key` and
/// `meeting_name` of the first occurrence, `date_start` → `first_race_date`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Circuit {
    pub circuit_key: u32,
    pub name: String,
    pub location: Option<String>,
    pub country_name: Option<String>,
    pub country_code: Option<String>,
    pub meeting_key: u32,
    pub meeting_name: String,
    pub first_race_date: DateTime<Utc>,
}

impl From<&Meeting> for Circuit {
    fn from(meeting: &Meeting) -> Self {
        Circuit {
            circuit_key: meeting.circuit_key,
            name: meeting.circuit_short_name.clone(),
            location: meeting.location.clone(),
            country_name: meeting.country_name.clone(),
            country_code: meeting.country_code.clone(),
            meeting_key: meeting.meeting_key,
            meeting_name: meeting.meeting_name.clone(),
            first_race_date: meeting.date_start,
        }
    }
}
