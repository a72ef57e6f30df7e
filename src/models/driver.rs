use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Driver {
    pub driver_number: u32,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub name_acronym: Option<String>,
    #[serde(default)]
    pub broadcast_name: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub team_colour: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub headshot_url: Option<String>,
    #[serde(default)]
    pub session_key: Option<u32>,
    #[serde(default)]
    pub meeting_key: Option<u32>,
}

/// A team, derived by grouping drivers on `team_name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Constructor {
    pub team_name: String,
    /// Taken from the first listed driver of the team.
    pub team_colour: Option<String>,
    pub driver_numbers: Vec<u32>,
}
