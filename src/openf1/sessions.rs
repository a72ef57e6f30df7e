use std::collections::HashSet;

use super::{OpenF1, Pace};
use crate::models::error::Result;
use crate::models::session::Session;

const RESOURCE: &str = "sessions";

impl OpenF1 {
    pub async fn sessions_for_year(&self, year: i32) -> Result<Vec<Session>> {
        self.cached(RESOURCE, &[("year", year.to_string())], Pace::Direct)
            .await
    }

    /// Used as a step of the season roster chain, hence throttled.
    pub async fn sessions_for_meeting(&self, meeting_key: u32) -> Result<Vec<Session>> {
        self.cached(
            RESOURCE,
            &[("meeting_key", meeting_key.to_string())],
            Pace::Throttled,
        )
        .await
    }

    pub async fn recent_sessions(&self, limit: Option<u32>) -> Result<Vec<Session>> {
        let limit = limit.unwrap_or(self.config().sessions_limit);
        let mut sessions: Vec<Session> = self
            .cached(RESOURCE, &[("limit", limit.to_string())], Pace::Direct)
            .await?;
        sessions.sort_by_key(|s| s.date_start);
        let skip = sessions.len().saturating_sub(limit as usize);
        Ok(sessions.split_off(skip))
    }

    pub async fn session(&self, session_key: u32) -> Result<Option<Session>> {
        let sessions: Vec<Session> = self
            .cached(RESOURCE, &[("session_key", session_key.to_string())], Pace::Direct)
            .await?;
        Ok(sessions.into_iter().next())
    }

    /// Championship races of `year` in chronological order, one per
    /// `session_key`. May be empty; callers decide whether that is fatal.
    pub async fn race_sessions(&self, year: i32) -> Result<Vec<Session>> {
        let sessions = self.sessions_for_year(year).await?;
        Ok(race_only(sessions))
    }
}

pub fn race_only(sessions: Vec<Session>) -> Vec<Session> {
    let mut seen = HashSet::new();
    let mut races: Vec<Session> = sessions
        .into_iter()
        .filter(|s| s.is_points_race())
        .filter(|s| seen.insert(s.session_key))
        .collect();
    races.sort_by_key(|s| s.date_start);
    races
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn session(key: u32, name: &str, kind: &str, day: u32) -> Session {
        Session {
            session_key: key,
            meeting_key: 1,
            session_name: name.to_string(),
            session_type: kind.to_string(),
            date_start: Utc.with_ymd_and_hms(2024, 3, day, 15, 0, 0).unwrap(),
            date_end: None,
            circuit_key: None,
            circuit_short_name: None,
            country_name: None,
            location: None,
            year: 2024,
        }
    }

    #[test]
    fn keeps_grand_prix_races_in_date_order() {
        let races = race_only(vec![
            session(30, "Race", "Race", 24),
            session(11, "Practice 1", "Practice", 1),
            session(12, "Sprint", "Race", 8),
            session(13, "Qualifying", "Qualifying", 9),
            session(14, "Race", "Race", 10),
        ]);
        let keys: Vec<u32> = races.iter().map(|s| s.session_key).collect();
        assert_eq!(keys, vec![14, 30]);
    }

    #[test]
    fn duplicate_session_keys_collapse() {
        let races = race_only(vec![
            session(14, "Race", "Race", 10),
            session(14, "Race", "Race", 10),
        ]);
        assert_eq!(races.len(), 1);
    }
}
