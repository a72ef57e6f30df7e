use std::collections::HashSet;

use tracing::debug;

use super::{OpenF1, Pace};
use crate::models::driver::Driver;
use crate::models::error::{Error, Result};
use crate::models::race::Meeting;
use crate::models::session::Session;
use crate::utils::race_utils::chronologically_last;
use crate::utils::response_cache::CacheKey;

const RESOURCE: &str = "drivers";

impl OpenF1 {
    /// Throttled: called once per step of the roster chain.
    pub async fn drivers_for_session(&self, session_key: u32) -> Result<Vec<Driver>> {
        self.cached(
            RESOURCE,
            &[("session_key", session_key.to_string())],
            Pace::Throttled,
        )
        .await
    }

    /// A single driver, optionally as entered in one session. Upstream keeps
    /// one record per session, so without a session the latest one is used.
    pub async fn driver(
        &self,
        driver_number: u32,
        session_key: Option<u32>,
    ) -> Result<Option<Driver>> {
        let mut params = vec![("driver_number", driver_number.to_string())];
        if let Some(session_key) = session_key {
            params.push(("session_key", session_key.to_string()));
        }
        let drivers: Vec<Driver> = self.cached(RESOURCE, &params, Pace::Direct).await?;
        Ok(drivers.into_iter().last())
    }

    /// The season's roster. OpenF1 has no drivers-by-year filter, so this is
    /// the entry list of the last session of the last meeting of the year.
    pub async fn drivers_for_year(&self, year: i32) -> Result<Vec<Driver>> {
        let key = CacheKey::of(RESOURCE, &[("year", year.to_string())]);
        self.cache()
            .get_or_fetch(&key, || RosterResolver { openf1: self, year }.run())
            .await
    }
}

/// year → meetings → last meeting → its sessions → last session → drivers.
///
/// Each step consumes the previous step's output and has exactly one way to
/// come up empty, reported as [`Error::MissingData`] naming what was missing.
struct RosterResolver<'a> {
    openf1: &'a OpenF1,
    year: i32,
}

impl RosterResolver<'_> {
    async fn run(self) -> Result<Vec<Driver>> {
        let meetings = self.season_meetings().await?;
        let meeting = self.final_meeting(&meetings)?;
        let sessions = self.meeting_sessions(meeting).await?;
        let session = self.final_session(meeting, &sessions)?;
        self.session_drivers(session).await
    }

    async fn season_meetings(&self) -> Result<Vec<Meeting>> {
        self.openf1
            .meetings_for_year_paced(self.year, Pace::Throttled)
            .await
    }

    fn final_meeting<'m>(&self, meetings: &'m [Meeting]) -> Result<&'m Meeting> {
        let meeting = chronologically_last(meetings, |m| m.date_start)
            .ok_or_else(|| Error::missing("meetings", format!("year {}", self.year)))?;
        debug!(year = self.year, meeting_key = meeting.meeting_key, "roster meeting");
        Ok(meeting)
    }

    async fn meeting_sessions(&self, meeting: &Meeting) -> Result<Vec<Session>> {
        self.openf1.sessions_for_meeting(meeting.meeting_key).await
    }

    fn final_session<'s>(&self, meeting: &Meeting, sessions: &'s [Session]) -> Result<&'s Session> {
        let session = chronologically_last(sessions, |s| s.date_start).ok_or_else(|| {
            Error::missing("sessions", format!("meeting {}", meeting.meeting_key))
        })?;
        debug!(year = self.year, session_key = session.session_key, "roster session");
        Ok(session)
    }

    async fn session_drivers(&self, session: &Session) -> Result<Vec<Driver>> {
        let drivers = self.openf1.drivers_for_session(session.session_key).await?;
        let roster = unique_drivers(drivers);
        if roster.is_empty() {
            return Err(Error::missing(
                "drivers",
                format!("session {}", session.session_key),
            ));
        }
        Ok(roster)
    }
}

/// Keeps the first record per driver number, preserving upstream order.
pub fn unique_drivers(drivers: Vec<Driver>) -> Vec<Driver> {
    let mut seen = HashSet::new();
    drivers
        .into_iter()
        .filter(|d| seen.insert(d.driver_number))
        .collect()
}
