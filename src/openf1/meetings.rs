use super::{OpenF1, Pace};
use crate::models::error::Result;
use crate::models::race::Meeting;

const RESOURCE: &str = "meetings";

impl OpenF1 {
    pub async fn meetings_for_year(&self, year: i32) -> Result<Vec<Meeting>> {
        self.meetings_for_year_paced(year, Pace::Direct).await
    }

    pub(crate) async fn meetings_for_year_paced(
        &self,
        year: i32,
        pace: Pace,
    ) -> Result<Vec<Meeting>> {
        self.cached(RESOURCE, &[("year", year.to_string())], pace)
            .await
    }

    /// The `limit` most recent meetings, oldest first. Upstream does not
    /// always honour `limit`, so the list is trimmed here as well.
    pub async fn recent_meetings(&self, limit: Option<u32>) -> Result<Vec<Meeting>> {
        let limit = limit.unwrap_or(self.config().meetings_limit);
        let mut meetings: Vec<Meeting> = self
            .cached(RESOURCE, &[("limit", limit.to_string())], Pace::Direct)
            .await?;
        meetings.sort_by_key(|m| m.date_start);
        let skip = meetings.len().saturating_sub(limit as usize);
        Ok(meetings.split_off(skip))
    }

    pub async fn meeting(&self, meeting_key: u32) -> Result<Option<Meeting>> {
        let meetings: Vec<Meeting> = self
            .cached(RESOURCE, &[("meeting_key", meeting_key.to_string())], Pace::Direct)
            .await?;
        Ok(meetings.into_iter().next())
    }
}
