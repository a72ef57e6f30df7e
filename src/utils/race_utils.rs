use chrono::{DateTime, Utc};

pub const RACE_SESSION_NAME: &str = "Race";
pub const RACE_SESSION_TYPE: &str = "Race";

/// Only the grand prix itself awards championship points here. Sprints share
/// `session_type == "Race"` but are named "Sprint", so both fields are checked.
pub fn is_championship_race(session_name: &str, session_type: &str) -> bool {
    session_name == RACE_SESSION_NAME && session_type == RACE_SESSION_TYPE
}

/// Points for a zero-based finishing rank. Ranks past the end of the table
/// score nothing.
pub fn points_for_rank(points_table: &[u32], rank: usize) -> u32 {
    points_table.get(rank).copied().unwrap_or(0)
}

/// The item with the latest date; on equal dates the later-listed one wins.
pub fn chronologically_last<T, F>(items: &[T], date: F) -> Option<&T>
where
    F: Fn(&T) -> DateTime<Utc>,
{
    items.iter().max_by_key(|item| date(*item))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [u32; 10] = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];

    #[test]
    fn only_grand_prix_races_qualify() {
        assert!(is_championship_race("Race", "Race"));
        assert!(!is_championship_race("Sprint", "Race"));
        assert!(!is_championship_race("Qualifying", "Qualifying"));
        assert!(!is_championship_race("Practice 1", "Practice"));
    }

    #[test]
    fn better_rank_never_scores_less() {
        for rank in 0..TABLE.len() - 1 {
            assert!(points_for_rank(&TABLE, rank) >= points_for_rank(&TABLE, rank + 1));
        }
    }

    #[test]
    fn ranks_outside_the_table_score_zero() {
        assert_eq!(points_for_rank(&TABLE, 0), 25);
        assert_eq!(points_for_rank(&TABLE, 9), 1);
        assert_eq!(points_for_rank(&TABLE, 10), 0);
        assert_eq!(points_for_rank(&TABLE, 19), 0);
    }

    #[test]
    fn chronologically_last_ignores_list_order() {
        use chrono::TimeZone;
        let dates = [
            Utc.with_ymd_and_hms(2024, 11, 24, 6, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 12, 8, 13, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 2, 15, 0, 0).unwrap(),
        ];
        let last = chronologically_last(&dates, |d| *d).unwrap();
        assert_eq!(*last, dates[1]);
        assert!(chronologically_last(&[] as &[DateTime<Utc>], |d| *d).is_none());
    }
}
