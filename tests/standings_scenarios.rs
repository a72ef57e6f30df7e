//! Standings aggregation against an in-memory season.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use season_stats::models::driver::Driver;
use season_stats::models::session::Session;
use season_stats::models::telemetry::Position;
use season_stats::{compute_standings, Error, Result, SeasonSource, StandingsOptions};

const A: u32 = 1;
const B: u32 = 2;

#[derive(Default)]
struct FakeSeason {
    races: Vec<Session>,
    roster: Vec<Driver>,
    roster_fails: bool,
    results: HashMap<u32, Vec<u32>>,
    failing_races: HashSet<u32>,
    requested: Mutex<Vec<u32>>,
}

#[async_trait]
impl SeasonSource for FakeSeason {
    async fn race_sessions(&self, _year: i32) -> Result<Vec<Session>> {
        Ok(self.races.clone())
    }

    async fn season_roster(&self, year: i32) -> Result<Vec<Driver>> {
        if self.roster_fails {
            return Err(Error::missing("meetings", format!("year {year}")));
        }
        Ok(self.roster.clone())
    }

    async fn race_classification(&self, session_key: u32) -> Result<Vec<Position>> {
        self.requested.lock().unwrap().push(session_key);
        if self.failing_races.contains(&session_key) {
            return Err(Error::Status {
                resource: "position",
                params: format!("session_key={session_key}"),
                status: 500,
            });
        }
        let order = self.results.get(&session_key).cloned().unwrap_or_default();
        Ok(order
            .into_iter()
            .enumerate()
            .map(|(i, driver_number)| Position {
                driver_number,
                session_key,
                meeting_key: None,
                position: i as i32 + 1,
                date: day(1),
            })
            .collect())
    }
}

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, d, 14, 0, 0).unwrap()
}

fn race(session_key: u32, start_day: u32) -> Session {
    Session {
        session_key,
        meeting_key: session_key + 1000,
        session_name: "Race".to_string(),
        session_type: "Race".to_string(),
        date_start: day(start_day),
        date_end: Some(day(start_day) + chrono::Duration::hours(2)),
        circuit_key: None,
        circuit_short_name: None,
        country_name: None,
        location: None,
        year: 2024,
    }
}

fn driver(driver_number: u32, team: &str) -> Driver {
    Driver {
        driver_number,
        full_name: Some(format!("Driver {driver_number}")),
        name_acronym: None,
        broadcast_name: None,
        team_name: Some(team.to_string()),
        team_colour: None,
        country_code: None,
        headshot_url: None,
        session_key: None,
        meeting_key: None,
    }
}

fn options() -> StandingsOptions {
    StandingsOptions {
        points_table: vec![25, 18, 15, 12, 10, 8, 6, 4, 2, 1],
        race_fetch_delay: Duration::ZERO,
    }
}

fn two_driver_season() -> FakeSeason {
    FakeSeason {
        races: vec![race(10, 5), race(20, 12)],
        roster: vec![driver(A, "X"), driver(B, "Y")],
        results: HashMap::from([(10, vec![A, B]), (20, vec![B, A])]),
        ..Default::default()
    }
}

#[tokio::test]
async fn equal_points_and_wins_fall_back_to_roster_order() {
    let season = two_driver_season();
    let result = compute_standings(&season, 2024, day(30), &options()).await.unwrap();

    let drivers: Vec<(u32, u32, u32)> = result
        .drivers
        .iter()
        .map(|d| (d.driver_number, d.points, d.wins))
        .collect();
    assert_eq!(drivers, vec![(A, 43, 1), (B, 43, 1)]);
    assert_eq!(result.drivers[0].position, 1);
    assert_eq!(result.drivers[1].position, 2);

    let teams: Vec<(&str, u32)> = result
        .constructors
        .iter()
        .map(|c| (c.team_name.as_str(), c.points))
        .collect();
    assert_eq!(teams, vec![("X", 43), ("Y", 43)]);

    assert_eq!(result.total_races, 2);
    assert_eq!(result.completed_races, 2);
    assert_eq!(result.upcoming_races, 0);
    assert_eq!(result.contributing_races, 2);
    assert!(!result.is_partial());
}

#[tokio::test]
async fn reversed_roster_reverses_the_tie() {
    let mut season = two_driver_season();
    season.roster.reverse();
    let result = compute_standings(&season, 2024, day(30), &options()).await.unwrap();
    assert_eq!(result.drivers[0].driver_number, B);
}

#[tokio::test]
async fn no_completed_races_leaves_everyone_on_zero() {
    let season = two_driver_season();
    let result = compute_standings(&season, 2024, day(1), &options()).await.unwrap();

    assert_eq!(result.completed_races, 0);
    assert_eq!(result.upcoming_races, 2);
    assert_eq!(result.drivers.len(), 2);
    assert!(result.drivers.iter().all(|d| d.points == 0 && d.wins == 0));
    assert!(result.constructors.iter().all(|c| c.points == 0));
    assert!(season.requested.lock().unwrap().is_empty());
}

#[tokio::test]
async fn one_failed_race_is_skipped_not_fatal() {
    let mut season = two_driver_season();
    season.failing_races.insert(10);
    let result = compute_standings(&season, 2024, day(30), &options()).await.unwrap();

    assert_eq!(result.completed_races, 2);
    assert_eq!(result.contributing_races, 1);
    assert_eq!(result.skipped_races, vec![10]);
    assert!(result.is_partial());

    let b = &result.drivers[0];
    assert_eq!((b.driver_number, b.points, b.wins), (B, 25, 1));
    let a = &result.drivers[1];
    assert_eq!((a.driver_number, a.points, a.wins), (A, 18, 0));
}

#[tokio::test]
async fn race_with_no_classification_is_skipped() {
    let mut season = two_driver_season();
    season.results.remove(&20);
    let result = compute_standings(&season, 2024, day(30), &options()).await.unwrap();
    assert_eq!(result.skipped_races, vec![20]);
    assert_eq!(result.drivers[0].points, 25);
}

#[tokio::test]
async fn season_without_races_is_an_error() {
    let season = FakeSeason {
        roster: vec![driver(A, "X")],
        ..Default::default()
    };
    let err = compute_standings(&season, 2024, day(30), &options()).await.unwrap_err();
    assert!(matches!(err, Error::NoRaceSessions(2024)));
}

#[tokio::test]
async fn roster_failure_fails_the_computation() {
    let mut season = two_driver_season();
    season.roster_fails = true;
    let err = compute_standings(&season, 2024, day(30), &options()).await.unwrap_err();
    assert_eq!(err.to_string(), "no meetings for year 2024");
}

#[tokio::test]
async fn races_are_scored_in_chronological_order() {
    let season = FakeSeason {
        races: vec![race(30, 20), race(10, 5), race(20, 12)],
        roster: vec![driver(A, "X")],
        ..Default::default()
    };
    compute_standings(&season, 2024, day(30), &options()).await.unwrap();
    assert_eq!(*season.requested.lock().unwrap(), vec![10, 20, 30]);
}

#[tokio::test]
async fn only_races_ended_before_cutoff_count() {
    let mut season = two_driver_season();
    season.races.push(Session {
        date_end: None,
        ..race(30, 19)
    });
    // Race 20 starts on the 12th and ends two hours later.
    let cutoff = day(12) + chrono::Duration::hours(1);
    let result = compute_standings(&season, 2024, cutoff, &options()).await.unwrap();
    assert_eq!(result.total_races, 3);
    assert_eq!(result.completed_races, 1);
    assert_eq!(result.upcoming_races, 2);
    assert_eq!(*season.requested.lock().unwrap(), vec![10]);
}

#[tokio::test(start_paused = true)]
async fn races_are_spaced_by_the_fetch_delay() {
    let season = FakeSeason {
        races: vec![race(10, 5), race(20, 12), race(30, 19)],
        roster: vec![driver(A, "X")],
        ..Default::default()
    };
    let options = StandingsOptions {
        race_fetch_delay: Duration::from_secs(1),
        ..options()
    };
    let started = tokio::time::Instant::now();
    compute_standings(&season, 2024, day(30), &options).await.unwrap();
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(2));
    assert!(elapsed < Duration::from_secs(3));
}
