use std::cmp::Ordering;
use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::derived::constructors_from_drivers;
use super::SeasonSource;
use crate::models::driver::Driver;
use crate::models::error::{Error, Result};
use crate::models::session::Session;
use crate::models::standings::{ConstructorStanding, DriverStanding, StandingsResult};
use crate::models::telemetry::Position;
use crate::openf1::drivers::unique_drivers;
use crate::openf1::OpenF1;
use crate::utils::config::Config;
use crate::utils::race_utils::points_for_rank;
use crate::utils::response_cache::CacheKey;

#[derive(Debug, Clone)]
pub struct StandingsOptions {
    pub points_table: Vec<u32>,
    pub race_fetch_delay: Duration,
}

impl StandingsOptions {
    pub fn from_config(config: &Config) -> Self {
        StandingsOptions {
            points_table: config.points_table.clone(),
            race_fetch_delay: config.race_fetch_delay,
        }
    }
}

struct DriverTally {
    driver: Driver,
    points: u32,
    wins: u32,
}

struct TeamTally {
    team_name: String,
    team_colour: Option<String>,
    driver_numbers: Vec<u32>,
    points: u32,
    wins: u32,
}

/// Running point and win totals for one season.
///
/// Drivers keep roster order and teams keep first-seen order; rankings sort
/// stably on top of that, so equal records never swap between runs.
pub struct StandingsTable {
    drivers: Vec<DriverTally>,
    driver_index: HashMap<u32, usize>,
    teams: Vec<TeamTally>,
    team_index: HashMap<String, usize>,
}

impl StandingsTable {
    pub fn new(roster: &[Driver]) -> Self {
        let roster = unique_drivers(roster.to_vec());
        let driver_index = roster
            .iter()
            .enumerate()
            .map(|(i, d)| (d.driver_number, i))
            .collect();

        let teams: Vec<TeamTally> = constructors_from_drivers(&roster)
            .into_iter()
            .map(|c| TeamTally {
                team_name: c.team_name,
                team_colour: c.team_colour,
                driver_numbers: c.driver_numbers,
                points: 0,
                wins: 0,
            })
            .collect();
        let team_index = teams
            .iter()
            .enumerate()
            .map(|(i, t)| (t.team_name.clone(), i))
            .collect();

        let drivers = roster
            .into_iter()
            .map(|driver| DriverTally {
                driver,
                points: 0,
                wins: 0,
            })
            .collect();

        StandingsTable {
            drivers,
            driver_index,
            teams,
            team_index,
        }
    }

    /// Scores one race. Unclassified entries are dropped, the rest ranked by
    /// position and awarded `points_table[rank]`. Returns how many drivers
    /// were classified.
    pub fn apply_race(&mut self, classification: &[Position], points_table: &[u32]) -> usize {
        let mut finishers: Vec<&Position> =
            classification.iter().filter(|p| p.is_classified()).collect();
        finishers.sort_by_key(|p| p.position);

        for (rank, finisher) in finishers.iter().enumerate() {
            let Some(&i) = self.driver_index.get(&finisher.driver_number) else {
                debug!(
                    driver_number = finisher.driver_number,
                    session_key = finisher.session_key,
                    "classified driver not in season roster"
                );
                continue;
            };
            let points = points_for_rank(points_table, rank);
            let won = rank == 0;

            let tally = &mut self.drivers[i];
            tally.points += points;
            tally.wins += u32::from(won);

            let team = tally
                .driver
                .team_name
                .as_deref()
                .and_then(|name| self.team_index.get(name));
            if let Some(&t) = team {
                self.teams[t].points += points;
                self.teams[t].wins += u32::from(won);
            }
        }
        finishers.len()
    }

    pub fn driver_rankings(&self) -> Vec<DriverStanding> {
        let mut order: Vec<&DriverTally> = self.drivers.iter().collect();
        order.sort_by(|a, b| by_record((a.points, a.wins), (b.points, b.wins)));
        order
            .into_iter()
            .enumerate()
            .map(|(i, tally)| DriverStanding {
                position: i as u32 + 1,
                driver_number: tally.driver.driver_number,
                full_name: tally.driver.full_name.clone(),
                name_acronym: tally.driver.name_acronym.clone(),
                team_name: tally.driver.team_name.clone(),
                team_colour: tally.driver.team_colour.clone(),
                points: tally.points,
                wins: tally.wins,
            })
            .collect()
    }

    pub fn constructor_rankings(&self) -> Vec<ConstructorStanding> {
        let mut order: Vec<&TeamTally> = self.teams.iter().collect();
        order.sort_by(|a, b| by_record((a.points, a.wins), (b.points, b.wins)));
        order
            .into_iter()
            .enumerate()
            .map(|(i, tally)| ConstructorStanding {
                position: i as u32 + 1,
                team_name: tally.team_name.clone(),
                team_colour: tally.team_colour.clone(),
                driver_numbers: tally.driver_numbers.clone(),
                points: tally.points,
                wins: tally.wins,
            })
            .collect()
    }
}

/// Points descending, then wins descending.
fn by_record(a: (u32, u32), b: (u32, u32)) -> Ordering {
    b.0.cmp(&a.0).then(b.1.cmp(&a.1))
}

/// Computes driver and constructor standings for `year`.
///
/// A race is completed when its `date_end` is before `as_of`. Races are
/// scored in chronological order; a race whose classification cannot be
/// fetched, or comes back empty, is skipped and listed in
/// `skipped_races`. Missing race sessions or a missing roster fail the
/// whole computation.
pub async fn compute_standings<S>(
    source: &S,
    year: i32,
    as_of: DateTime<Utc>,
    options: &StandingsOptions,
) -> Result<StandingsResult>
where
    S: SeasonSource + ?Sized,
{
    let races = source.race_sessions(year).await?;
    if races.is_empty() {
        return Err(Error::NoRaceSessions(year));
    }

    let mut completed: Vec<&Session> = races.iter().filter(|r| r.is_completed(as_of)).collect();
    completed.sort_by_key(|r| r.date_start);

    let roster = source.season_roster(year).await?;
    let mut table = StandingsTable::new(&roster);

    let mut contributing_races = 0u32;
    let mut skipped_races = Vec::new();
    for (i, race) in completed.iter().enumerate() {
        if i > 0 && !options.race_fetch_delay.is_zero() {
            tokio::time::sleep(options.race_fetch_delay).await;
        }

        match source.race_classification(race.session_key).await {
            Ok(classification) => {
                let classified = table.apply_race(&classification, &options.points_table);
                if classified == 0 {
                    warn!(
                        year,
                        session_key = race.session_key,
                        "race has no classified finishers, skipping"
                    );
                    skipped_races.push(race.session_key);
                } else {
                    debug!(year, session_key = race.session_key, classified, "race scored");
                    contributing_races += 1;
                }
            }
            Err(e) => {
                warn!(
                    year,
                    session_key = race.session_key,
                    "could not fetch race positions, skipping: {e}"
                );
                skipped_races.push(race.session_key);
            }
        }
    }

    let total_races = races.len() as u32;
    let completed_races = completed.len() as u32;
    info!(
        year,
        total_races,
        completed_races,
        contributing_races,
        "standings computed"
    );

    Ok(StandingsResult {
        year,
        drivers: table.driver_rankings(),
        constructors: table.constructor_rankings(),
        total_races,
        completed_races,
        upcoming_races: total_races - completed_races,
        contributing_races,
        skipped_races,
        computed_at: Utc::now(),
    })
}

impl OpenF1 {
    /// Standings for `year`, recomputed at most once per cache TTL.
    pub async fn standings(&self, year: i32) -> Result<StandingsResult> {
        let key = CacheKey::of("standings", &[("year", year.to_string())]);
        let options = StandingsOptions::from_config(self.config());
        self.cache()
            .get_or_fetch(&key, || compute_standings(self, year, Utc::now(), &options))
            .await
    }
}
