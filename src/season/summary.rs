use crate::models::error::Result;
use crate::models::race::Circuit;
use crate::models::season::{Leader, SeasonStatistics};
use crate::models::standings::{DriverStanding, StandingsResult};
use crate::openf1::OpenF1;

/// Merges computed standings and the season's circuits. Leaders are only
/// reported once some race has actually awarded points.
pub fn build_season_statistics(
    standings: &StandingsResult,
    circuits: Vec<Circuit>,
) -> SeasonStatistics {
    let scored = standings.contributing_races > 0;
    let driver_leader = standings
        .drivers
        .first()
        .filter(|d| scored && d.points > 0)
        .map(|d| Leader {
            name: driver_label(d),
            points: d.points,
            wins: d.wins,
        });
    let constructor_leader = standings
        .constructors
        .first()
        .filter(|c| scored && c.points > 0)
        .map(|c| Leader {
            name: c.team_name.clone(),
            points: c.points,
            wins: c.wins,
        });

    SeasonStatistics {
        year: standings.year,
        total_races: standings.total_races,
        completed_races: standings.completed_races,
        upcoming_races: standings.upcoming_races,
        contributing_races: standings.contributing_races,
        driver_count: standings.drivers.len(),
        constructor_count: standings.constructors.len(),
        circuit_count: circuits.len(),
        circuits,
        driver_leader,
        constructor_leader,
        last_updated: standings.computed_at,
    }
}

fn driver_label(standing: &DriverStanding) -> String {
    standing
        .full_name
        .clone()
        .or_else(|| standing.name_acronym.clone())
        .unwrap_or_else(|| format!("#{}", standing.driver_number))
}

impl OpenF1 {
    /// Both inputs come from cached accessors, so a summary built right after
    /// the standings or circuit views reuses their entries.
    pub async fn season_statistics(&self, year: i32) -> Result<SeasonStatistics> {
        let standings = self.standings(year).await?;
        let circuits = self.circuits(year).await?;
        Ok(build_season_statistics(&standings, circuits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::standings::ConstructorStanding;
    use chrono::Utc;

    fn standings(contributing_races: u32, points: u32) -> StandingsResult {
        StandingsResult {
            year: 2024,
            drivers: vec![
                DriverStanding {
                    position: 1,
                    driver_number: 1,
                    full_name: None,
                    name_acronym: Some("VER".to_string()),
                    team_name: Some("Red Bull Racing".to_string()),
                    team_colour: None,
                    points,
                    wins: 1,
                },
                DriverStanding {
                    position: 2,
                    driver_number: 4,
                    full_name: None,
                    name_acronym: None,
                    team_name: Some("McLaren".to_string()),
                    team_colour: None,
                    points: 0,
                    wins: 0,
                },
            ],
            constructors: vec![ConstructorStanding {
                position: 1,
                team_name: "Red Bull Racing".to_string(),
                team_colour: None,
                driver_numbers: vec![1],
                points,
                wins: 1,
            }],
            total_races: 24,
            completed_races: contributing_races,
            upcoming_races: 24 - contributing_races,
            contributing_races,
            skipped_races: Vec::new(),
            computed_at: Utc::now(),
        }
    }

    #[test]
    fn counts_and_leaders_are_carried_over() {
        let standings = standings(1, 25);
        let stats = build_season_statistics(&standings, Vec::new());
        assert_eq!(stats.total_races, 24);
        assert_eq!(stats.upcoming_races, 23);
        assert_eq!(stats.driver_count, 2);
        assert_eq!(stats.constructor_count, 1);
        assert_eq!(stats.circuit_count, 0);
        assert_eq!(stats.driver_leader.unwrap().name, "VER");
        assert_eq!(stats.constructor_leader.unwrap().points, 25);
        assert_eq!(stats.last_updated, standings.computed_at);
    }

    #[test]
    fn no_leader_before_the_first_scored_race() {
        let stats = build_season_statistics(&standings(0, 0), Vec::new());
        assert!(stats.driver_leader.is_none());
        assert!(stats.constructor_leader.is_none());
    }

    #[test]
    fn unnamed_driver_falls_back_to_number() {
        let mut standing = standings(1, 25).drivers.remove(1);
        assert_eq!(driver_label(&standing), "#4");
        standing.full_name = Some("Lando NORRIS".to_string());
        assert_eq!(driver_label(&standing), "Lando NORRIS");
    }
}
