use std::collections::{HashMap, HashSet};

use crate::models::driver::{Constructor, Driver};
use crate::models::error::{Error, Result};
use crate::models::race::{Circuit, Meeting};
use crate::openf1::OpenF1;
use crate::utils::response_cache::CacheKey;

/// One circuit per `circuit_key`, taken from the first meeting held there.
/// Output order follows the first occurrence of each key.
pub fn circuits_from_meetings(meetings: &[Meeting]) -> Vec<Circuit> {
    let mut seen = HashSet::new();
    meetings
        .iter()
        .filter(|m| seen.insert(m.circuit_key))
        .map(Circuit::from)
        .collect()
}

/// Groups drivers by `team_name` in first-seen order. Drivers without a team
/// name are left out.
pub fn constructors_from_drivers(drivers: &[Driver]) -> Vec<Constructor> {
    let mut constructors: Vec<Constructor> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for driver in drivers {
        let Some(team_name) = driver.team_name.as_deref() else {
            continue;
        };
        match index.get(team_name) {
            Some(&i) => constructors[i].driver_numbers.push(driver.driver_number),
            None => {
                index.insert(team_name, constructors.len());
                constructors.push(Constructor {
                    team_name: team_name.to_string(),
                    team_colour: driver.team_colour.clone(),
                    driver_numbers: vec![driver.driver_number],
                });
            }
        }
    }
    constructors
}

impl OpenF1 {
    pub async fn circuits(&self, year: i32) -> Result<Vec<Circuit>> {
        let key = CacheKey::of("circuits", &[("year", year.to_string())]);
        self.cache()
            .get_or_fetch(&key, || async {
                let meetings = self.meetings_for_year(year).await?;
                Ok::<_, Error>(circuits_from_meetings(&meetings))
            })
            .await
    }

    pub async fn constructors(&self, year: i32) -> Result<Vec<Constructor>> {
        let key = CacheKey::of("constructors", &[("year", year.to_string())]);
        self.cache()
            .get_or_fetch(&key, || async {
                let drivers = self.drivers_for_year(year).await?;
                Ok::<_, Error>(constructors_from_drivers(&drivers))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn meeting(meeting_key: u32, circuit_key: u32, name: &str) -> Meeting {
        Meeting {
            meeting_key,
            circuit_key,
            circuit_short_name: format!("circuit-{circuit_key}"),
            meeting_name: name.to_string(),
            meeting_official_name: None,
            location: None,
            country_name: None,
            country_code: None,
            date_start: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            gmt_offset: None,
            year: 2024,
        }
    }

    fn driver(number: u32, team: Option<&str>, colour: &str) -> Driver {
        Driver {
            driver_number: number,
            full_name: None,
            name_acronym: None,
            broadcast_name: None,
            team_name: team.map(str::to_string),
            team_colour: Some(colour.to_string()),
            country_code: None,
            headshot_url: None,
            session_key: None,
            meeting_key: None,
        }
    }

    #[test]
    fn duplicate_circuits_keep_first_occurrence() {
        let circuits = circuits_from_meetings(&[
            meeting(1, 63, "Pre-Season Testing"),
            meeting(2, 63, "Bahrain Grand Prix"),
            meeting(3, 149, "Saudi Arabian Grand Prix"),
            meeting(4, 149, "Saudi Arabian Grand Prix (again)"),
        ]);
        let keys: Vec<u32> = circuits.iter().map(|c| c.circuit_key).collect();
        assert_eq!(keys, vec![63, 149]);
        assert_eq!(circuits[0].meeting_name, "Pre-Season Testing");
        assert_eq!(circuits[0].meeting_key, 1);
        assert_eq!(circuits[1].meeting_key, 3);
    }

    #[test]
    fn constructors_group_in_first_seen_order() {
        let constructors = constructors_from_drivers(&[
            driver(4, Some("McLaren"), "FF8000"),
            driver(16, Some("Ferrari"), "E80020"),
            driver(81, Some("McLaren"), "000000"),
            driver(99, None, "FFFFFF"),
            driver(55, Some("Ferrari"), "111111"),
        ]);
        assert_eq!(constructors.len(), 2);
        assert_eq!(constructors[0].team_name, "McLaren");
        assert_eq!(constructors[0].team_colour.as_deref(), Some("FF8000"));
        assert_eq!(constructors[0].driver_numbers, vec![4, 81]);
        assert_eq!(constructors[1].driver_numbers, vec![16, 55]);
    }
}
