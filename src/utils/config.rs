use std::str::FromStr;
use std::time::Duration;

use chrono::{Datelike, Utc};

use crate::models::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.openf1.org/v1";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 15 * 60;
pub const DEFAULT_MIN_INTERVAL_MS: u64 = 350;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_RACE_FETCH_DELAY_MS: u64 = 250;
pub const DEFAULT_POINTS_TABLE: [u32; 10] = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];
pub const DEFAULT_MEETINGS_LIMIT: u32 = 25;
pub const DEFAULT_SESSIONS_LIMIT: u32 = 50;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub bind_addr: String,
    pub log_level: String,
    pub cache_ttl: Duration,
    pub min_interval: Duration,
    pub request_timeout: Duration,
    /// Pause between consecutive races while aggregating standings, on top
    /// of the rate limiter's own spacing.
    pub race_fetch_delay: Duration,
    pub default_season: i32,
    pub points_table: Vec<u32>,
    pub meetings_limit: u32,
    pub sessions_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            bind_addr: "127.0.0.1:3000".to_string(),
            log_level: "info".to_string(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            min_interval: Duration::from_millis(DEFAULT_MIN_INTERVAL_MS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            race_fetch_delay: Duration::from_millis(DEFAULT_RACE_FETCH_DELAY_MS),
            default_season: Utc::now().year(),
            points_table: DEFAULT_POINTS_TABLE.to_vec(),
            meetings_limit: DEFAULT_MEETINGS_LIMIT,
            sessions_limit: DEFAULT_SESSIONS_LIMIT,
        }
    }
}

impl Config {
    /// Reads overrides from the environment on top of [`Config::default`].
    pub fn init() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let points_table = match lookup("POINTS_TABLE") {
            Some(raw) => parse_points_table(&raw)?,
            None => defaults.points_table,
        };

        Ok(Config {
            base_url: lookup("OPENF1_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            log_level: lookup("LOG_LEVEL")
                .map(|level| level.to_lowercase())
                .unwrap_or(defaults.log_level),
            cache_ttl: parse_var(&lookup, "CACHE_TTL_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
            min_interval: parse_var(&lookup, "MIN_INTERVAL_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.min_interval),
            request_timeout: parse_var(&lookup, "REQUEST_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            race_fetch_delay: parse_var(&lookup, "RACE_FETCH_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.race_fetch_delay),
            default_season: parse_var(&lookup, "DEFAULT_SEASON")?
                .unwrap_or(defaults.default_season),
            points_table,
            meetings_limit: parse_var(&lookup, "MEETINGS_LIMIT")?
                .unwrap_or(defaults.meetings_limit),
            sessions_limit: parse_var(&lookup, "SESSIONS_LIMIT")?
                .unwrap_or(defaults.sessions_limit),
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| Error::Config(format!("{name} has an invalid value: {raw:?}"))),
        None => Ok(None),
    }
}

fn parse_points_table(raw: &str) -> Result<Vec<u32>> {
    let table = raw
        .split(',')
        .map(|p| p.trim().parse::<u32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| Error::Config(format!("POINTS_TABLE has an invalid value: {raw:?}")))?;
    if table.is_empty() {
        return Err(Error::Config("POINTS_TABLE must not be empty".to_string()));
    }
    Ok(table)
}
