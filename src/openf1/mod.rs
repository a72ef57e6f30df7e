//! Typed, cached access to the OpenF1 REST API.
//!
//! Every accessor goes through [`OpenF1::cached`]: build a deterministic key,
//! serve a fresh cache entry if one exists, otherwise issue one GET and store
//! the decoded record list. Requests that are part of a dependent chain or a
//! per-race scan are routed through the rate limiter; one-off lookups are not.

pub mod drivers;
pub mod laps;
pub mod meetings;
pub mod positions;
pub mod sessions;

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::models::error::{Error, Result};
use crate::utils::config::Config;
use crate::utils::rate_limiter::RateLimiter;
use crate::utils::response_cache::{CacheKey, CacheStats, ResponseCache};

/// Whether an upstream call waits for a rate-limiter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Direct,
    Throttled,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceStats {
    pub cache: CacheStats,
    pub min_interval_ms: u64,
    pub race_fetch_delay_ms: u64,
}

/// The one service object shared by every fetcher, resolver and handler.
/// It owns the HTTP client, the response cache and the rate limiter.
pub struct OpenF1 {
    http_client: Client,
    base_url: String,
    cache: ResponseCache,
    limiter: RateLimiter,
    config: Config,
}

impl OpenF1 {
    pub fn new(config: Config) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| Error::Config(format!("could not build HTTP client: {e}")))?;
        Ok(Self::with_client(config, http_client))
    }

    pub fn with_client(config: Config, http_client: Client) -> Self {
        OpenF1 {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cache: ResponseCache::new(config.cache_ttl),
            limiter: RateLimiter::new(config.min_interval),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
        debug!("response cache cleared");
    }

    pub fn stats(&self) -> ServiceStats {
        ServiceStats {
            cache: self.cache.stats(),
            min_interval_ms: self.limiter.min_delay().as_millis() as u64,
            race_fetch_delay_ms: self.config.race_fetch_delay.as_millis() as u64,
        }
    }

    /// Cached list fetch of `resource` filtered by `params`.
    pub(crate) async fn cached<T>(
        &self,
        resource: &'static str,
        params: &[(&str, String)],
        pace: Pace,
    ) -> Result<Vec<T>>
    where
        T: Serialize + DeserializeOwned,
    {
        let key = CacheKey::of(resource, params);
        self.cache
            .get_or_fetch(&key, || self.fetch(resource, params, pace))
            .await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        params: &[(&str, String)],
        pace: Pace,
    ) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, resource);
        let send = || self.http_client.get(&url).query(params).send();
        let response = match pace {
            Pace::Throttled => self.limiter.execute(send).await,
            Pace::Direct => send().await,
        }
        .map_err(|source| {
            warn!(resource, params = %describe(params), "upstream request failed: {source}");
            Error::Upstream {
                resource,
                params: describe(params),
                source,
            }
        })?;

        let status = response.status();
        // OpenF1 answers an empty filter with 404 "No results found".
        if status == StatusCode::NOT_FOUND {
            debug!(resource, params = %describe(params), "no upstream records");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            warn!(
                resource,
                params = %describe(params),
                %status,
                "upstream returned an error status"
            );
            return Err(Error::Status {
                resource,
                params: describe(params),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| Error::Upstream {
            resource,
            params: describe(params),
            source,
        })?;
        serde_json::from_str(&body).map_err(|source| Error::Decode {
            resource,
            params: describe(params),
            source,
        })
    }
}

fn describe(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}
