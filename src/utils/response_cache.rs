use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;

use crate::models::cache::CacheEntry;
use crate::models::error::{Error, Result};

/// Deterministic cache keys: resource name followed by the query
/// parameters in a fixed order.
pub struct CacheKey;

impl CacheKey {
    pub fn of(resource: &str, params: &[(&str, String)]) -> String {
        let mut key = resource.to_string();
        for (name, value) in params {
            key.push(':');
            key.push_str(name);
            key.push('=');
            key.push_str(value);
        }
        key
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub fresh_entries: usize,
    pub ttl_ms: u64,
}

/// Time-bounded memoization in front of every upstream call.
///
/// Values are stored as JSON so one map can hold every resource type. A
/// per-key lock covers the miss path, so concurrent callers asking for the
/// same key run the producer once.
pub struct ResponseCache {
    ttl: Duration,
    entries: DashMap<String, CacheEntry<Value>>,
    inflight: DashMap<String, Arc<Mutex<()>>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        ResponseCache {
            ttl,
            entries: DashMap::new(),
            inflight: DashMap::new(),
        }
    }

    pub async fn get_or_fetch<T, F, Fut>(&self, key: &str, producer: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(value) = self.fresh(key)? {
            debug!(key, "cache hit");
            return Ok(value);
        }

        let slot = self
            .inflight
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let result = self.fill(key, &slot, producer).await;
        drop(slot);
        // The map's own reference is the last one once no caller is waiting.
        self.inflight.remove_if(key, |_, slot| Arc::strong_count(slot) == 1);
        result
    }

    async fn fill<T, F, Fut>(&self, key: &str, slot: &Mutex<()>, producer: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let _guard = slot.lock().await;

        // Another caller may have filled the entry while we waited.
        if let Some(value) = self.fresh(key)? {
            debug!(key, "cache hit after wait");
            return Ok(value);
        }

        debug!(key, "cache miss");
        let value = producer().await?;
        let payload = serde_json::to_value(&value).map_err(|source| Error::Cache {
            key: key.to_string(),
            source,
        })?;
        self.entries.insert(key.to_string(), CacheEntry::new(payload));
        Ok(value)
    }

    fn fresh<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(entry) = self.entries.get(key) else {
            return Ok(None);
        };
        if !entry.is_fresh(self.ttl) {
            return Ok(None);
        }
        serde_json::from_value(entry.value.clone())
            .map(Some)
            .map_err(|source| Error::Cache {
                key: key.to_string(),
                source,
            })
    }

    pub fn clear(&self) {
        self.entries.clear();
        self.inflight.clear();
    }

    pub fn stats(&self) -> CacheStats {
        let fresh_entries = self
            .entries
            .iter()
            .filter(|entry| entry.is_fresh(self.ttl))
            .count();
        CacheStats {
            entries: self.entries.len(),
            fresh_entries,
            ttl_ms: self.ttl.as_millis() as u64,
        }
    }
}
