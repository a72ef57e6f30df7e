use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{sleep, Duration, Instant};

/// RateLimiter spaces out upstream requests so that no two start closer
/// together than `min_delay`.
///
/// Callers that overlap queue on the internal mutex; the slot is held only
/// while waiting out the spacing, not for the duration of the request.
#[derive(Clone)]
pub struct RateLimiter {
    min_delay: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    pub fn new(min_delay: Duration) -> Self {
        RateLimiter {
            min_delay,
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Wait for the next dispatch slot and claim it.
    pub async fn acquire(&self) {
        let mut last_request = self.last_request.lock().await;
        if let Some(last) = *last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_delay {
                let wait_time = self.min_delay - elapsed;
                tracing::debug!("Rate limiting: waiting {:?}", wait_time);
                sleep(wait_time).await;
            }
        }
        *last_request = Some(Instant::now());
    }

    /// Run `call` once its slot opens. The call's output, including any
    /// error, is returned untouched.
    pub async fn execute<F, Fut, T>(&self, call: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.acquire().await;
        call().await
    }

    pub fn min_delay(&self) -> Duration {
        self.min_delay
    }

    pub async fn last_dispatch(&self) -> Option<Instant> {
        *self.last_request.lock().await
    }
}
