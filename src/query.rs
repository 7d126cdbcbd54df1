// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-query policy: bounded retries and a freshness window.
//!
//! Applies to reads only. Mutations go straight to the repository.

use crate::config::Config;
use crate::error::Result;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Upper bound on the delay between two attempts.
const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

/// Retry and caching policy for read queries.
#[derive(Debug, Clone, Copy)]
pub struct QueryPolicy {
    /// Extra attempts after the first failure.
    pub retry: u32,
    /// Age after which a cached result is refetched.
    pub stale_time: Duration,
    /// Delay before the first retry; doubles each attempt.
    pub retry_delay: Duration,
}

impl QueryPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            retry: config.query_retry,
            stale_time: config.query_stale_time,
            retry_delay: Duration::from_secs(1),
        }
    }

    fn delay_for(&self, attempt: u32) -> Duration {
        self.retry_delay
            .saturating_mul(2u32.saturating_pow(attempt))
            .min(MAX_RETRY_DELAY)
    }

    /// Run `query`, retrying retryable failures up to `retry` times.
    pub async fn run<T, F, Fut>(&self, mut query: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 0;
        loop {
            match query().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.retry && e.is_retryable() => {
                    let delay = self.delay_for(attempt);
                    tracing::warn!(attempt = attempt + 1, error = %e, ?delay, "Query failed, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl Default for QueryPolicy {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Single cached query result.
#[derive(Debug)]
pub struct QueryCache<T> {
    entry: Option<(T, Instant)>,
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<T: Clone> QueryCache<T> {
    /// Cached value if younger than `stale_time`.
    pub fn fresh(&self, stale_time: Duration) -> Option<T> {
        self.entry
            .as_ref()
            .filter(|(_, fetched_at)| fetched_at.elapsed() < stale_time)
            .map(|(value, _)| value.clone())
    }

    pub fn store(&mut self, value: T) {
        self.entry = Some((value, Instant::now()));
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn policy(retry: u32) -> QueryPolicy {
        QueryPolicy {
            retry,
            stale_time: Duration::from_secs(300),
            retry_delay: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn test_retries_transient_failures() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result = policy(2)
            .run(move || async move {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                if n < 2 {
                    Err(ApiError::Transport("connection reset".into()))
                } else {
                    Ok(n)
                }
            })
            .await;

        assert_eq!(result.unwrap(), 2);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_retry_budget() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result: Result<()> = policy(2)
            .run(move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(ApiError::Status {
                    status: 503,
                    message: None,
                })
            })
            .await;

        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_client_errors_are_not_retried() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result: Result<()> = policy(2)
            .run(move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(ApiError::Status {
                    status: 401,
                    message: None,
                })
            })
            .await;

        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_retry_delay_doubles_and_caps() {
        let policy = QueryPolicy::default();
        assert_eq!(policy.delay_for(0), Duration::from_secs(1));
        assert_eq!(policy.delay_for(1), Duration::from_secs(2));
        assert_eq!(policy.delay_for(10), MAX_RETRY_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cache_goes_stale() {
        let stale = Duration::from_secs(300);
        let mut cache = QueryCache::default();
        assert_eq!(cache.fresh(stale), None::<u32>);

        cache.store(7u32);
        assert_eq!(cache.fresh(stale), Some(7));

        tokio::time::advance(Duration::from_secs(301)).await;
        assert_eq!(cache.fresh(stale), None);

        cache.store(8);
        cache.invalidate();
        assert_eq!(cache.fresh(stale), None);
    }
}
