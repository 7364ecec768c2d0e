//! Query client use case
//!
//! Cache-aside orchestration over a single [`CacheAdapter`]. A query serves
//! the cached value while it is younger than the stale time, otherwise it runs
//! the caller's fetcher, stores the result with an absolute expiry and returns
//! it.
//!
//! Concurrent misses for the same key are coalesced onto one fetch unless
//! [`QueryClientOptions::dedupe_in_flight`] is turned off.

use crate::in_flight::{CoalesceResult, InFlightGuard, InFlightRegistry};
use chrono::Utc;
use invalid8_domain::constants::{DEFAULT_CACHE_TIME_MS, DEFAULT_STALE_TIME_MS};
use invalid8_domain::error::Result;
use invalid8_domain::ports::CacheAdapter;
use invalid8_domain::value_objects::{CacheEntry, CacheKey, InvalidationOptions, QueryOptions};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Client-wide defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryClientOptions {
    /// Default lifetime of written entries (300 000 ms when unset)
    pub cache_time: Option<Duration>,
    /// Default freshness window (0 ms when unset: always refetch)
    pub stale_time: Option<Duration>,
    /// Coalesce concurrent misses for the same key onto one fetch
    pub dedupe_in_flight: bool,
}

impl Default for QueryClientOptions {
    fn default() -> Self {
        Self {
            cache_time: None,
            stale_time: None,
            dedupe_in_flight: true,
        }
    }
}

/// Query client bound to one cache adapter
pub struct QueryClient {
    adapter: Arc<dyn CacheAdapter>,
    default_cache_time: Duration,
    default_stale_time: Duration,
    in_flight: Option<InFlightRegistry>,
}

impl QueryClient {
    /// Create a client over `adapter`
    pub fn new(adapter: Arc<dyn CacheAdapter>, options: QueryClientOptions) -> Self {
        Self {
            adapter,
            default_cache_time: options
                .cache_time
                .unwrap_or(Duration::from_millis(DEFAULT_CACHE_TIME_MS)),
            default_stale_time: options
                .stale_time
                .unwrap_or(Duration::from_millis(DEFAULT_STALE_TIME_MS)),
            in_flight: options.dedupe_in_flight.then(InFlightRegistry::new),
        }
    }

    /// The bound adapter
    pub fn adapter(&self) -> &Arc<dyn CacheAdapter> {
        &self.adapter
    }

    /// Lifetime applied when a query does not set `cache_time`
    pub fn default_cache_time(&self) -> Duration {
        self.default_cache_time
    }

    /// Freshness window applied when a query does not set `stale_time`
    pub fn default_stale_time(&self) -> Duration {
        self.default_stale_time
    }

    /// Whether concurrent misses are coalesced
    pub fn dedupes_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Return cached data for `key` while fresh, otherwise fetch and store it
    ///
    /// A fresh hit never invokes `fetcher`. On a miss, the fetched value is
    /// written with `expires_at = now + cache_time` before `on_success` runs.
    /// A fetch failure is passed to `on_error` and returned unchanged; nothing
    /// is written.
    ///
    /// With in-flight deduplication a caller that joins another caller's fetch
    /// receives that fetch's value without running its own fetcher or
    /// callbacks. If the joined fetch fails, the caller runs its own fetcher.
    ///
    /// # Errors
    ///
    /// Returns the fetcher's error, an adapter error such as
    /// `Error::NotConnected`, or a JSON error if cached data does not decode
    /// into `T`.
    pub async fn query<T, F, Fut>(
        &self,
        key: &CacheKey,
        fetcher: F,
        options: QueryOptions<T>,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Send,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<T>> + Send,
    {
        let cache_key = key.to_cache_key();
        let stale_time = options.stale_time.unwrap_or(self.default_stale_time);

        if let Some(entry) = self.fresh_entry(&cache_key, stale_time).await? {
            debug!(key = %cache_key, "Cache hit");
            return entry.decode();
        }

        let guard = match &self.in_flight {
            Some(registry) => match registry.register(&cache_key) {
                CoalesceResult::Coalesced(mut receiver) => {
                    debug!(key = %cache_key, "Joining in-flight fetch");
                    match receiver.recv().await {
                        Ok(value) => return Ok(T::deserialize(value)?),
                        Err(_) => {
                            debug!(key = %cache_key, "In-flight fetch failed, fetching independently");
                            None
                        }
                    }
                }
                CoalesceResult::NewRequest(guard) => {
                    // A fetch may have completed between our read and registering
                    if let Some(entry) = self.fresh_entry(&cache_key, stale_time).await? {
                        debug!(key = %cache_key, "Cache hit after registering fetch");
                        guard.complete(entry.data.clone());
                        return entry.decode();
                    }
                    Some(guard)
                }
            },
            None => None,
        };

        debug!(key = %cache_key, "Cache miss, fetching");
        let outcome = self
            .fetch_and_store(&cache_key, fetcher, &options, guard)
            .await;

        match outcome {
            Ok(data) => {
                if let Some(on_success) = &options.on_success {
                    on_success(&data);
                }
                Ok(data)
            }
            Err(error) => {
                warn!(key = %cache_key, error = %error, "Query failed");
                if let Some(on_error) = &options.on_error {
                    on_error(&error);
                }
                Err(error)
            }
        }
    }

    /// Remove the entry for `key`
    ///
    /// The invalidation kind and broadcast flag are recorded in the log only.
    pub async fn invalidate(&self, key: &CacheKey, options: InvalidationOptions) -> Result<()> {
        let cache_key = key.to_cache_key();
        debug!(
            key = %cache_key,
            kind = ?options.kind,
            broadcast = ?options.broadcast,
            "Invalidating query"
        );
        self.adapter.delete(&cache_key).await
    }

    /// Write `data` for `key` as a success entry expiring after the default cache time
    pub async fn set_query_data<T>(&self, key: &CacheKey, data: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let cache_key = key.to_cache_key();
        let entry = CacheEntry::success(cache_key.clone(), data, Utc::now(), self.default_cache_time)?;
        self.adapter.set(&cache_key, entry).await
    }

    /// Read the data stored for `key` regardless of freshness
    ///
    /// Adapter expiry rules still apply.
    pub async fn get_query_data<T: DeserializeOwned>(&self, key: &CacheKey) -> Result<Option<T>> {
        match self.adapter.get(&key.to_cache_key()).await? {
            Some(entry) => Ok(Some(entry.decode()?)),
            None => Ok(None),
        }
    }

    /// Remove every entry from the adapter
    pub async fn clear(&self) -> Result<()> {
        self.adapter.clear().await
    }

    async fn fresh_entry(&self, cache_key: &str, stale_time: Duration) -> Result<Option<CacheEntry>> {
        let entry = self.adapter.get(cache_key).await?;
        Ok(entry.filter(|entry| entry.is_fresh_at(Utc::now(), stale_time)))
    }

    async fn fetch_and_store<T, F, Fut>(
        &self,
        cache_key: &str,
        fetcher: F,
        options: &QueryOptions<T>,
        guard: Option<InFlightGuard>,
    ) -> Result<T>
    where
        T: Serialize + Send,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<T>> + Send,
    {
        // Dropping the guard on any early return wakes waiters with no value
        let data = fetcher().await?;
        let cache_time = options.cache_time.unwrap_or(self.default_cache_time);
        let entry = CacheEntry::success(cache_key, &data, Utc::now(), cache_time)?;
        let shared = guard.as_ref().map(|_| entry.data.clone());

        self.adapter.set(cache_key, entry).await?;

        if let (Some(guard), Some(value)) = (guard, shared) {
            guard.complete(value);
        }
        Ok(data)
    }
}

impl std::fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryClient")
            .field("adapter", &self.adapter.adapter_name())
            .field("default_cache_time", &self.default_cache_time)
            .field("default_stale_time", &self.default_stale_time)
            .field("dedupe_in_flight", &self.in_flight.is_some())
            .finish()
    }
}
