//! Query and invalidation options

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Callback invoked with freshly fetched data
pub type SuccessCallback<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Callback invoked with a fetch failure before it is returned
pub type ErrorCallback = Box<dyn Fn(&Error) + Send + Sync>;

/// Retry setting accepted by [`QueryOptions`]
///
/// The query client does not retry; this only records the caller's intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Retry {
    /// Retry on or off
    Enabled(bool),
    /// Maximum number of attempts
    Attempts(u32),
}

/// Per-call options for `QueryClient::query`
///
/// Unset durations fall back to the client defaults.
pub struct QueryOptions<T> {
    /// How long a written entry lives before it expires
    pub cache_time: Option<Duration>,
    /// How long a written entry is served without refetching
    pub stale_time: Option<Duration>,
    /// Accepted, no effect
    pub retry: Option<Retry>,
    /// Accepted, no effect
    pub retry_delay: Option<Duration>,
    /// Called with the fetched data after it was stored
    pub on_success: Option<SuccessCallback<T>>,
    /// Called with the fetch error before it is returned
    pub on_error: Option<ErrorCallback>,
}

impl<T> QueryOptions<T> {
    /// Options with every field unset
    pub fn new() -> Self {
        Self {
            cache_time: None,
            stale_time: None,
            retry: None,
            retry_delay: None,
            on_success: None,
            on_error: None,
        }
    }

    /// Set the cache time
    pub fn with_cache_time(mut self, cache_time: Duration) -> Self {
        self.cache_time = Some(cache_time);
        self
    }

    /// Set the stale time
    pub fn with_stale_time(mut self, stale_time: Duration) -> Self {
        self.stale_time = Some(stale_time);
        self
    }

    /// Set the retry setting
    pub fn with_retry(mut self, retry: Retry) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Set the retry delay
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = Some(retry_delay);
        self
    }

    /// Set the success callback
    pub fn on_success<F>(mut self, callback: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.on_success = Some(Box::new(callback));
        self
    }

    /// Set the error callback
    pub fn on_error<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Error) + Send + Sync + 'static,
    {
        self.on_error = Some(Box::new(callback));
        self
    }
}

impl<T> Default for QueryOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for QueryOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryOptions")
            .field("cache_time", &self.cache_time)
            .field("stale_time", &self.stale_time)
            .field("retry", &self.retry)
            .field("retry_delay", &self.retry_delay)
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

/// Reason an entry is being invalidated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidationType {
    /// Explicit caller request
    Manual,
    /// Time based
    Timeout,
    /// Triggered by an event
    Event,
    /// Triggered by a dependent key
    Dependency,
}

/// Options for `QueryClient::invalidate`
///
/// Accepted for API compatibility; invalidation always deletes the key locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidationOptions {
    /// Invalidation reason
    #[serde(rename = "type")]
    pub kind: Option<InvalidationType>,
    /// Whether the invalidation should be broadcast
    pub broadcast: Option<bool>,
}
