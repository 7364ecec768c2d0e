//! Cache value objects
//!
//! The unit stored in and retrieved from cache adapters, and the structured
//! key callers use to address it.

use crate::error::Result;
use chrono::{DateTime, TimeDelta, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

/// Open metadata map attached to a cache entry
pub type CacheMetadata = serde_json::Map<String, Value>;

/// Structured query key
///
/// An ordered sequence of JSON values. The compact JSON encoding of the
/// sequence is the cache key used by adapters, so two keys address the same
/// entry iff their encodings are byte-identical (order and type sensitive).
///
/// # Example
///
/// ```
/// use invalid8_domain::query_key;
///
/// let key = query_key!["user", 1];
/// assert_eq!(key.to_cache_key(), r#"["user",1]"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheKey {
    /// The ordered key parts
    pub query_key: Vec<Value>,
}

impl CacheKey {
    /// Create a key from already-built JSON values
    pub fn new(query_key: Vec<Value>) -> Self {
        Self { query_key }
    }

    /// Create a key from any serializable parts
    pub fn from_parts<I, T>(parts: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Serialize,
    {
        let query_key = parts
            .into_iter()
            .map(|part| serde_json::to_value(part))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { query_key })
    }

    /// Deterministic string form used as the adapter key
    pub fn to_cache_key(&self) -> String {
        // Value's Display is compact JSON and cannot fail
        Value::Array(self.query_key.clone()).to_string()
    }
}

impl From<Vec<Value>> for CacheKey {
    fn from(query_key: Vec<Value>) -> Self {
        Self::new(query_key)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_cache_key())
    }
}

/// Build a [`CacheKey`] from a list of JSON-convertible expressions
#[macro_export]
macro_rules! query_key {
    ($($part:expr),* $(,)?) => {
        $crate::value_objects::CacheKey::new(vec![$($crate::__serde_json::json!($part)),*])
    };
}

/// Lifecycle status of a cache entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheStatus {
    /// Nothing has happened yet
    #[default]
    Idle,
    /// A fetch is in progress
    Loading,
    /// Data was fetched or set successfully
    Success,
    /// The last fetch failed
    Error,
    /// Data is present but past its stale time
    Stale,
}

/// Entry stored by a cache adapter
///
/// Entries are replaced wholesale; nothing mutates an entry in place once an
/// adapter owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Serialized cache key this entry was stored under
    pub key: String,
    /// Cached payload
    pub data: Value,
    /// Entry status
    pub status: CacheStatus,
    /// When the data was produced
    pub timestamp: DateTime<Utc>,
    /// Absolute expiry instant, if any
    pub expires_at: Option<DateTime<Utc>>,
    /// Free-form metadata
    pub metadata: Option<CacheMetadata>,
}

impl CacheEntry {
    /// Create an idle entry timestamped now with no expiry
    pub fn new<S: Into<String>>(key: S, data: Value) -> Self {
        Self {
            key: key.into(),
            data,
            status: CacheStatus::Idle,
            timestamp: Utc::now(),
            expires_at: None,
            metadata: None,
        }
    }

    /// Create a success entry produced at `now` that expires after `cache_time`
    pub fn success<S, T>(key: S, data: &T, now: DateTime<Utc>, cache_time: Duration) -> Result<Self>
    where
        S: Into<String>,
        T: Serialize + ?Sized,
    {
        Ok(Self {
            key: key.into(),
            data: serde_json::to_value(data)?,
            status: CacheStatus::Success,
            timestamp: now,
            expires_at: Some(add_duration(now, cache_time)),
            metadata: None,
        })
    }

    /// Set the status
    pub fn with_status(mut self, status: CacheStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the production timestamp
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the absolute expiry instant
    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Attach metadata
    pub fn with_metadata(mut self, metadata: CacheMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Whether `expires_at` is set and strictly before `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at < now)
    }

    /// Whether the entry is younger than `stale_time` at `now`
    pub fn is_fresh_at(&self, now: DateTime<Utc>, stale_time: Duration) -> bool {
        now.signed_duration_since(self.timestamp) < to_time_delta(stale_time)
    }

    /// Decode the payload into the caller's type
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(T::deserialize(&self.data)?)
    }
}

/// Convert a std duration, saturating at the largest representable delta
pub fn to_time_delta(duration: Duration) -> TimeDelta {
    TimeDelta::from_std(duration).unwrap_or(TimeDelta::MAX)
}

/// Add a std duration to an instant, saturating at the latest representable instant
pub fn add_duration(instant: DateTime<Utc>, duration: Duration) -> DateTime<Utc> {
    instant
        .checked_add_signed(to_time_delta(duration))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
