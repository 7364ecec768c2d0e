//! Cache configuration types

use invalid8_application::use_cases::QueryClientOptions;
use invalid8_domain::constants::{
    DEFAULT_CACHE_TIME_MS, DEFAULT_STALE_TIME_MS, MEMORY_ADAPTER_NAME, REDIS_ADAPTER_NAME,
};
use invalid8_domain::error::Error;
use invalid8_domain::value_objects::RedisConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Cache adapter backends
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheAdapterKind {
    /// In-process map with lazy expiry
    #[default]
    Memory,
    /// Redis placeholder
    Redis,
}

impl CacheAdapterKind {
    /// Every known backend
    pub const ALL: [CacheAdapterKind; 2] = [CacheAdapterKind::Memory, CacheAdapterKind::Redis];

    /// Name used in configuration and reported by the adapter
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheAdapterKind::Memory => MEMORY_ADAPTER_NAME,
            CacheAdapterKind::Redis => REDIS_ADAPTER_NAME,
        }
    }

    /// Names of every known backend
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(CacheAdapterKind::as_str).collect()
    }
}

impl fmt::Display for CacheAdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CacheAdapterKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownAdapter {
                name: name.to_string(),
                available: Self::names(),
            })
    }
}

/// Cache configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Adapter backing the query client
    pub adapter: CacheAdapterKind,
    /// Lifetime of written entries in milliseconds
    pub default_cache_time_ms: u64,
    /// Freshness window in milliseconds
    pub default_stale_time_ms: u64,
    /// Coalesce concurrent misses for the same key
    pub dedupe_in_flight: bool,
    /// Redis connection settings (used when `adapter = "redis"`)
    pub redis: RedisConfig,
}

/// Returns default cache configuration with:
/// - in-memory adapter
/// - 5 minute cache time, always-stale freshness window
/// - in-flight deduplication enabled
impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            adapter: CacheAdapterKind::Memory,
            default_cache_time_ms: DEFAULT_CACHE_TIME_MS,
            default_stale_time_ms: DEFAULT_STALE_TIME_MS,
            dedupe_in_flight: true,
            redis: RedisConfig::default(),
        }
    }
}

impl CacheConfig {
    /// Config for the in-memory adapter (default)
    pub fn memory() -> Self {
        Self::default()
    }

    /// Config for the Redis adapter
    pub fn redis(redis: RedisConfig) -> Self {
        Self {
            adapter: CacheAdapterKind::Redis,
            redis,
            ..Default::default()
        }
    }

    /// Set the default cache time
    pub fn with_cache_time(mut self, cache_time: Duration) -> Self {
        self.default_cache_time_ms = duration_to_millis(cache_time);
        self
    }

    /// Set the default stale time
    pub fn with_stale_time(mut self, stale_time: Duration) -> Self {
        self.default_stale_time_ms = duration_to_millis(stale_time);
        self
    }

    /// Enable or disable in-flight deduplication
    pub fn with_dedupe_in_flight(mut self, dedupe_in_flight: bool) -> Self {
        self.dedupe_in_flight = dedupe_in_flight;
        self
    }

    /// Query client defaults described by this config
    pub fn query_client_options(&self) -> QueryClientOptions {
        QueryClientOptions {
            cache_time: Some(Duration::from_millis(self.default_cache_time_ms)),
            stale_time: Some(Duration::from_millis(self.default_stale_time_ms)),
            dedupe_in_flight: self.dedupe_in_flight,
        }
    }
}

fn duration_to_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
