//! Root application configuration

use super::{CacheConfig, EventBusConfig, LoggingConfig};
use serde::{Deserialize, Serialize};

/// Application configuration
///
/// Maps to the sections of `invalid8.toml`:
///
/// ```toml
/// [cache]
/// adapter = "memory"
/// default_cache_time_ms = 300000
///
/// [events]
/// provider = "memory"
///
/// [logging]
/// level = "info"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Query client and cache adapter settings
    pub cache: CacheConfig,
    /// Event bus settings
    pub events: EventBusConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}
