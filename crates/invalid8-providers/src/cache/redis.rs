//! Redis cache adapter (placeholder)
//!
//! Enforces the connection lifecycle of a remote cache but keeps entries in a
//! local map; no network I/O is performed. The connection URL is validated at
//! construction so misconfiguration surfaces early.
//!
//! Unlike [`MemoryCacheAdapter`](super::MemoryCacheAdapter) this adapter does
//! not apply lazy expiry on `get`.
//!
//! ## Example
//!
//! ```ignore
//! use invalid8_domain::value_objects::RedisConfig;
//! use invalid8_providers::cache::RedisCacheAdapter;
//!
//! let adapter = RedisCacheAdapter::new(RedisConfig::new("localhost"))?;
//! adapter.connect().await?;
//! ```

use crate::utils::ConnectionState;
use async_trait::async_trait;
use dashmap::DashMap;
use invalid8_domain::constants::REDIS_ADAPTER_NAME;
use invalid8_domain::error::{Error, Result};
use invalid8_domain::ports::CacheAdapter;
use invalid8_domain::value_objects::{CacheEntry, RedisConfig};
use tracing::warn;

/// Redis cache adapter
pub struct RedisCacheAdapter {
    config: RedisConfig,
    entries: DashMap<String, CacheEntry>,
    state: ConnectionState,
}

impl RedisCacheAdapter {
    /// Create a new, disconnected Redis adapter
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the connection URL built from
    /// `config` is not a valid Redis URL.
    pub fn new(config: RedisConfig) -> Result<Self> {
        ::redis::Client::open(config.connection_url().as_str()).map_err(|e| {
            Error::configuration_with_source(
                format!("Invalid Redis connection settings for host '{}'", config.host),
                e,
            )
        })?;

        Ok(Self {
            config,
            entries: DashMap::new(),
            state: ConnectionState::new(REDIS_ADAPTER_NAME),
        })
    }

    /// Connection settings this adapter was built with
    pub fn config(&self) -> &RedisConfig {
        &self.config
    }

    /// Server address description
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }
}

impl std::fmt::Debug for RedisCacheAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheAdapter")
            .field("server", &self.server_address())
            .field("db", &self.config.db)
            .field("connected", &self.state.is_connected())
            .finish()
    }
}

#[async_trait]
impl CacheAdapter for RedisCacheAdapter {
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>> {
        self.state.ensure_connected()?;
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, entry: CacheEntry) -> Result<()> {
        self.state.ensure_connected()?;
        self.entries.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.state.ensure_connected()?;
        self.entries.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.state.ensure_connected()?;
        self.entries.clear();
        Ok(())
    }

    async fn has(&self, key: &str) -> Result<bool> {
        self.state.ensure_connected()?;
        Ok(self.entries.contains_key(key))
    }

    async fn keys(&self) -> Result<Vec<String>> {
        self.state.ensure_connected()?;
        Ok(self.entries.iter().map(|entry| entry.key().clone()).collect())
    }

    async fn connect(&self) -> Result<()> {
        warn!(
            server = %self.server_address(),
            "Redis adapter: connect() is not fully implemented"
        );
        self.state.set_connected(true);
        Ok(())
    }

    async fn disconnect(&self) -> Result<()> {
        warn!(
            server = %self.server_address(),
            "Redis adapter: disconnect() is not fully implemented"
        );
        self.entries.clear();
        self.state.set_connected(false);
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.state.is_connected()
    }

    fn adapter_name(&self) -> &str {
        self.state.name()
    }
}
