//! In-memory cache adapter
//!
//! Reference backend for development and testing. Entries live in a
//! concurrent map and expire lazily: an entry whose `expires_at` has passed is
//! removed by the next `get` of that key. There is no background sweep, so
//! `has` and `keys` still report expired entries until they are read.
//!
//! ## Example
//!
//! ```ignore
//! use invalid8_providers::cache::MemoryCacheAdapter;
//!
//! let adapter = MemoryCacheAdapter::new();
//! adapter.connect().await?;
//! ```

use crate::utils::ConnectionState;
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use invalid8_domain::constants::MEMORY_ADAPTER_NAME;
use invalid8_domain::error::Result;
use invalid8_domain::ports::CacheAdapter;
use invalid8_domain::value_objects::CacheEntry;
use tracing::debug;

/// In-memory cache adapter
pub struct MemoryCacheAdapter {
    entries: DashMap<String, CacheEntry>,
    state: ConnectionState,
}

impl MemoryCacheAdapter {
    /// Create a new, disconnected in-memory adapter
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            state: ConnectionState::new(MEMORY_ADAPTER_NAME),
        }
    }

    /// Number of stored entries, expired ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryCacheAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryCacheAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCacheAdapter")
            .field("connected", &self.state.is_connected())
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[async_trait]
impl CacheAdapter for MemoryCacheAdapter {
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>> {
        self.state.ensure_connected()?;

        let entry = match self.entries.get(key) {
            Some(entry) => entry.value().clone(),
            None => return Ok(None),
        };

        let now = Utc::now();
        if entry.is_expired_at(now) {
            // Only evict if nobody replaced it since we read it
            self.entries
                .remove_if(key, |_, stored| stored.is_expired_at(now));
            debug!(key = key, "Evicted expired cache entry");
            return Ok(None);
        }

        Ok(Some(entry))
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
        self.state.set_connected(true);
        debug!(adapter = MEMORY_ADAPTER_NAME, "Cache adapter connected");
        Ok(())
    }

    async fn disconnect(&self) -> Result<()> {
        self.entries.clear();
        self.state.set_connected(false);
        debug!(adapter = MEMORY_ADAPTER_NAME, "Cache adapter disconnected");
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.state.is_connected()
    }

    fn adapter_name(&self) -> &str {
        self.state.name()
    }
}
