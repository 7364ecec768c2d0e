//! Cache Adapter Port
//!
//! Contract every cache backend satisfies. The query client only talks to
//! this trait, so backends are interchangeable.
//!
//! ## Connection lifecycle
//!
//! Adapters start disconnected. Storage operations (`get`, `set`, `delete`,
//! `clear`, `has`, `keys`) fail with [`Error::NotConnected`] until
//! `connect()` succeeds. `disconnect()` drops every stored entry.
//!
//! [`Error::NotConnected`]: crate::error::Error::NotConnected

use crate::error::Result;
use crate::value_objects::CacheEntry;
use async_trait::async_trait;

/// Cache Adapter Port
///
/// # Implementations
///
/// - **Memory**: in-process map with lazy TTL expiry on read
/// - **Redis**: placeholder that enforces the lifecycle but stores in memory
///
/// # Example
///
/// ```ignore
/// use invalid8_domain::ports::CacheAdapter;
///
/// adapter.connect().await?;
/// adapter.set("[\"user\",1]", entry).await?;
/// let entry = adapter.get("[\"user\",1]").await?;
/// ```
#[async_trait]
pub trait CacheAdapter: Send + Sync + std::fmt::Debug {
    /// Get the entry stored under `key`
    ///
    /// # Returns
    /// The stored entry verbatim, or None if absent (or lazily expired)
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>>;

    /// Store or overwrite the entry under `key`
    async fn set(&self, key: &str, entry: CacheEntry) -> Result<()>;

    /// Remove the entry under `key`, if any
    async fn delete(&self, key: &str) -> Result<()>;

    /// Remove every entry
    async fn clear(&self) -> Result<()>;

    /// Check whether an entry is stored under `key`
    async fn has(&self, key: &str) -> Result<bool>;

    /// List every stored key
    async fn keys(&self) -> Result<Vec<String>>;

    /// Connect to the backend
    async fn connect(&self) -> Result<()>;

    /// Disconnect from the backend, dropping stored entries
    async fn disconnect(&self) -> Result<()>;

    /// Whether `connect()` has been called without a later `disconnect()`
    fn is_connected(&self) -> bool;

    /// Get the name/identifier of this adapter (e.g., "memory", "redis")
    fn adapter_name(&self) -> &str;
}
