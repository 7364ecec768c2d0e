//! # Invalid8
//!
//! A query caching client: cache-aside reads with a freshness window,
//! absolute entry expiry, manual writes and invalidation, over pluggable
//! cache adapters. An event bus contract with in-memory and placeholder
//! broker implementations ships alongside.
//!
//! ## Example
//!
//! ```no_run
//! use invalid8::{query_key, Invalid8, QueryOptions};
//! use std::time::Duration;
//!
//! # async fn run() -> invalid8::Result<()> {
//! let cache = Invalid8::with_memory();
//! cache.connect().await?;
//!
//! let key = query_key!["user", 1];
//! let name: String = cache
//!     .query(
//!         &key,
//!         || async { Ok("Alice".to_string()) },
//!         QueryOptions::new().with_stale_time(Duration::from_secs(30)),
//!     )
//!     .await?;
//! assert_eq!(name, "Alice");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Errors, value objects, and the `CacheAdapter`/`EventBus` ports
//! - `application` - The query client
//! - `providers` - Adapter and event bus implementations
//! - `infrastructure` - Configuration, logging, adapter factory, health probes

use invalid8_infrastructure::config::loader::validate_cache_config;
use invalid8_infrastructure::config::AppConfig;
use invalid8_infrastructure::factory::{create_cache_adapter, create_event_bus};
use invalid8_infrastructure::health::{check_cache_adapter, check_event_bus, HealthCheck};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;

/// Domain layer - errors, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use invalid8_domain::*;
}

/// Application layer - query client
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use invalid8_application::*;
}

/// Provider layer - cache adapters and event buses
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use invalid8_providers::*;
}

/// Infrastructure layer - config, logging and wiring
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use invalid8_infrastructure::*;
}

pub use invalid8_application::use_cases::{QueryClient, QueryClientOptions};
pub use invalid8_domain::error::{Error, Result};
pub use invalid8_domain::ports::{CacheAdapter, EventBus};
pub use invalid8_domain::query_key;
pub use invalid8_domain::value_objects::{
    CacheEntry, CacheKey, CacheStatus, InvalidationOptions, InvalidationType, QueryOptions,
    RedisConfig, Retry,
};
pub use invalid8_infrastructure::config::{CacheAdapterKind, CacheConfig};
pub use invalid8_infrastructure::error_ext::ErrorContext;
pub use invalid8_providers::cache::MemoryCacheAdapter;

/// Query cache bound to one adapter
#[derive(Debug)]
pub struct Invalid8 {
    client: QueryClient,
}

impl Invalid8 {
    /// Create a cache over `adapter`
    pub fn new(adapter: Arc<dyn CacheAdapter>, options: QueryClientOptions) -> Self {
        Self {
            client: QueryClient::new(adapter, options),
        }
    }

    /// Create a cache over a fresh in-memory adapter with default options
    pub fn with_memory() -> Self {
        Self::new(Arc::new(MemoryCacheAdapter::new()), QueryClientOptions::default())
    }

    /// Create a cache with the adapter and defaults described by `config`
    ///
    /// `config` is validated the same way `ConfigLoader::load` validates the
    /// `[cache]` table. The adapter is returned disconnected.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        validate_cache_config(config)?;
        let adapter = create_cache_adapter(config)?;
        Ok(Self::new(adapter, config.query_client_options()))
    }

    /// Connect the adapter
    pub async fn connect(&self) -> Result<()> {
        self.client.adapter().connect().await
    }

    /// Disconnect the adapter, dropping every stored entry
    pub async fn disconnect(&self) -> Result<()> {
        self.client.adapter().disconnect().await
    }

    /// Whether the adapter is connected
    pub fn is_connected(&self) -> bool {
        self.client.adapter().is_connected()
    }

    /// See [`QueryClient::query`]
    pub async fn query<T, F, Fut>(&self, key: &CacheKey, fetcher: F, options: QueryOptions<T>) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Send,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<T>> + Send,
    {
        self.client.query(key, fetcher, options).await
    }

    /// See [`QueryClient::invalidate`]
    pub async fn invalidate(&self, key: &CacheKey, options: InvalidationOptions) -> Result<()> {
        self.client.invalidate(key, options).await
    }

    /// See [`QueryClient::set_query_data`]
    pub async fn set_query_data<T>(&self, key: &CacheKey, data: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.client.set_query_data(key, data).await
    }

    /// See [`QueryClient::get_query_data`]
    pub async fn get_query_data<T: DeserializeOwned>(&self, key: &CacheKey) -> Result<Option<T>> {
        self.client.get_query_data(key).await
    }

    /// Remove every cached entry
    pub async fn clear(&self) -> Result<()> {
        self.client.clear().await
    }

    /// The underlying query client
    pub fn query_client(&self) -> &QueryClient {
        &self.client
    }

    /// The bound adapter
    pub fn adapter(&self) -> &Arc<dyn CacheAdapter> {
        self.client.adapter()
    }
}

/// Build, connect, probe and disconnect the configured cache adapter and event bus
///
/// # Errors
///
/// Fails if a backend cannot be built or connected. Probe failures are
/// reported in the returned checks rather than as errors.
pub async fn run_health_checks(config: &AppConfig) -> Result<Vec<HealthCheck>> {
    let adapter = create_cache_adapter(&config.cache)?;
    adapter.connect().await?;
    let cache_check = check_cache_adapter(&adapter).await;
    adapter.disconnect().await?;

    let bus = create_event_bus(&config.events)?;
    bus.connect().await?;
    let bus_check = check_event_bus(bus.as_ref()).await;
    bus.disconnect().await?;

    Ok(vec![cache_check, bus_check])
}
