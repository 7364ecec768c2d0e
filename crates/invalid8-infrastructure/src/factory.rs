//! Adapter factory
//!
//! Builds the configured cache adapter and event bus. Backends are selected
//! by [`CacheAdapterKind`] / [`EventBusKind`]; adapters are returned
//! disconnected.

use crate::config::{CacheAdapterKind, CacheConfig, EventBusConfig, EventBusKind};
use invalid8_domain::error::Result;
use invalid8_domain::ports::{CacheAdapter, EventBus};
use invalid8_providers::cache::{MemoryCacheAdapter, RedisCacheAdapter};
use invalid8_providers::events::{KafkaEventBus, MemoryEventBus, RabbitMqEventBus};
use std::sync::Arc;
use tracing::debug;

/// Create the cache adapter selected by `config`
///
/// # Errors
///
/// Returns a configuration error if the Redis settings do not form a valid
/// connection URL.
pub fn create_cache_adapter(config: &CacheConfig) -> Result<Arc<dyn CacheAdapter>> {
    debug!(adapter = %config.adapter, "Creating cache adapter");
    let adapter: Arc<dyn CacheAdapter> = match config.adapter {
        CacheAdapterKind::Memory => Arc::new(MemoryCacheAdapter::new()),
        CacheAdapterKind::Redis => Arc::new(RedisCacheAdapter::new(config.redis.clone())?),
    };
    Ok(adapter)
}

/// Create a cache adapter by name, taking backend settings from `config`
///
/// # Errors
///
/// Returns `Error::UnknownAdapter` for a name no backend answers to.
pub fn create_cache_adapter_by_name(name: &str, config: &CacheConfig) -> Result<Arc<dyn CacheAdapter>> {
    let adapter = name.parse::<CacheAdapterKind>()?;
    create_cache_adapter(&CacheConfig {
        adapter,
        ..config.clone()
    })
}

/// Create the event bus selected by `config`
pub fn create_event_bus(config: &EventBusConfig) -> Result<Arc<dyn EventBus>> {
    debug!(provider = %config.provider, "Creating event bus");
    let bus: Arc<dyn EventBus> = match config.provider {
        EventBusKind::Memory => Arc::new(MemoryEventBus::new()),
        EventBusKind::Kafka => Arc::new(KafkaEventBus::new(config.kafka.clone())),
        EventBusKind::RabbitMq => Arc::new(RabbitMqEventBus::new(config.rabbitmq.clone())),
    };
    Ok(bus)
}

/// Create an event bus by name, taking backend settings from `config`
///
/// # Errors
///
/// Returns `Error::UnknownAdapter` for a name no backend answers to.
pub fn create_event_bus_by_name(name: &str, config: &EventBusConfig) -> Result<Arc<dyn EventBus>> {
    let provider = name.parse::<EventBusKind>()?;
    create_event_bus(&EventBusConfig {
        provider,
        ..config.clone()
    })
}

/// Names of the available cache adapters
pub fn list_cache_adapters() -> Vec<&'static str> {
    CacheAdapterKind::names()
}

/// Names of the available event buses
pub fn list_event_buses() -> Vec<&'static str> {
    EventBusKind::names()
}
