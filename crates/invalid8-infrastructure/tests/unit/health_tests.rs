//! Adapter health probes

use invalid8_domain::value_objects::CacheEntry;
use invalid8_infrastructure::config::{CacheConfig, EventBusConfig};
use invalid8_infrastructure::factory::{create_cache_adapter, create_event_bus};
use invalid8_infrastructure::health::{check_cache_adapter, check_event_bus, HealthStatus};
use serde_json::json;

#[tokio::test]
async fn test_connected_cache_is_healthy_and_left_clean() {
    let adapter = create_cache_adapter(&CacheConfig::memory()).unwrap();
    adapter.connect().await.unwrap();

    let check = check_cache_adapter(&adapter).await;

    assert!(check.is_healthy(), "probe failed: {:?}", check.error);
    assert_eq!(check.name, "memory");
    assert!(adapter.keys().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_disconnected_cache_is_down() {
    let adapter = create_cache_adapter(&CacheConfig::memory()).unwrap();

    let check = check_cache_adapter(&adapter).await;

    assert_eq!(check.status, HealthStatus::Down);
    assert_eq!(check.error.as_deref(), Some("memory adapter is not connected"));
}

#[tokio::test]
async fn test_event_bus_probe() {
    let bus = create_event_bus(&EventBusConfig::memory()).unwrap();
    assert!(!check_event_bus(bus.as_ref()).await.is_healthy());

    bus.connect().await.unwrap();
    assert!(check_event_bus(bus.as_ref()).await.is_healthy());
}

#[tokio::test]
async fn test_cache_check_overwrites_a_leftover_marker() {
    let adapter = create_cache_adapter(&CacheConfig::memory()).unwrap();
    adapter.connect().await.unwrap();
    let leftover = CacheEntry::new(r#"["__invalid8_probe__"]"#, json!("stale marker"));
    adapter.set(r#"["__invalid8_probe__"]"#, leftover).await.unwrap();

    let check = check_cache_adapter(&adapter).await;

    assert!(check.is_healthy(), "probe failed: {:?}", check.error);
    assert!(adapter.keys().await.unwrap().is_empty());
}
