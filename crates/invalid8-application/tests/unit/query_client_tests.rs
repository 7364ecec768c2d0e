//! Query client behavior over the in-memory and Redis adapters

use chrono::{TimeDelta, Utc};
use invalid8_application::use_cases::{QueryClient, QueryClientOptions};
use invalid8_domain::error::Error;
use invalid8_domain::ports::CacheAdapter;
use invalid8_domain::query_key;
use invalid8_domain::value_objects::{
    CacheEntry, CacheKey, CacheStatus, InvalidationOptions, InvalidationType, QueryOptions,
};
use invalid8_providers::cache::{MemoryCacheAdapter, RedisCacheAdapter, RedisConfig};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
}

fn alice() -> User {
    User {
        id: 1,
        name: "Alice".to_string(),
    }
}

async fn connected_memory() -> Arc<MemoryCacheAdapter> {
    let adapter = Arc::new(MemoryCacheAdapter::new());
    adapter.connect().await.expect("memory adapter connects");
    adapter
}

fn client_with(adapter: Arc<MemoryCacheAdapter>, stale_time: Duration) -> QueryClient {
    QueryClient::new(
        adapter,
        QueryClientOptions {
            stale_time: Some(stale_time),
            ..QueryClientOptions::default()
        },
    )
}

/// Fetcher that counts its invocations and returns `value`
async fn counted<T>(calls: &AtomicUsize, value: T) -> invalid8_domain::Result<T> {
    calls.fetch_add(1, Ordering::SeqCst);
    Ok(value)
}

#[test]
fn test_default_options() {
    let client = QueryClient::new(Arc::new(MemoryCacheAdapter::new()), QueryClientOptions::default());

    assert_eq!(client.default_cache_time(), Duration::from_millis(300_000));
    assert_eq!(client.default_stale_time(), Duration::ZERO);
    assert!(client.dedupes_in_flight());
    assert_eq!(client.adapter().adapter_name(), "memory");
}

#[tokio::test]
async fn test_fresh_entry_skips_fetcher() {
    let client = client_with(connected_memory().await, Duration::from_secs(60));
    let key = query_key!["user", 1];
    let calls = AtomicUsize::new(0);

    let first: User = client
        .query(&key, || counted(&calls, alice()), QueryOptions::new())
        .await
        .unwrap();
    let second: User = client
        .query(
            &key,
            || counted(&calls, User { id: 2, name: "Bob".to_string() }),
            QueryOptions::new(),
        )
        .await
        .unwrap();

    assert_eq!(first, alice());
    assert_eq!(second, alice());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_zero_stale_time_always_refetches() {
    let client = client_with(connected_memory().await, Duration::ZERO);
    let key = query_key!["counter"];
    let calls = AtomicUsize::new(0);

    let first: u32 = client
        .query(&key, || counted(&calls, 1), QueryOptions::new())
        .await
        .unwrap();
    let second: u32 = client
        .query(&key, || counted(&calls, 2), QueryOptions::new())
        .await
        .unwrap();

    assert_eq!((first, second), (1, 2));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(client.get_query_data::<u32>(&key).await.unwrap(), Some(2));
}

#[tokio::test]
async fn test_freshness_uses_entry_age() {
    let adapter = connected_memory().await;
    let client = client_with(Arc::clone(&adapter), Duration::from_secs(60));
    let key = query_key!["user", 1];
    let calls = AtomicUsize::new(0);

    // Ten seconds old: fresh under a 60s window, stale under a 5s one
    let backdated = CacheEntry::new(key.to_cache_key(), json!({"id": 1, "name": "Cached"}))
        .with_status(CacheStatus::Success)
        .with_timestamp(Utc::now() - TimeDelta::seconds(10));
    adapter.set(&key.to_cache_key(), backdated).await.unwrap();

    let cached: User = client
        .query(&key, || counted(&calls, alice()), QueryOptions::new())
        .await
        .unwrap();
    assert_eq!(cached.name, "Cached");
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let refreshed: User = client
        .query(
            &key,
            || counted(&calls, alice()),
            QueryOptions::new().with_stale_time(Duration::from_secs(5)),
        )
        .await
        .unwrap();
    assert_eq!(refreshed, alice());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_written_entry_expires_after_cache_time() {
    let adapter = connected_memory().await;
    let client = client_with(Arc::clone(&adapter), Duration::ZERO);
    let key = query_key!["user", 1];
    let calls = AtomicUsize::new(0);

    let _: User = client
        .query(
            &key,
            || counted(&calls, alice()),
            QueryOptions::new().with_cache_time(Duration::from_secs(60)),
        )
        .await
        .unwrap();

    let entry = adapter.get(&key.to_cache_key()).await.unwrap().unwrap();
    assert_eq!(entry.status, CacheStatus::Success);
    assert_eq!(entry.key, r#"["user",1]"#);
    assert_eq!(entry.expires_at, Some(entry.timestamp + TimeDelta::seconds(60)));
    assert_eq!(entry.decode::<User>().unwrap(), alice());
}

#[tokio::test]
async fn test_expired_entry_is_a_miss() {
    let adapter = connected_memory().await;
    let client = client_with(Arc::clone(&adapter), Duration::from_secs(3600));
    let key = query_key!["user", 1];
    let now = Utc::now();

    // Fresh by age but past its expiry: the memory adapter evicts it on read
    let expired = CacheEntry::new(key.to_cache_key(), json!({"id": 1, "name": "Old"}))
        .with_timestamp(now)
        .with_expires_at(now - TimeDelta::seconds(1));
    adapter.set(&key.to_cache_key(), expired).await.unwrap();

    assert_eq!(client.get_query_data::<User>(&key).await.unwrap(), None);
    assert!(!adapter.has(&key.to_cache_key()).await.unwrap());
}

#[tokio::test]
async fn test_set_and_get_query_data() {
    let adapter = connected_memory().await;
    let client = client_with(Arc::clone(&adapter), Duration::ZERO);
    let key = query_key!["user", 1];

    client.set_query_data(&key, &alice()).await.unwrap();

    assert_eq!(client.get_query_data::<User>(&key).await.unwrap(), Some(alice()));
    let entry = adapter.get(&key.to_cache_key()).await.unwrap().unwrap();
    assert_eq!(entry.status, CacheStatus::Success);
    assert_eq!(
        entry.expires_at,
        Some(entry.timestamp + TimeDelta::milliseconds(300_000))
    );
}

#[tokio::test]
async fn test_get_query_data_ignores_freshness() {
    let client = client_with(connected_memory().await, Duration::ZERO);
    let key = query_key!["user", 1];

    client.set_query_data(&key, &alice()).await.unwrap();

    assert_eq!(client.get_query_data::<User>(&key).await.unwrap(), Some(alice()));
    assert_eq!(
        client.get_query_data::<User>(&query_key!["user", 2]).await.unwrap(),
        None
    );
}

#[tokio::test]
async fn test_get_query_data_with_wrong_type_is_json_error() {
    let client = client_with(connected_memory().await, Duration::ZERO);
    let key = query_key!["user", 1];
    client.set_query_data(&key, &alice()).await.unwrap();

    let result = client.get_query_data::<Vec<u8>>(&key).await;

    assert!(matches!(result, Err(Error::Json { .. })));
}

#[tokio::test]
async fn test_invalidate_forces_refetch() {
    let client = client_with(connected_memory().await, Duration::from_secs(60));
    let key = query_key!["user", 1];
    let calls = AtomicUsize::new(0);

    let _: User = client
        .query(&key, || counted(&calls, alice()), QueryOptions::new())
        .await
        .unwrap();
    client
        .invalidate(
            &key,
            InvalidationOptions {
                kind: Some(InvalidationType::Manual),
                broadcast: Some(true),
            },
        )
        .await
        .unwrap();

    assert_eq!(client.get_query_data::<User>(&key).await.unwrap(), None);

    let _: User = client
        .query(&key, || counted(&calls, alice()), QueryOptions::new())
        .await
        .unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_invalidate_stale_entry_forces_refetch() {
    let adapter = connected_memory().await;
    let client = client_with(Arc::clone(&adapter), Duration::ZERO);
    let key = query_key!["user", 1];
    let calls = AtomicUsize::new(0);

    // Already stale under a zero window, still stored and unexpired
    client.set_query_data(&key, &alice()).await.unwrap();
    client
        .invalidate(&key, InvalidationOptions::default())
        .await
        .unwrap();

    assert!(!adapter.has(&key.to_cache_key()).await.unwrap());
    let _: User = client
        .query(&key, || counted(&calls, alice()), QueryOptions::new())
        .await
        .unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_invalidate_expired_entry_forces_refetch() {
    let adapter = connected_memory().await;
    let client = client_with(Arc::clone(&adapter), Duration::from_secs(3600));
    let key = query_key!["user", 1];
    let calls = AtomicUsize::new(0);
    let now = Utc::now();

    // Never read, so the memory adapter has not evicted it yet
    let expired = CacheEntry::new(key.to_cache_key(), json!({"id": 1, "name": "Old"}))
        .with_timestamp(now)
        .with_expires_at(now - TimeDelta::seconds(1));
    adapter.set(&key.to_cache_key(), expired).await.unwrap();
    assert!(adapter.has(&key.to_cache_key()).await.unwrap());

    client
        .invalidate(&key, InvalidationOptions::default())
        .await
        .unwrap();

    assert!(!adapter.has(&key.to_cache_key()).await.unwrap());
    let fetched: User = client
        .query(&key, || counted(&calls, alice()), QueryOptions::new())
        .await
        .unwrap();
    assert_eq!(fetched, alice());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_invalidate_missing_key_is_ok() {
    let client = client_with(connected_memory().await, Duration::ZERO);

    client
        .invalidate(&query_key!["nothing"], InvalidationOptions::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_fetch_error_propagates_and_writes_nothing() {
    let adapter = connected_memory().await;
    let client = client_with(Arc::clone(&adapter), Duration::ZERO);
    let key = query_key!["user", 1];
    let errors = Arc::new(AtomicUsize::new(0));
    let successes = Arc::new(AtomicUsize::new(0));

    let seen_errors = Arc::clone(&errors);
    let seen_successes = Arc::clone(&successes);
    let options = QueryOptions::<User>::new()
        .on_success(move |_| {
            seen_successes.fetch_add(1, Ordering::SeqCst);
        })
        .on_error(move |error| {
            assert!(matches!(error, Error::Fetch { message, .. } if message == "boom"));
            seen_errors.fetch_add(1, Ordering::SeqCst);
        });

    let result = client
        .query(&key, || async { Err(Error::fetch("boom")) }, options)
        .await;

    match result {
        Err(Error::Fetch { message, .. }) => assert_eq!(message, "boom"),
        other => panic!("expected fetch error, got {other:?}"),
    }
    assert_eq!(errors.load(Ordering::SeqCst), 1);
    assert_eq!(successes.load(Ordering::SeqCst), 0);
    assert!(!adapter.has(r#"["user",1]"#).await.unwrap());
}

#[tokio::test]
async fn test_on_success_sees_fetched_data() {
    let client = client_with(connected_memory().await, Duration::ZERO);
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);

    let options = QueryOptions::new().on_success(move |user: &User| {
        assert_eq!(user.id, 1);
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let _ = client
        .query(&query_key!["user", 1], || async { Ok(alice()) }, options)
        .await
        .unwrap();

    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_on_success_not_called_on_hit() {
    let client = client_with(connected_memory().await, Duration::from_secs(60));
    let key = query_key!["user", 1];
    client.set_query_data(&key, &alice()).await.unwrap();
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);

    let options = QueryOptions::new().on_success(move |_: &User| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let _ = client.query(&key, || async { Ok(alice()) }, options).await.unwrap();

    assert_eq!(seen.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_equivalent_keys_share_an_entry() {
    let client = client_with(connected_memory().await, Duration::from_secs(60));
    let from_macro = query_key!["user", 1];
    let from_parts = CacheKey::new(vec![json!("user"), json!(1)]);
    let different_type = query_key!["user", "1"];

    client.set_query_data(&from_macro, &alice()).await.unwrap();

    assert_eq!(
        client.get_query_data::<User>(&from_parts).await.unwrap(),
        Some(alice())
    );
    assert_eq!(client.get_query_data::<User>(&different_type).await.unwrap(), None);
}

#[tokio::test]
async fn test_clear_removes_everything() {
    let adapter = connected_memory().await;
    let client = client_with(Arc::clone(&adapter), Duration::ZERO);
    client.set_query_data(&query_key!["a"], &1).await.unwrap();
    client.set_query_data(&query_key!["b"], &2).await.unwrap();

    client.clear().await.unwrap();

    assert!(adapter.keys().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_disconnected_memory_adapter_rejects_queries() {
    let client = client_with(Arc::new(MemoryCacheAdapter::new()), Duration::ZERO);
    let calls = AtomicUsize::new(0);

    let result: invalid8_domain::Result<User> = client
        .query(&query_key!["user", 1], || counted(&calls, alice()), QueryOptions::new())
        .await;

    assert!(result.unwrap_err().is_not_connected());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_redis_adapter_requires_connect() {
    let adapter = Arc::new(RedisCacheAdapter::new(RedisConfig::new("localhost")).unwrap());
    let client = QueryClient::new(adapter.clone(), QueryClientOptions::default());
    let key = query_key!["user", 1];

    let error = client.set_query_data(&key, &alice()).await.unwrap_err();
    assert!(matches!(&error, Error::NotConnected { adapter } if adapter == "redis"));

    adapter.connect().await.unwrap();
    client.set_query_data(&key, &alice()).await.unwrap();
    assert_eq!(client.get_query_data::<User>(&key).await.unwrap(), Some(alice()));

    adapter.disconnect().await.unwrap();
    adapter.connect().await.unwrap();
    assert_eq!(client.get_query_data::<User>(&key).await.unwrap(), None);
}
