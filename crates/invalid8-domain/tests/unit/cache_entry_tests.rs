//! Cache keys, entries and query options

use chrono::{TimeDelta, Utc};
use invalid8_domain::query_key;
use invalid8_domain::value_objects::{
    CacheEntry, CacheKey, CacheStatus, InvalidationOptions, InvalidationType, QueryOptions, Retry,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Filter {
    active: bool,
    page: u32,
}

#[test]
fn test_from_parts_serializes_structs() {
    let filter = serde_json::to_value(Filter { active: true, page: 2 }).unwrap();
    let key = CacheKey::from_parts([json!("users"), filter]).unwrap();

    assert_eq!(key.to_cache_key(), r#"["users",{"active":true,"page":2}]"#);
}

#[test]
fn test_same_parts_same_key() {
    assert_eq!(
        query_key!["todos", json!({"done": false})].to_cache_key(),
        query_key!["todos", json!({"done": false})].to_cache_key()
    );
    assert_ne!(
        query_key!["todos", serde_json::Value::Null].to_cache_key(),
        query_key!["todos"].to_cache_key()
    );
}

#[test]
fn test_success_entry_expires_after_cache_time() {
    let now = Utc::now();
    let entry = CacheEntry::success("k", &Filter { active: false, page: 1 }, now, Duration::from_secs(30))
        .unwrap();

    assert_eq!(entry.status, CacheStatus::Success);
    assert_eq!(entry.timestamp, now);
    assert_eq!(entry.expires_at, Some(now + TimeDelta::seconds(30)));
    assert_eq!(entry.decode::<Filter>().unwrap(), Filter { active: false, page: 1 });
}

#[test]
fn test_huge_cache_time_saturates() {
    let now = Utc::now();
    let entry = CacheEntry::success("k", &1, now, Duration::MAX).unwrap();

    assert!(entry.expires_at.unwrap() > now);
    assert!(!entry.is_expired_at(now));
}

#[test]
fn test_freshness_is_independent_of_expiry() {
    let now = Utc::now();
    let entry = CacheEntry::new("k", json!(1))
        .with_timestamp(now - TimeDelta::seconds(10))
        .with_expires_at(now - TimeDelta::seconds(1));

    assert!(entry.is_expired_at(now));
    assert!(entry.is_fresh_at(now, Duration::from_secs(60)));
    assert!(!entry.is_fresh_at(now, Duration::from_secs(5)));
}

#[test]
fn test_entry_wire_format() {
    let now = Utc::now();
    let entry = CacheEntry::success(r#"["user",1]"#, &json!({"id": 1}), now, Duration::from_secs(1))
        .unwrap();

    let wire = serde_json::to_value(&entry).unwrap();
    assert_eq!(wire["status"], "success");
    assert_eq!(wire["key"], r#"["user",1]"#);
    assert_eq!(wire["data"], json!({"id": 1}));
    assert!(wire["metadata"].is_null());
}

#[test]
fn test_query_options_builders() {
    let options = QueryOptions::<u32>::new()
        .with_cache_time(Duration::from_secs(10))
        .with_stale_time(Duration::from_secs(1))
        .with_retry(Retry::Attempts(3))
        .with_retry_delay(Duration::from_millis(100))
        .on_success(|_| {});

    assert_eq!(options.cache_time, Some(Duration::from_secs(10)));
    assert_eq!(options.stale_time, Some(Duration::from_secs(1)));
    assert_eq!(options.retry, Some(Retry::Attempts(3)));
    assert!(options.on_success.is_some());
    assert!(options.on_error.is_none());
    assert!(format!("{options:?}").contains("on_success: true"));
}

#[test]
fn test_retry_accepts_bool_or_count() {
    assert_eq!(serde_json::from_str::<Retry>("true").unwrap(), Retry::Enabled(true));
    assert_eq!(serde_json::from_str::<Retry>("5").unwrap(), Retry::Attempts(5));
}

#[test]
fn test_invalidation_options_wire_format() {
    let options: InvalidationOptions =
        serde_json::from_value(json!({"type": "event", "broadcast": true})).unwrap();

    assert_eq!(options.kind, Some(InvalidationType::Event));
    assert_eq!(options.broadcast, Some(true));
    assert_eq!(
        serde_json::from_value::<InvalidationOptions>(json!({})).unwrap(),
        InvalidationOptions::default()
    );
}
