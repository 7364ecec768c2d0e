//! Event model

use invalid8_domain::events::{
    event_handler, generate_event_id, Event, EventPriority, EventStatus, SubscriptionId,
};
use serde_json::json;

#[test]
fn test_generated_ids_are_unique_and_prefixed() {
    let first = generate_event_id();
    let second = generate_event_id();

    assert!(first.starts_with("evt_"));
    assert_ne!(first, second);
    let suffix = first.rsplit('_').next().unwrap();
    assert_eq!(suffix.len(), 9);
}

#[test]
fn test_event_builders() {
    let event = Event::new("user.created", json!({"id": 1}))
        .with_priority(EventPriority::High)
        .with_source("accounts");

    assert_eq!(event.event_type, "user.created");
    assert_eq!(event.priority, Some(EventPriority::High));
    assert_eq!(event.source.as_deref(), Some("accounts"));
}

#[test]
fn test_event_wire_format() {
    let event = Event::new("user.created", json!(null)).with_priority(EventPriority::Critical);
    let wire = serde_json::to_value(&event).unwrap();

    assert_eq!(wire["type"], "user.created");
    assert_eq!(wire["priority"], "critical");
    assert_eq!(serde_json::to_value(EventStatus::default()).unwrap(), "pending");
}

#[test]
fn test_subscription_ids_are_distinct() {
    let first = SubscriptionId::new();
    let second = SubscriptionId::new();

    assert_ne!(first, second);
    assert_eq!(first.to_string(), first.as_str());
}

#[tokio::test]
async fn test_event_handler_runs_closure() {
    let handler = event_handler(|event: Event| async move {
        if event.data == json!("bad") {
            return Err(invalid8_domain::Error::event_bus("rejected"));
        }
        Ok(())
    });

    assert!(handler(Event::new("t", json!("good"))).await.is_ok());
    assert!(handler(Event::new("t", json!("bad"))).await.is_err());
}
