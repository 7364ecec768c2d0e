//! Kafka and RabbitMQ placeholder bus tests

use invalid8_domain::value_objects::{KafkaConfig, RabbitMqConfig};
use invalid8_providers::events::{
    event_handler, Event, EventBus, KafkaEventBus, RabbitMqEventBus,
};
use serde_json::json;

fn noop() -> invalid8_providers::events::EventHandler {
    event_handler(|_event| async { Ok(()) })
}

async fn exercise_lifecycle(bus: &dyn EventBus, name: &str) {
    assert_eq!(bus.adapter_name(), name);
    assert!(!bus.is_connected());
    assert!(bus
        .publish(Event::new("a", json!(1)))
        .await
        .unwrap_err()
        .is_not_connected());
    assert!(bus.subscribe("a", noop()).await.unwrap_err().is_not_connected());

    bus.connect().await.unwrap();
    assert!(bus.is_connected());
    let id = bus.subscribe("a", noop()).await.unwrap();
    bus.publish(Event::new("a", json!(1))).await.unwrap();
    bus.unsubscribe("a", &id).await.unwrap();

    bus.disconnect().await.unwrap();
    assert!(!bus.is_connected());
}

#[tokio::test]
async fn test_kafka_lifecycle() {
    let bus = KafkaEventBus::new(KafkaConfig::new(["localhost:9092"]));
    exercise_lifecycle(&bus, "kafka").await;
    assert_eq!(bus.config().brokers, vec!["localhost:9092".to_string()]);
}

#[tokio::test]
async fn test_rabbitmq_lifecycle() {
    let bus = RabbitMqEventBus::new(RabbitMqConfig::new("amqp://localhost:5672"));
    exercise_lifecycle(&bus, "rabbitmq").await;
    assert_eq!(bus.config().url, "amqp://localhost:5672");
}

#[tokio::test]
async fn test_disconnect_forgets_subscriptions() {
    let bus = KafkaEventBus::new(KafkaConfig::new(["localhost:9092"]));
    bus.connect().await.unwrap();
    bus.subscribe("a", noop()).await.unwrap();
    assert_eq!(bus.subscriber_count("a"), 1);

    bus.disconnect().await.unwrap();
    assert_eq!(bus.subscriber_count("a"), 0);
}
