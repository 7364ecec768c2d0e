//! RabbitMQ event bus (placeholder)
//!
//! Enforces the connection lifecycle and records subscriptions, but never
//! talks to an AMQP server: published events are not delivered anywhere.
//!
//! ## Example
//!
//! ```ignore
//! use invalid8_domain::value_objects::RabbitMqConfig;
//! use invalid8_providers::events::RabbitMqEventBus;
//!
//! let bus = RabbitMqEventBus::new(RabbitMqConfig::new("amqp://localhost:5672"));
//! bus.connect().await?;
//! ```

use super::registry::SubscriptionRegistry;
use crate::utils::ConnectionState;
use async_trait::async_trait;
use invalid8_domain::constants::RABBITMQ_ADAPTER_NAME;
use invalid8_domain::error::Result;
use invalid8_domain::events::{Event, EventHandler, SubscriptionId};
use invalid8_domain::ports::EventBus;
use invalid8_domain::value_objects::RabbitMqConfig;
use tracing::warn;

/// RabbitMQ event bus
#[derive(Debug)]
pub struct RabbitMqEventBus {
    config: RabbitMqConfig,
    registry: SubscriptionRegistry,
    state: ConnectionState,
}

impl RabbitMqEventBus {
    /// Create a new, disconnected bus
    pub fn new(config: RabbitMqConfig) -> Self {
        Self {
            config,
            registry: SubscriptionRegistry::new(),
            state: ConnectionState::new(RABBITMQ_ADAPTER_NAME),
        }
    }

    /// Connection settings this bus was built with
    pub fn config(&self) -> &RabbitMqConfig {
        &self.config
    }

    /// Number of handlers recorded for `event_type`
    pub fn subscriber_count(&self, event_type: &str) -> usize {
        self.registry.subscriber_count(event_type)
    }
}

#[async_trait]
impl EventBus for RabbitMqEventBus {
    async fn publish(&self, event: Event) -> Result<()> {
        self.state.ensure_connected()?;
        warn!(
            event_type = %event.event_type,
            "RabbitMQ adapter: publish() is not fully implemented"
        );
        Ok(())
    }

    async fn subscribe(&self, event_type: &str, handler: EventHandler) -> Result<SubscriptionId> {
        self.state.ensure_connected()?;
        let id = self.registry.insert(event_type, handler);
        warn!(
            event_type = event_type,
            "RabbitMQ adapter: subscribe() is not fully implemented"
        );
        Ok(id)
    }

    async fn unsubscribe(&self, event_type: &str, id: &SubscriptionId) -> Result<()> {
        self.registry.remove(event_type, id);
        warn!(
            event_type = event_type,
            "RabbitMQ adapter: unsubscribe() is not fully implemented"
        );
        Ok(())
    }

    async fn connect(&self) -> Result<()> {
        warn!(
            url = %self.config.url,
            "RabbitMQ adapter: connect() is not fully implemented"
        );
        self.state.set_connected(true);
        Ok(())
    }

    async fn disconnect(&self) -> Result<()> {
        warn!("RabbitMQ adapter: disconnect() is not fully implemented");
        self.registry.clear();
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
