//! In-memory event bus
//!
//! Delivers each published event to every handler subscribed to its type.
//! Handlers run concurrently; a failing or panicking handler is logged and
//! does not affect the others or the publisher.
//!
//! ## Example
//!
//! ```ignore
//! use invalid8_providers::events::MemoryEventBus;
//!
//! let bus = MemoryEventBus::new();
//! bus.connect().await?;
//! let id = bus.subscribe("user.created", handler).await?;
//! bus.publish(Event::new("user.created", json!({"id": 1}))).await?;
//! ```

use super::registry::SubscriptionRegistry;
use crate::utils::ConnectionState;
use async_trait::async_trait;
use futures::future::join_all;
use futures::FutureExt;
use invalid8_domain::constants::MEMORY_ADAPTER_NAME;
use invalid8_domain::error::Result;
use invalid8_domain::events::{Event, EventHandler, SubscriptionId};
use invalid8_domain::ports::EventBus;
use std::panic::AssertUnwindSafe;
use tracing::{debug, error};

/// In-process event bus
#[derive(Debug)]
pub struct MemoryEventBus {
    registry: SubscriptionRegistry,
    state: ConnectionState,
}

impl MemoryEventBus {
    /// Create a new, disconnected bus
    pub fn new() -> Self {
        Self {
            registry: SubscriptionRegistry::new(),
            state: ConnectionState::new(MEMORY_ADAPTER_NAME),
        }
    }

    /// Number of handlers subscribed to `event_type`
    pub fn subscriber_count(&self, event_type: &str) -> usize {
        self.registry.subscriber_count(event_type)
    }
}

impl Default for MemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Run every handler against `event` concurrently, isolating failures
async fn dispatch(event: &Event, handlers: Vec<(SubscriptionId, EventHandler)>) {
    let deliveries = handlers.into_iter().map(|(id, handler)| {
        let event = event.clone();
        let event_type = event.event_type.clone();
        async move {
            let outcome = AssertUnwindSafe(async move { handler(event).await })
                .catch_unwind()
                .await;
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    error!(
                        event_type = %event_type,
                        subscription = %id,
                        "Error handling event: {}",
                        e
                    );
                }
                Err(_) => {
                    error!(
                        event_type = %event_type,
                        subscription = %id,
                        "Event handler panicked"
                    );
                }
            }
        }
    });
    join_all(deliveries).await;
}

#[async_trait]
impl EventBus for MemoryEventBus {
    async fn publish(&self, event: Event) -> Result<()> {
        self.state.ensure_connected()?;

        let handlers = self.registry.handlers_for(&event.event_type);
        if handlers.is_empty() {
            debug!(event_type = %event.event_type, "Published event but no subscribers");
            return Ok(());
        }

        debug!(
            event_type = %event.event_type,
            subscribers = handlers.len(),
            "Publishing event"
        );
        dispatch(&event, handlers).await;
        Ok(())
    }

    async fn subscribe(&self, event_type: &str, handler: EventHandler) -> Result<SubscriptionId> {
        self.state.ensure_connected()?;
        let id = self.registry.insert(event_type, handler);
        debug!(event_type = event_type, subscription = %id, "Created subscription");
        Ok(id)
    }

    async fn unsubscribe(&self, event_type: &str, id: &SubscriptionId) -> Result<()> {
        self.state.ensure_connected()?;
        self.registry.remove(event_type, id);
        Ok(())
    }

    async fn connect(&self) -> Result<()> {
        self.state.set_connected(true);
        Ok(())
    }

    async fn disconnect(&self) -> Result<()> {
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
