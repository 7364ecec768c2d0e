//! Event Bus Port
//!
//! Defines the contract for event publish/subscribe backends.
//!
//! ## Usage
//!
//! ```no_run
//! use invalid8_domain::events::{event_handler, Event};
//! use invalid8_domain::ports::EventBus;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! async fn notify(bus: Arc<dyn EventBus>) -> invalid8_domain::Result<()> {
//!     bus.connect().await?;
//!     let id = bus
//!         .subscribe("user.updated", event_handler(|_event| async { Ok(()) }))
//!         .await?;
//!     bus.publish(Event::new("user.updated", json!({"id": 1}))).await?;
//!     bus.unsubscribe("user.updated", &id).await?;
//!     Ok(())
//! }
//! ```

use crate::error::Result;
use crate::events::{Event, EventHandler, SubscriptionId};
use async_trait::async_trait;

/// Event bus interface
///
/// | Method | Purpose |
/// |--------|---------|
/// | `publish` | Deliver an event to every handler of its type |
/// | `subscribe` | Register a handler for a type (returns its id) |
/// | `unsubscribe` | Remove a handler by id |
#[async_trait]
pub trait EventBus: Send + Sync {
    /// Publish an event
    ///
    /// Handler failures are logged by the bus and never returned here.
    async fn publish(&self, event: Event) -> Result<()>;

    /// Subscribe a handler to events of `event_type`
    async fn subscribe(&self, event_type: &str, handler: EventHandler) -> Result<SubscriptionId>;

    /// Remove the subscription `id` from `event_type`
    async fn unsubscribe(&self, event_type: &str, id: &SubscriptionId) -> Result<()>;

    /// Connect to the transport
    async fn connect(&self) -> Result<()>;

    /// Disconnect from the transport, dropping subscriptions
    async fn disconnect(&self) -> Result<()>;

    /// Whether the bus is connected
    fn is_connected(&self) -> bool;

    /// Get the name/identifier of this bus (e.g., "memory", "kafka")
    fn adapter_name(&self) -> &str;
}
