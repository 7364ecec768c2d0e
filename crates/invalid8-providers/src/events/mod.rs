//! Event Bus Implementations
//!
//! ## Available Buses
//!
//! | Bus | Type | Description |
//! |-----|------|-------------|
//! | [`MemoryEventBus`] | In-Process | Concurrent fan-out to subscribed handlers |
//! | `KafkaEventBus` | Placeholder | Lifecycle-enforcing stand-in for Kafka |
//! | `RabbitMqEventBus` | Placeholder | Lifecycle-enforcing stand-in for RabbitMQ |
//!
//! [`EventEmitter`] is a synchronous listener table for local notifications
//! that do not need a bus.

pub mod emitter;
#[cfg(feature = "events-kafka")]
pub mod kafka;
pub mod memory;
#[cfg(feature = "events-rabbitmq")]
pub mod rabbitmq;
pub mod registry;

pub use emitter::{EventEmitter, Listener};
#[cfg(feature = "events-kafka")]
pub use kafka::KafkaEventBus;
pub use memory::MemoryEventBus;
#[cfg(feature = "events-rabbitmq")]
pub use rabbitmq::RabbitMqEventBus;
pub use registry::SubscriptionRegistry;

// Re-export port trait and event types
pub use invalid8_domain::events::{event_handler, Event, EventHandler, SubscriptionId};
pub use invalid8_domain::ports::EventBus;
