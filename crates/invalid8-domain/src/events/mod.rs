//! Events
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Event`] | Unit carried by an event bus |
//! | [`EventHandler`] | Async subscriber callback |
//! | [`SubscriptionId`] | Handle used to unsubscribe |

/// Event model and handler types
pub mod event;

pub use event::{
    event_handler, generate_event_id, Event, EventHandler, EventMetadata, EventPriority,
    EventStatus, SubscriptionId,
};
