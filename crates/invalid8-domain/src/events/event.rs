//! Event model and handler types

use crate::constants::{EVENT_ID_PREFIX, EVENT_ID_RANDOM_LEN};
use crate::error::Result;
use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Open metadata map attached to an event
pub type EventMetadata = serde_json::Map<String, Value>;

/// Delivery priority hint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventPriority {
    /// Low priority
    Low,
    /// Normal priority
    #[default]
    Normal,
    /// High priority
    High,
    /// Critical priority
    Critical,
}

/// Delivery status of an event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Not yet published
    #[default]
    Pending,
    /// Handed to the bus
    Published,
    /// Delivered to subscribers
    Delivered,
    /// Delivery failed
    Failed,
}

/// Event carried by an event bus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event id
    pub id: String,
    /// Routing type; subscribers register per type
    #[serde(rename = "type")]
    pub event_type: String,
    /// Payload
    pub data: Value,
    /// Free-form metadata
    pub metadata: Option<EventMetadata>,
    /// Creation instant
    pub timestamp: DateTime<Utc>,
    /// Priority hint
    pub priority: Option<EventPriority>,
    /// Originating component
    pub source: Option<String>,
}

impl Event {
    /// Create an event of `event_type` with a generated id
    pub fn new<S: Into<String>>(event_type: S, data: Value) -> Self {
        Self {
            id: generate_event_id(),
            event_type: event_type.into(),
            data,
            metadata: None,
            timestamp: Utc::now(),
            priority: None,
            source: None,
        }
    }

    /// Attach metadata
    pub fn with_metadata(mut self, metadata: EventMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: EventPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the source
    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Generate an id of the form `evt_<unix millis>_<random>`
pub fn generate_event_id() -> String {
    let random = uuid::Uuid::new_v4().simple().to_string();
    format!(
        "{}_{}_{}",
        EVENT_ID_PREFIX,
        Utc::now().timestamp_millis(),
        &random[..EVENT_ID_RANDOM_LEN]
    )
}

/// Async event handler stored by event buses
pub type EventHandler = Arc<dyn Fn(Event) -> BoxFuture<'static, Result<()>> + Send + Sync>;

/// Wrap an async closure as an [`EventHandler`]
///
/// # Example
///
/// ```
/// use invalid8_domain::events::event_handler;
///
/// let handler = event_handler(|event| async move {
///     println!("got {}", event.event_type);
///     Ok(())
/// });
/// # let _ = handler;
/// ```
pub fn event_handler<F, Fut>(f: F) -> EventHandler
where
    F: Fn(Event) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    Arc::new(move |event| Box::pin(f(event)))
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(String);

impl SubscriptionId {
    /// Generate a new unique subscription id
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Borrow the id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
