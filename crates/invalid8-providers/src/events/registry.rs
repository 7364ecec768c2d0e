//! Subscription bookkeeping shared by the event buses
//!
//! Maps an event type to the handlers subscribed to it. Each bus owns its own
//! registry; there is no process-wide handler table.

use dashmap::DashMap;
use invalid8_domain::events::{EventHandler, SubscriptionId};

/// Event type to subscriptions map
#[derive(Default)]
pub struct SubscriptionRegistry {
    handlers: DashMap<String, Vec<(SubscriptionId, EventHandler)>>,
}

impl SubscriptionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `event_type` and return its id
    pub fn insert(&self, event_type: &str, handler: EventHandler) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.handlers
            .entry(event_type.to_string())
            .or_default()
            .push((id.clone(), handler));
        id
    }

    /// Remove subscription `id`; drops the event type once it has no handlers
    ///
    /// # Returns
    /// True if the subscription existed
    pub fn remove(&self, event_type: &str, id: &SubscriptionId) -> bool {
        let removed = match self.handlers.get_mut(event_type) {
            Some(mut subscriptions) => {
                let before = subscriptions.len();
                subscriptions.retain(|(existing, _)| existing != id);
                before != subscriptions.len()
            }
            None => false,
        };
        self.handlers
            .remove_if(event_type, |_, subscriptions| subscriptions.is_empty());
        removed
    }

    /// Snapshot of the handlers for `event_type`
    pub fn handlers_for(&self, event_type: &str) -> Vec<(SubscriptionId, EventHandler)> {
        self.handlers
            .get(event_type)
            .map(|subscriptions| subscriptions.value().clone())
            .unwrap_or_default()
    }

    /// Number of handlers subscribed to `event_type`
    pub fn subscriber_count(&self, event_type: &str) -> usize {
        self.handlers
            .get(event_type)
            .map(|subscriptions| subscriptions.len())
            .unwrap_or(0)
    }

    /// Event types with at least one handler
    pub fn event_types(&self) -> Vec<String> {
        self.handlers.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Drop every subscription
    pub fn clear(&self) {
        self.handlers.clear();
    }
}

impl std::fmt::Debug for SubscriptionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriptionRegistry")
            .field("event_types", &self.handlers.len())
            .finish()
    }
}
