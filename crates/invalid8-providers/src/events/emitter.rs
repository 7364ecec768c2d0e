//! Local synchronous event emitter
//!
//! A lightweight listener table for in-process notifications that do not need
//! a bus: `emit` builds an [`Event`] and calls every listener of its type in
//! registration order on the caller's thread.

use dashmap::DashMap;
use invalid8_domain::events::{Event, SubscriptionId};
use serde_json::Value;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tracing::error;

/// Synchronous listener callback
pub type Listener = Arc<dyn Fn(&Event) + Send + Sync>;

#[derive(Clone)]
struct Registration {
    id: SubscriptionId,
    listener: Listener,
    once: bool,
}

/// Local event emitter
#[derive(Default)]
pub struct EventEmitter {
    listeners: DashMap<String, Vec<Registration>>,
}

impl EventEmitter {
    /// Create an emitter with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit an event of `event_type` carrying `data`
    ///
    /// A panicking listener is logged and the remaining listeners still run.
    /// Listeners added during the emit wait for the next one; listeners
    /// removed by an earlier listener are skipped.
    ///
    /// # Returns
    /// The number of listeners invoked
    pub fn emit(&self, event_type: &str, data: Value) -> usize {
        // Snapshot so listeners may call on/off without deadlocking
        let registrations = match self.listeners.get(event_type) {
            Some(registrations) => registrations.value().clone(),
            None => return 0,
        };
        let event = Event::new(event_type, data);

        let mut invoked = 0;
        for registration in &registrations {
            if !self.is_registered(event_type, &registration.id) {
                continue;
            }
            if registration.once {
                self.off(event_type, &registration.id);
            }
            let listener = &registration.listener;
            if catch_unwind(AssertUnwindSafe(|| listener(&event))).is_err() {
                error!(event_type = event_type, "Error in event handler");
            }
            invoked += 1;
        }
        invoked
    }

    /// Add a listener for `event_type`
    pub fn on<F>(&self, event_type: &str, listener: F) -> SubscriptionId
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.register(event_type, Arc::new(listener), false)
    }

    /// Add a listener that is removed after its first call
    pub fn once<F>(&self, event_type: &str, listener: F) -> SubscriptionId
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.register(event_type, Arc::new(listener), true)
    }

    /// Remove listener `id` from `event_type`
    pub fn off(&self, event_type: &str, id: &SubscriptionId) {
        if let Some(mut registrations) = self.listeners.get_mut(event_type) {
            registrations.retain(|registration| &registration.id != id);
        }
        self.listeners
            .remove_if(event_type, |_, registrations| registrations.is_empty());
    }

    /// Remove every listener of `event_type`, or of all types when `None`
    pub fn remove_all_listeners(&self, event_type: Option<&str>) {
        match event_type {
            Some(event_type) => {
                self.listeners.remove(event_type);
            }
            None => self.listeners.clear(),
        }
    }

    /// Number of listeners registered for `event_type`
    pub fn listener_count(&self, event_type: &str) -> usize {
        self.listeners
            .get(event_type)
            .map(|registrations| registrations.len())
            .unwrap_or(0)
    }

    fn is_registered(&self, event_type: &str, id: &SubscriptionId) -> bool {
        self.listeners
            .get(event_type)
            .is_some_and(|registrations| registrations.iter().any(|r| &r.id == id))
    }

    fn register(&self, event_type: &str, listener: Listener, once: bool) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.listeners
            .entry(event_type.to_string())
            .or_default()
            .push(Registration {
                id: id.clone(),
                listener,
                once,
            });
        id
    }
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("event_types", &self.listeners.len())
            .finish()
    }
}
