//! In-flight fetch registry
//!
//! Coalesces concurrent cache misses for the same key: the first caller
//! becomes the leader and fetches, later callers subscribe to the leader's
//! outcome. A leader that fails (or is dropped) closes the channel without a
//! value, and subscribers fall back to fetching on their own.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;

type Pending = DashMap<String, (u64, broadcast::Sender<Value>)>;

/// Outcome of registering interest in a key
pub enum CoalesceResult {
    /// Another caller is already fetching; wait on this receiver
    Coalesced(broadcast::Receiver<Value>),
    /// The caller is the leader and must fetch, then complete the guard
    NewRequest(InFlightGuard),
}

/// Registry of keys with a fetch in progress
#[derive(Clone, Default)]
pub struct InFlightRegistry {
    pending: Arc<Pending>,
    generation: Arc<AtomicU64>,
}

impl InFlightRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fetch for `key`, or join the one already running
    pub fn register(&self, key: &str) -> CoalesceResult {
        match self.pending.entry(key.to_string()) {
            Entry::Occupied(entry) => CoalesceResult::Coalesced(entry.get().1.subscribe()),
            Entry::Vacant(entry) => {
                let generation = self.generation.fetch_add(1, Ordering::Relaxed);
                let (sender, _) = broadcast::channel(1);
                entry.insert((generation, sender.clone()));
                CoalesceResult::NewRequest(InFlightGuard {
                    key: key.to_string(),
                    generation,
                    sender: Some(sender),
                    pending: Arc::clone(&self.pending),
                })
            }
        }
    }

    /// Number of keys currently being fetched
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no fetch is in progress
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl std::fmt::Debug for InFlightRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InFlightRegistry")
            .field("pending", &self.pending.len())
            .finish()
    }
}

/// Leadership over one in-flight key
///
/// Dropping the guard without calling [`complete`](Self::complete) releases
/// the key and wakes waiters with no value.
pub struct InFlightGuard {
    key: String,
    generation: u64,
    sender: Option<broadcast::Sender<Value>>,
    pending: Arc<Pending>,
}

impl InFlightGuard {
    /// Release the key and hand `value` to every waiter
    pub fn complete(mut self, value: Value) {
        self.release();
        if let Some(sender) = self.sender.take() {
            // No receivers is fine: nobody coalesced onto this fetch
            let _ = sender.send(value);
        }
    }

    fn release(&self) {
        let generation = self.generation;
        self.pending
            .remove_if(&self.key, |_, (stored, _)| *stored == generation);
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if self.sender.is_some() {
            self.release();
        }
    }
}
