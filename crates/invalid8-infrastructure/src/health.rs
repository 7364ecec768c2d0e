//! Adapter health probes
//!
//! Round-trip checks run against connected backends. The cache probe runs a
//! query through a [`QueryClient`], reads the stored value back and
//! invalidates it; the event bus probe subscribes, publishes and unsubscribes.

use crate::constants::PROBE_KEY_PART;
use crate::error_ext::ErrorContext;
use crate::logging::log_health_check;
use invalid8_application::use_cases::{QueryClient, QueryClientOptions};
use invalid8_domain::error::{Error, Result};
use invalid8_domain::events::{event_handler, Event};
use invalid8_domain::ports::{CacheAdapter, EventBus};
use invalid8_domain::value_objects::{CacheKey, InvalidationOptions, QueryOptions};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Probe succeeded
    Up,
    /// Probe failed
    Down,
}

/// Result of probing one component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Component name
    pub name: String,
    /// Outcome
    pub status: HealthStatus,
    /// Probe duration in milliseconds
    pub response_time_ms: u64,
    /// Failure description
    pub error: Option<String>,
}

impl HealthCheck {
    fn from_outcome(name: &str, started: Instant, outcome: Result<()>) -> Self {
        let response_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let error = outcome.err().map(|e| e.to_string());
        log_health_check(name, error.is_none(), error.as_deref());
        Self {
            name: name.to_string(),
            status: if error.is_none() {
                HealthStatus::Up
            } else {
                HealthStatus::Down
            },
            response_time_ms,
            error,
        }
    }

    /// Whether the probe succeeded
    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Up
    }
}

/// Probe a connected cache adapter
pub async fn check_cache_adapter(adapter: &Arc<dyn CacheAdapter>) -> HealthCheck {
    let started = Instant::now();
    let outcome = probe_cache(adapter).await;
    HealthCheck::from_outcome(adapter.adapter_name(), started, outcome)
}

/// Probe a connected event bus
pub async fn check_event_bus(bus: &dyn EventBus) -> HealthCheck {
    let started = Instant::now();
    let outcome = probe_event_bus(bus).await;
    HealthCheck::from_outcome(bus.adapter_name(), started, outcome)
}

#[derive(Serialize)]
struct ProbeMarker {
    probe: bool,
}

async fn probe_cache(adapter: &Arc<dyn CacheAdapter>) -> Result<()> {
    let client = QueryClient::new(Arc::clone(adapter), QueryClientOptions::default());
    let key = CacheKey::new(vec![json!(PROBE_KEY_PART)]);

    let fetched: Value = client
        .query(
            &key,
            || async {
                serde_json::to_value(ProbeMarker { probe: true })
                    .fetch_context("Failed to encode probe marker")
            },
            QueryOptions::new(),
        )
        .await?;
    let read_back = client.get_query_data::<Value>(&key).await;
    client.invalidate(&key, InvalidationOptions::default()).await?;

    match read_back? {
        Some(stored) if stored == fetched => Ok(()),
        Some(_) => Err(Error::infrastructure("Probe entry came back altered")),
        None => Err(Error::infrastructure("Probe entry was not stored")),
    }
}

async fn probe_event_bus(bus: &dyn EventBus) -> Result<()> {
    let event_type = "invalid8.probe";
    let id = bus
        .subscribe(event_type, event_handler(|_event| async { Ok(()) }))
        .await?;
    let published = bus.publish(Event::new(event_type, json!(null))).await;
    bus.unsubscribe(event_type, &id).await?;
    published
}
