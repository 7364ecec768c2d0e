//! # Invalid8 - Adapter Implementations
//!
//! Every backend implements a port defined in `invalid8-domain`.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Cache | `CacheAdapter` | Memory, Redis (placeholder) |
//! | Events | `EventBus` | Memory, Kafka (placeholder), RabbitMQ (placeholder) |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! invalid8-providers = { version = "0.1", default-features = false, features = ["cache-redis"] }
//! ```
//!
//! The in-memory cache adapter and event bus are always available.

// Re-export domain types commonly used with adapters
pub use invalid8_domain::error::{Error, Result};
pub use invalid8_domain::ports::{CacheAdapter, EventBus};

/// Shared utilities for adapter implementations
pub mod utils;

/// Cache adapter implementations
///
/// Implements `CacheAdapter` for caching backends.
pub mod cache;

/// Event bus implementations
///
/// Implements `EventBus` for transport backends.
pub mod events;
