//! Ports
//!
//! Capability interfaces implemented by `invalid8-providers`.

/// Cache adapter port
pub mod cache;
/// Event bus port
pub mod events;

pub use cache::CacheAdapter;
pub use events::EventBus;
