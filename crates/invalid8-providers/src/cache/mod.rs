//! Cache Adapter Implementations
//!
//! ## Available Adapters
//!
//! | Adapter | Type | Description |
//! |---------|------|-------------|
//! | [`MemoryCacheAdapter`] | Local | In-process map with lazy TTL expiry |
//! | `RedisCacheAdapter` | Placeholder | Lifecycle-enforcing stand-in for Redis |
//!
//! ## Adapter Selection Guide
//!
//! - **Development/Testing**: `MemoryCacheAdapter`
//! - **Redis**: `RedisCacheAdapter` performs no network I/O yet; it only
//!   demonstrates that the query client is backend-agnostic

pub mod memory;
#[cfg(feature = "cache-redis")]
pub mod redis;

pub use memory::MemoryCacheAdapter;
#[cfg(feature = "cache-redis")]
pub use redis::RedisCacheAdapter;

// Re-export domain types used by cache adapters
pub use invalid8_domain::ports::CacheAdapter;
pub use invalid8_domain::value_objects::{CacheEntry, CacheStatus, RedisConfig};
