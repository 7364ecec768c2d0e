//! Value objects
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CacheKey`] | Structured query key |
//! | [`CacheEntry`] | Unit stored by cache adapters |
//! | [`QueryOptions`] | Per-call query settings |
//! | [`InvalidationOptions`] | Per-call invalidation settings |
//! | [`RedisConfig`] | Backend connection settings |

/// Cache key and entry types
pub mod cache;
/// Backend connection settings
pub mod config;
/// Query and invalidation options
pub mod query;

pub use cache::{CacheEntry, CacheKey, CacheMetadata, CacheStatus};
pub use config::{KafkaConfig, RabbitMqConfig, RedisConfig};
pub use query::{
    ErrorCallback, InvalidationOptions, InvalidationType, QueryOptions, Retry, SuccessCallback,
};
