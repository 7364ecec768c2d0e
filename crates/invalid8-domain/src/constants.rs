//! Domain layer constants
//!
//! Defaults shared by the query client and the adapters. Infrastructure
//! constants (file names, env prefixes) live in `invalid8_infrastructure`.

// ============================================================================
// QUERY CLIENT DEFAULTS
// ============================================================================

/// Default cache time in milliseconds (5 minutes)
pub const DEFAULT_CACHE_TIME_MS: u64 = 5 * 60 * 1000;

/// Default stale time in milliseconds (always stale)
pub const DEFAULT_STALE_TIME_MS: u64 = 0;

// ============================================================================
// ADAPTER NAMES
// ============================================================================

/// Name reported by the in-memory cache adapter
pub const MEMORY_ADAPTER_NAME: &str = "memory";

/// Name reported by the Redis cache adapter
pub const REDIS_ADAPTER_NAME: &str = "redis";

/// Name reported by the Kafka event bus
pub const KAFKA_ADAPTER_NAME: &str = "kafka";

/// Name reported by the RabbitMQ event bus
pub const RABBITMQ_ADAPTER_NAME: &str = "rabbitmq";

// ============================================================================
// EVENTS
// ============================================================================

/// Prefix of generated event ids
pub const EVENT_ID_PREFIX: &str = "evt";

/// Length of the random suffix of generated event ids
pub const EVENT_ID_RANDOM_LEN: usize = 9;
