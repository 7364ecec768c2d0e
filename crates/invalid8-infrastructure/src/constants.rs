//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain defaults are defined in `invalid8_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "invalid8.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "invalid8";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "INVALID8";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_ENV_VAR: &str = "INVALID8_LOG";

/// File name used when the configured log path has no stem
pub const DEFAULT_LOG_FILE_STEM: &str = "invalid8";

// ============================================================================
// EVENT BUS CONSTANTS
// ============================================================================

/// Default Kafka bootstrap broker
pub const DEFAULT_KAFKA_BROKER: &str = "localhost:9092";

/// Default RabbitMQ url
pub const DEFAULT_RABBITMQ_URL: &str = "amqp://localhost:5672";

// ============================================================================
// HEALTH CHECK CONSTANTS
// ============================================================================

/// Single query-key part of the entry written by the cache probe
pub const PROBE_KEY_PART: &str = "__invalid8_probe__";
