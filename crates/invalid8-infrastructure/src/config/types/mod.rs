//! Configuration types

pub mod app;
pub mod cache;
pub mod event_bus;
pub mod logging;

pub use app::AppConfig;
pub use cache::{CacheAdapterKind, CacheConfig};
pub use event_bus::{EventBusConfig, EventBusKind};
pub use logging::LoggingConfig;
