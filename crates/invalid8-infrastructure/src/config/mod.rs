//! Configuration
//!
//! Typed configuration for the whole application and the figment loader that
//! assembles it from defaults, a TOML file and environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
