//! # Infrastructure Layer
//!
//! Cross-cutting concerns for Invalid8:
//!
//! - [`config`]: figment-based configuration (defaults, TOML file, environment)
//! - [`logging`]: tracing subscriber setup
//! - [`factory`]: building adapters and event buses from configuration
//! - [`health`]: round-trip probes for connected backends
//! - [`error_ext`]: context helpers for converting foreign errors
//!
//! ## Dependencies
//!
//! Depends on `invalid8-domain` for errors and ports, `invalid8-application`
//! for query client options, and `invalid8-providers` for the concrete
//! backends.

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod factory;
pub mod health;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
