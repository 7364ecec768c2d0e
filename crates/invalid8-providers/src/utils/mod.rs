//! Shared utilities for adapter implementations

/// Connection lifecycle flag
pub mod connection;

pub use connection::ConnectionState;
