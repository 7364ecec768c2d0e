//! Connection lifecycle shared by every adapter

use invalid8_domain::error::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};

/// Connected/disconnected flag plus the adapter name used in errors
///
/// Adapters start disconnected.
#[derive(Debug)]
pub struct ConnectionState {
    name: &'static str,
    connected: AtomicBool,
}

impl ConnectionState {
    /// Create a disconnected state for the named adapter
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            connected: AtomicBool::new(false),
        }
    }

    /// Adapter name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the adapter is connected
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    /// Set the connected flag
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::Release);
    }

    /// Fail with [`Error::NotConnected`] unless connected
    pub fn ensure_connected(&self) -> Result<()> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(Error::not_connected(self.name))
        }
    }
}
