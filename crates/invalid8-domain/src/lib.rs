//! # Invalid8 - Domain Layer
//!
//! Core types and port traits shared by every other crate in the workspace.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`error`] | Error enum and `Result` alias |
//! | [`value_objects`] | Cache keys, entries, query options |
//! | [`events`] | Event model and handler types |
//! | [`ports`] | `CacheAdapter` and `EventBus` traits |
//! | [`constants`] | Shared defaults |

/// Domain constants
pub mod constants;
/// Error handling types
pub mod error;
/// Event model
pub mod events;
/// Port traits
pub mod ports;
/// Value objects
pub mod value_objects;

pub use error::{Error, Result};

#[doc(hidden)]
pub use serde_json as __serde_json;
