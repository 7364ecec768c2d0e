//! Application Layer - Invalid8
//!
//! Orchestrates cache adapters into the query workflow: serve fresh cached
//! data, otherwise fetch, store and return.
//!
//! ## Use Cases
//!
//! - [`QueryClient`](use_cases::QueryClient): cache-aside queries, manual
//!   writes and reads, invalidation
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `invalid8-domain`: for the adapter port, cache entries and options
//! - Pure Rust libraries for async, serialization, etc.

pub mod in_flight;
pub mod use_cases;

pub use use_cases::*;
