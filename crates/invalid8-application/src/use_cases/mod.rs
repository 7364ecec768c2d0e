//! Use case implementations

pub mod query_client;

pub use query_client::{QueryClient, QueryClientOptions};
