//! Error context helpers
//!
//! Folds foreign errors (I/O, TOML, serde, a fetcher's HTTP client) into the
//! domain [`Error`], keeping the original as the source.
//!
//! | Method | Produces |
//! |--------|----------|
//! | `fetch_context` | [`Error::Fetch`], for fetchers passed to `query` |
//! | `config_context` | [`Error::Configuration`] |
//! | `context` | [`Error::Infrastructure`] |

use invalid8_domain::error::{Error, Result};
use std::fmt;

/// Domain error a foreign error is folded into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    /// The fetcher of a query failed
    Fetch,
    /// Loading or rendering settings failed
    Configuration,
    /// Any other I/O or wiring failure
    Infrastructure,
}

/// Extension trait attaching a message and a [`ContextKind`] to foreign errors
///
/// # Example
///
/// ```
/// use invalid8_infrastructure::error_ext::ErrorContext;
///
/// async fn load_count(raw: &str) -> invalid8_domain::Result<u32> {
///     raw.parse::<u32>().fetch_context("Count endpoint returned garbage")
/// }
/// ```
pub trait ErrorContext<T>: Sized {
    /// Wrap the error as `kind`, prefixing its message with `context`
    fn context_as<C: fmt::Display>(self, kind: ContextKind, context: C) -> Result<T>;

    /// Wrap as an infrastructure error
    fn context<C: fmt::Display>(self, context: C) -> Result<T> {
        self.context_as(ContextKind::Infrastructure, context)
    }

    /// Wrap as a configuration error
    fn config_context<C: fmt::Display>(self, context: C) -> Result<T> {
        self.context_as(ContextKind::Configuration, context)
    }

    /// Wrap as a fetch error, the kind `query` hands to `on_error`
    fn fetch_context<C: fmt::Display>(self, context: C) -> Result<T> {
        self.context_as(ContextKind::Fetch, context)
    }
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context_as<C: fmt::Display>(self, kind: ContextKind, context: C) -> Result<T> {
        self.map_err(|source| {
            let message = format!("{context}: {source}");
            match kind {
                ContextKind::Fetch => Error::fetch_with_source(message, source),
                ContextKind::Configuration => Error::configuration_with_source(message, source),
                ContextKind::Infrastructure => Error::infrastructure_with_source(message, source),
            }
        })
    }
}
