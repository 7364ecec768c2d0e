//! Structured logging with tracing
//!
//! Installs the global subscriber described by [`LoggingConfig`]: one stdout
//! layer, an optional daily-rolling file layer, both plain or JSON, filtered
//! by `INVALID8_LOG` when set and by the configured level otherwise.

use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_ENV_VAR};
use invalid8_domain::error::{Error, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, error, info, warn, Level, Subscriber};
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

pub use crate::config::LoggingConfig;

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

/// Install the global subscriber
///
/// Fails if the level is unknown or a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    let stdout = output_layer(config.json_format, std::io::stdout, true);
    let file = config
        .file_output
        .as_deref()
        .map(daily_appender)
        .map(|appender| output_layer(config.json_format, appender, false));

    Registry::default()
        .with(filter)
        .with(stdout)
        .with(file)
        .try_init()
        .map_err(|e| Error::infrastructure(format!("Failed to install log subscriber: {e}")))?;

    info!(%level, json = config.json_format, "Logging initialized");
    Ok(())
}

fn daily_appender(path: &Path) -> RollingFileAppender {
    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    let stem = path
        .file_stem()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_STEM));
    rolling::daily(directory, stem)
}

fn output_layer<S, W>(json: bool, writer: W, ansi: bool) -> BoxedLayer<S>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// Parse a level name, accepting `warning` for `warn`
pub fn parse_log_level(level: &str) -> Result<Level> {
    let name = level.trim();
    let name = if name.eq_ignore_ascii_case("warning") {
        "warn"
    } else {
        name
    };
    match Level::from_str(name) {
        // Level also parses 1..=5, which is not a valid config value
        Ok(parsed) if name.chars().all(char::is_alphabetic) => Ok(parsed),
        _ => Err(Error::configuration(format!(
            "Invalid log level '{level}', expected one of trace, debug, info, warn, error"
        ))),
    }
}

/// Report whether a configuration file was merged
pub fn log_config_loaded(config_path: &Path, found: bool) {
    if found {
        info!(path = %config_path.display(), "Configuration file merged");
    } else {
        warn!(path = %config_path.display(), "Configuration file not found, using defaults");
    }
}

/// Report the outcome of one backend probe
pub fn log_health_check(component: &str, healthy: bool, details: Option<&str>) {
    match (healthy, details) {
        (true, _) => debug!(component, "Backend probe passed"),
        (false, details) => error!(
            component,
            details = details.unwrap_or("no details"),
            "Backend probe failed"
        ),
    }
}
