//! Invalid8 - Command line entry point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `invalid8 config` | Print the effective configuration as TOML |
//! | `invalid8 adapters` | List available cache adapters and event buses |
//! | `invalid8 check` | Connect the configured backends and run a round-trip probe |

use clap::{Parser, Subcommand};
use invalid8::infrastructure::config::loader::to_toml_string;
use invalid8::infrastructure::config::{AppConfig, ConfigLoader};
use invalid8::infrastructure::factory::{list_cache_adapters, list_event_buses};
use invalid8::infrastructure::logging::init_logging;
use invalid8::{run_health_checks, Error};
use std::path::PathBuf;
use tracing::info;

/// Command line interface for Invalid8
#[derive(Parser, Debug)]
#[command(name = "invalid8")]
#[command(about = "Invalid8 - Query cache configuration and diagnostics")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the effective configuration as TOML
    Config,
    /// List available cache adapters and event buses
    Adapters,
    /// Connect the configured backends and probe them
    Check,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;

    match cli.command {
        Command::Config => print!("{}", to_toml_string(&config)?),
        Command::Adapters => print_adapters(&config),
        Command::Check => {
            init_logging(&config.logging)?;
            check(&config).await?;
        }
    }
    Ok(())
}

fn print_adapters(config: &AppConfig) {
    println!("Cache adapters:");
    for name in list_cache_adapters() {
        let marker = if name == config.cache.adapter.as_str() { "*" } else { " " };
        println!("  {marker} {name}");
    }
    println!("Event buses:");
    for name in list_event_buses() {
        let marker = if name == config.events.provider.as_str() { "*" } else { " " };
        println!("  {marker} {name}");
    }
}

async fn check(config: &AppConfig) -> Result<(), Error> {
    info!(
        adapter = %config.cache.adapter,
        event_bus = %config.events.provider,
        "Checking configured backends"
    );

    let checks = run_health_checks(config).await?;
    for check in &checks {
        match &check.error {
            None => println!("{:<10} ok ({} ms)", check.name, check.response_time_ms),
            Some(error) => println!("{:<10} FAILED: {}", check.name, error),
        }
    }

    if checks.iter().all(|check| check.is_healthy()) {
        Ok(())
    } else {
        Err(Error::infrastructure("One or more backends failed the health check"))
    }
}
