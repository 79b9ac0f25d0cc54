//! Logging setup using tracing + tracing-subscriber
//!
//! Logs go to stderr so they never interleave with report output on stdout.
//! `RUST_LOG` overrides the configured level.

use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{Result, SyscontrolError};

/// Install the global subscriber
pub fn init(settings: &LoggingConfig, verbose: u8, quiet: bool) -> Result<()> {
    let level = determine_level(settings, verbose, quiet);
    let filter = build_env_filter(level)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| SyscontrolError::Config(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(level = %level, "Logging initialized");
    Ok(())
}

/// Effective level from settings and CLI flags
fn determine_level(settings: &LoggingConfig, verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => parse_level(&settings.level),
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

fn build_env_filter(level: Level) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directive = format!("syscontrol={}", level)
        .to_lowercase()
        .parse::<Directive>()
        .map_err(|e| SyscontrolError::Config(format!("Invalid log directive: {}", e)))?;
    Ok(EnvFilter::new(Level::WARN.to_string().to_lowercase()).add_directive(directive))
}
