//! # Logging Setup
//!
//! Installs the global `tracing` subscriber for the command line tool.
//!
//! Logs go to stderr so stdout carries only JSON output. The filter comes from
//! [`ParserConfig::log_filter`] and accepts any `EnvFilter` directive, e.g.
//! `warn` or `cart_parser=debug,cart_core=info`.

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ParserConfig};

/// Parses a filter directive.
pub fn build_filter(directive: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(directive)
        .map_err(|_| ConfigError::InvalidLogFilter(directive.to_string()))
}

/// Installs the stderr subscriber.
///
/// A subscriber that is already installed (e.g. by a test harness) is kept.
pub fn init_tracing(config: &ParserConfig) -> Result<(), ConfigError> {
    let filter = build_filter(&config.log_filter)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }

    Ok(())
}
