//! # Parser Configuration
//!
//! Runtime settings for the `cart-parser` tool.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority)                              │
//! │     --log debug   --compact                                            │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     CART_PARSER_LOG=cart_parser=debug                                  │
//! │     CART_PARSER_OUTPUT=compact                                         │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     log = "info", output = pretty                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::env;
use thiserror::Error;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "CART_PARSER_LOG";

/// Environment variable selecting the JSON output style.
pub const OUTPUT_ENV: &str = "CART_PARSER_OUTPUT";

// =============================================================================
// Output Format
// =============================================================================

/// How JSON results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented, one field per line.
    #[default]
    Pretty,

    /// Single line.
    Compact,
}

impl OutputFormat {
    /// Serializes `value` in this format.
    pub fn render<T: Serialize + ?Sized>(&self, value: &T) -> serde_json::Result<String> {
        match self {
            OutputFormat::Pretty => serde_json::to_string_pretty(value),
            OutputFormat::Compact => serde_json::to_string(value),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Compact => write!(f, "compact"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(OutputFormat::Pretty),
            "compact" => Ok(OutputFormat::Compact),
            other => Err(ConfigError::InvalidValue {
                key: OUTPUT_ENV.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Parser Configuration
// =============================================================================

/// Settings for the command line tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Tracing filter directive (e.g. `info`, `cart_parser=debug`).
    pub log_filter: String,

    /// JSON output style.
    pub output: OutputFormat,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            log_filter: "info".to_string(),
            output: OutputFormat::default(),
        }
    }
}

impl ParserConfig {
    /// Loads configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ParserConfig::default();

        if let Some(filter) = lookup(LOG_ENV) {
            if filter.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: LOG_ENV.to_string(),
                    value: filter,
                });
            }
            config.log_filter = filter;
        }

        if let Some(output) = lookup(OUTPUT_ENV) {
            config.output = output.parse()?;
        }

        Ok(config)
    }

    /// Applies command line flags on top of the loaded values.
    ///
    /// `log` replaces the filter when given; `compact` forces compact output.
    /// Without flags the environment (or default) value stays.
    pub fn with_overrides(mut self, log: Option<String>, compact: bool) -> Self {
        if let Some(filter) = log {
            self.log_filter = filter;
        }
        if compact {
            self.output = OutputFormat::Compact;
        }
        self
    }

    /// Sets the tracing filter directive.
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Sets the output format.
    pub fn output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }
}

/// Configuration error types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("Invalid log filter: '{0}'")]
    InvalidLogFilter(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
