//! # Parser Error Types
//!
//! Error types for the parse boundary.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (missing file, invalid UTF-8)                          │
//! │       │  passed through untouched                                       │
//! │       ▼                                                                 │
//! │  ParserError (this module)                                             │
//! │       ▲                                                                 │
//! │       │  ValidationFailed when validate() reports anything             │
//! │  Vec<Violation>  (detail is dropped here on purpose)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CLI prints the message, exits 1                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers that need to know *why* a file was rejected call
//! [`CartParser::validate`](crate::CartParser::validate) themselves.

use cart_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

/// Parse boundary errors.
#[derive(Debug, Error)]
pub enum ParserError {
    /// The content produced one or more violations.
    #[error("Validation failed!")]
    ValidationFailed,

    /// Reading or decoding the file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A validated line could not be transformed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias for parser operations.
pub type ParserResult<T> = Result<T, ParserError>;

// =============================================================================
// Unit Tests
// =============================================================================
