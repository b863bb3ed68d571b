//! # Error Types
//!
//! Domain-specific error types for cart-core.
//!
//! ## Two Channels
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Channels                                  │
//! │                                                                         │
//! │  Diagnostics (validation module)                                       │
//! │  └── Vec<Violation>  - recoverable, never returned as Err              │
//! │                                                                         │
//! │  Errors (this file)                                                    │
//! │  └── CoreError       - a line could not be coerced into a LineItem     │
//! │                                                                         │
//! │  cart-parser errors (separate crate)                                   │
//! │  └── ParserError     - "Validation failed!", I/O, config               │
//! │                                                                         │
//! │  Flow: CoreError → ParserError → CLI exit code                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A violation is data describing bad input. A `CoreError` means a caller
//! skipped validation before transforming.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by the transformation step.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// A line could not be turned into a line item.
    ///
    /// ## When This Occurs
    /// - `transform_line` called on text that never went through validation
    /// - A price or quantity cell is not a number
    /// - The line has fewer cells than the schema
    #[error("Malformed line {line:?}: {reason}")]
    MalformedLine { line: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
