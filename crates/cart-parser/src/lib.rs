//! # cart-parser: File Boundary for Cart Files
//!
//! Reads cart CSV files from disk and runs them through [`cart_core`].
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Parser Data Flow                            │
//! │                                                                         │
//! │  cart-parser parse <PATH>   (main.rs)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   cart-parser (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  CartParser   │    │ ContentReader │    │ ParserConfig │  │   │
//! │  │   │  (parser.rs)  │───►│  (reader.rs)  │    │ (config.rs)  │  │   │
//! │  │   │ parse/validate│    │ FsReader      │    │ env + flags  │  │   │
//! │  │   └───────┬───────┘    └───────────────┘    └──────────────┘  │   │
//! │  └───────────┼─────────────────────────────────────────────────────┘   │
//! │              ▼                                                          │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │         cart-core: validate → transform → total                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`parser`] - The parse orchestrator
//! - [`reader`] - File reading capability
//! - [`config`] - Environment configuration
//! - [`logging`] - Tracing subscriber setup
//! - [`error`] - Parser error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cart_parser::{CartParser, ParserError};
//!
//! let parser = CartParser::from_filesystem();
//! match parser.parse("samples/cart.csv") {
//!     Ok(cart) => println!("total: {}", cart.total()),
//!     Err(ParserError::ValidationFailed) => {
//!         let violations = parser.validate_file("samples/cart.csv")?;
//!         eprintln!("{} problems", violations.len());
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod logging;
pub mod parser;
pub mod reader;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ConfigError, OutputFormat, ParserConfig};
pub use error::{ParserError, ParserResult};
pub use parser::CartParser;
pub use reader::{ContentReader, FsReader, MemoryReader};

pub use cart_core::{Cart, IdSource, LineItem, UuidIdSource, Violation, ViolationKind};
