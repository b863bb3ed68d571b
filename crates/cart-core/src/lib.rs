//! # cart-core: Pure Parse-and-Validate Logic for Cart Files
//!
//! This crate is the **heart** of the cart parser. It turns the text of a
//! cart CSV file into validated line items and a total, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Parser Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               cart-parser (CLI + orchestrator)                  │   │
//! │  │    read file ──► validate ──► transform ──► total              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cart-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  schema   │  │validation │  │ transform │  │   types   │  │   │
//! │  │   │ columns   │  │ header    │  │ LineItem  │  │   Cart    │  │   │
//! │  │   │ records   │  │ row/cell  │  │ from line │  │  totals   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILESYSTEM • IDS INJECTED THROUGH `IdSource`     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`schema`] - Expected columns and record splitting
//! - [`validation`] - Header, row and cell checks producing [`Violation`]s
//! - [`transform`] - Validated line to [`LineItem`]
//! - [`id`] - Pluggable identifier source
//! - [`types`] - [`LineItem`], [`Cart`] and the total calculation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::validation::validate_content;
//!
//! let text = "Product name,Price,Quantity\nTea,2.50,2\n";
//! assert!(validate_content(text).is_empty());
//!
//! let broken = "Product name,Price,Quantity\nTea,-1,2\n";
//! let violations = validate_content(broken);
//! assert_eq!(violations.len(), 1);
//! assert_eq!(
//!     violations[0].message,
//!     "Expected cell to be a positive number but received \"-1\"."
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod id;
pub mod schema;
pub mod transform;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use id::{IdSource, UuidIdSource};
pub use schema::{ColumnSpec, ConstraintKind, SCHEMA};
pub use types::{calc_total, Cart, LineItem};
pub use validation::{validate_content, Violation, ViolationKind};
