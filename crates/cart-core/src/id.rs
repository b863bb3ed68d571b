//! # Identifier Source
//!
//! Line items get an opaque id at transformation time. Where that id comes
//! from is injected, so the transformer stays deterministic under test.
//!
//! ## Implementations
//! - [`UuidIdSource`] - UUID v4 strings, the default for real parses
//! - Any `Fn() -> String` closure - handy for fixed or sequential ids in tests
//!
//! ```rust
//! use cart_core::{IdSource, UuidIdSource};
//!
//! let ids = UuidIdSource;
//! assert_ne!(ids.generate_id(), ids.generate_id());
//!
//! let fixed = || "item-1".to_string();
//! assert_eq!(fixed.generate_id(), "item-1");
//! ```

use uuid::Uuid;

/// A source of caller-unique opaque identifiers.
pub trait IdSource {
    /// Returns a fresh identifier. No format is assumed by callers.
    fn generate_id(&self) -> String;
}

/// Generates UUID v4 identifiers.
///
/// UUID v4 needs no coordination, so concurrent parses never collide.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<F> IdSource for F
where
    F: Fn() -> String,
{
    fn generate_id(&self) -> String {
        self()
    }
}
