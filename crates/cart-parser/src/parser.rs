//! # Parse Orchestrator
//!
//! Reads a cart file and turns it into a [`Cart`], or fails as a whole.
//!
//! ## Parse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         CartParser::parse(path)                         │
//! │                                                                         │
//! │  reader.read_to_string(path) ──── io::Error ──────────► Err(Io)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_content(text) ───────── any violation ──────► Err(Validation │
//! │       │                                                   Failed)      │
//! │       ▼                                                                 │
//! │  data_lines(text) → transform_line × N  (one id each)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Cart::from_items(items)  ← total computed here                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no partial success. Every call re-reads its input; nothing is
//! cached between calls.

use std::path::Path;

use cart_core::schema::data_lines;
use cart_core::transform::transform_line;
use cart_core::{validate_content, Cart, IdSource, LineItem, UuidIdSource, Violation};
use tracing::{debug, info, warn};

use crate::error::{ParserError, ParserResult};
use crate::reader::{ContentReader, FsReader};

/// Parses cart files using an injected reader and id source.
///
/// ## Example
/// ```rust,ignore
/// use cart_parser::CartParser;
///
/// let parser = CartParser::from_filesystem();
/// let cart = parser.parse("samples/cart.csv")?;
/// println!("{} items, total {}", cart.item_count(), cart.total());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CartParser<R = FsReader, I = UuidIdSource> {
    reader: R,
    ids: I,
}

impl CartParser {
    /// Creates a parser reading the local file system and issuing UUID v4 ids.
    pub fn from_filesystem() -> Self {
        CartParser::new(FsReader, UuidIdSource)
    }
}

impl<R, I> CartParser<R, I>
where
    R: ContentReader,
    I: IdSource,
{
    /// Creates a parser from its two collaborators.
    pub fn new(reader: R, ids: I) -> Self {
        CartParser { reader, ids }
    }

    /// Lists every violation in `text`. Never fails.
    pub fn validate(&self, text: &str) -> Vec<Violation> {
        validate_content(text)
    }

    /// Reads `path` and lists every violation in it.
    ///
    /// Only I/O can fail here; bad content shows up in the returned list.
    pub fn validate_file(&self, path: impl AsRef<Path>) -> ParserResult<Vec<Violation>> {
        let text = self.reader.read_to_string(path.as_ref())?;
        Ok(self.validate(&text))
    }

    /// Reads, validates and transforms the cart file at `path`.
    ///
    /// ## Errors
    /// - [`ParserError::Io`] when the file cannot be read or is not UTF-8
    /// - [`ParserError::ValidationFailed`] when the content has any violation
    pub fn parse(&self, path: impl AsRef<Path>) -> ParserResult<Cart> {
        let path = path.as_ref();
        info!(path = %path.display(), "Parsing cart file");

        let text = self.reader.read_to_string(path)?;
        debug!(bytes = text.len(), "Cart file read");

        let violations = self.validate(&text);
        if !violations.is_empty() {
            warn!(
                path = %path.display(),
                count = violations.len(),
                "Cart file failed validation"
            );
            for violation in &violations {
                debug!(
                    kind = ?violation.kind,
                    row = violation.row,
                    column = ?violation.column,
                    message = %violation.message,
                    "Violation"
                );
            }
            return Err(ParserError::ValidationFailed);
        }

        let items = data_lines(&text)
            .map(|(_, line)| transform_line(line, &self.ids))
            .collect::<Result<Vec<LineItem>, _>>()?;

        let cart = Cart::from_items(items);
        info!(
            items = cart.item_count(),
            total = cart.total(),
            "Cart parsed"
        );

        Ok(cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
