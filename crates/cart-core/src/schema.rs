//! # Cart Schema
//!
//! The fixed description of a cart file: which columns exist, in what order,
//! and which constraint each cell must satisfy.
//!
//! ## File Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product name,Price,Quantity      ← header (row 0), matched exactly     │
//! │  Mollis consequat,9.00,2          ← data row 1                          │
//! │  Tvoluptatem,10.32,1              ← data row 2                          │
//! │                                   ← blank: skipped, still numbered 3    │
//! │  Scelerisque lacinia,18.90,1      ← data row 4                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Column position is significant: it selects the header name to compare
//! against and the [`LineItem`](crate::LineItem) field the cell lands in.

use serde::Serialize;

/// Cell delimiter. Quoting and escaping are not supported.
pub const DELIMITER: char = ',';

// =============================================================================
// Column Descriptors
// =============================================================================

/// The rule a single cell must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstraintKind {
    /// Trimmed value must not be empty.
    NonEmptyString,
    /// Value must parse as a finite number greater than zero.
    PositiveNumber,
}

/// One expected column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    pub name: &'static str,
    pub constraint: ConstraintKind,
}

/// Expected columns, in file order.
pub const SCHEMA: [ColumnSpec; 3] = [
    ColumnSpec {
        name: "Product name",
        constraint: ConstraintKind::NonEmptyString,
    },
    ColumnSpec {
        name: "Price",
        constraint: ConstraintKind::PositiveNumber,
    },
    ColumnSpec {
        name: "Quantity",
        constraint: ConstraintKind::PositiveNumber,
    },
];

/// Column indices into [`SCHEMA`] and into a split record.
pub const NAME_COLUMN: usize = 0;
pub const PRICE_COLUMN: usize = 1;
pub const QUANTITY_COLUMN: usize = 2;

// =============================================================================
// Record Splitting
// =============================================================================

/// Splits one line into its raw cells. Cells are not trimmed.
pub fn split_record(line: &str) -> Vec<&str> {
    line.split(DELIMITER).collect()
}

/// Returns the header line. An empty document has an empty header.
pub fn header_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

/// Iterates data lines as `(row_number, line)`.
///
/// Row numbers are 1-based positions below the header. Whitespace-only lines
/// are skipped but still consume their number, so reported rows always match
/// what an editor shows (minus one for the header).
pub fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_order() {
        let names: Vec<&str> = SCHEMA.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Product name", "Price", "Quantity"]);
        assert_eq!(SCHEMA[NAME_COLUMN].constraint, ConstraintKind::NonEmptyString);
        assert_eq!(SCHEMA[PRICE_COLUMN].constraint, ConstraintKind::PositiveNumber);
        assert_eq!(SCHEMA[QUANTITY_COLUMN].constraint, ConstraintKind::PositiveNumber);
    }

    #[test]
    fn test_split_record_keeps_whitespace_and_empty_cells() {
        assert_eq!(split_record(" Tea ,2,"), vec![" Tea ", "2", ""]);
        assert_eq!(split_record(""), vec![""]);
    }

    #[test]
    fn test_header_line() {
        assert_eq!(header_line("a,b\nc,d"), "a,b");
        assert_eq!(header_line(""), "");
    }

    #[test]
    fn test_data_lines_skip_blank_but_keep_numbering() {
        let text = "h\nfirst\n   \n\nsecond\r\n";
        let rows: Vec<(usize, &str)> = data_lines(text).collect();
        assert_eq!(rows, vec![(1, "first"), (4, "second")]);
    }

    #[test]
    fn test_schema_serializes_camel_case() {
        let json = serde_json::to_value(SCHEMA[1]).unwrap();
        assert_eq!(json["name"], "Price");
        assert_eq!(json["constraint"], "positiveNumber");
    }
}
