//! # Validation Module
//!
//! Checks cart text against the [`SCHEMA`] and reports every problem found.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  validate_content(text)                                                │
//! │  ├── check_header(cells)      → at most ONE violation (first mismatch) │
//! │  └── for each data row                                                 │
//! │      └── check_row(row, cells)                                         │
//! │          ├── wrong width?     → one `row` violation, stop              │
//! │          └── check_cell × 3   → EVERY failing cell is reported         │
//! │                                                                         │
//! │  Nothing here returns Err. Deciding to fail is the caller's job.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The header stops at its first mismatch while rows and cells accumulate.
//!
//! ## Usage
//! ```rust
//! use cart_core::validation::check_cell;
//! use cart_core::ConstraintKind;
//!
//! assert!(check_cell(ConstraintKind::PositiveNumber, "9.00").is_none());
//!
//! let failure = check_cell(ConstraintKind::NonEmptyString, "  ").unwrap();
//! assert_eq!(failure, "Expected cell to be a nonempty string but received \"  \".");
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::schema::{data_lines, header_line, split_record, ConstraintKind, SCHEMA};

// =============================================================================
// Violation
// =============================================================================

/// Which rule family a violation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ViolationKind {
    /// Header column name mismatch.
    Header,
    /// Data row with the wrong number of cells.
    Row,
    /// Single cell failing its column constraint.
    Cell,
}

/// One diagnostic record: what failed and where.
///
/// `row` is 0 for the header and the 1-based line position below it for data
/// rows. `column` is `None` for whole-row violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Violation {
    #[serde(rename = "type")]
    pub kind: ViolationKind,
    pub row: usize,
    pub column: Option<usize>,
    pub message: String,
}

impl Violation {
    /// Builds a single diagnostic record.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::{Violation, ViolationKind};
    ///
    /// let v = Violation::new(ViolationKind::Row, 3, None, "Expected row to have 3 cells but received 2.");
    /// assert_eq!(v.row, 3);
    /// assert!(v.column.is_none());
    /// ```
    pub fn new(
        kind: ViolationKind,
        row: usize,
        column: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        Violation {
            kind,
            row,
            column,
            message: message.into(),
        }
    }
}

// =============================================================================
// Cell Validator
// =============================================================================

/// Checks one raw cell against one constraint.
///
/// Returns the failure message, or `None` when the cell is acceptable. The
/// message echoes the raw, untrimmed value. A cell has no position of its own;
/// [`check_row`] wraps the message in a [`Violation`] with row and column.
pub fn check_cell(kind: ConstraintKind, raw: &str) -> Option<String> {
    match kind {
        ConstraintKind::NonEmptyString => {
            if raw.trim().is_empty() {
                return Some(format!(
                    "Expected cell to be a nonempty string but received \"{}\".",
                    raw
                ));
            }
        }
        ConstraintKind::PositiveNumber => {
            let positive = raw
                .trim()
                .parse::<f64>()
                .map(|n| n.is_finite() && n > 0.0)
                .unwrap_or(false);

            if !positive {
                return Some(format!(
                    "Expected cell to be a positive number but received \"{}\".",
                    raw
                ));
            }
        }
    }

    None
}

// =============================================================================
// Header Validator
// =============================================================================

/// Compares header cells against the schema names, left to right.
///
/// Exact match, case and whitespace sensitive. Reports only the first
/// mismatching column. A missing header cell compares as the empty string;
/// cells past the last schema column are not inspected.
pub fn check_header(cells: &[&str]) -> Vec<Violation> {
    for (column, expected) in SCHEMA.iter().enumerate() {
        let actual = cells.get(column).copied().unwrap_or("");

        if actual != expected.name {
            return vec![Violation::new(
                ViolationKind::Header,
                0,
                Some(column),
                format!(
                    "Expected header to be named \"{}\" but received {}.",
                    expected.name, actual
                ),
            )];
        }
    }

    Vec::new()
}

// =============================================================================
// Row Validator
// =============================================================================

/// Checks one data row: width first, then every cell.
pub fn check_row(row: usize, cells: &[&str]) -> Vec<Violation> {
    if cells.len() != SCHEMA.len() {
        return vec![Violation::new(
            ViolationKind::Row,
            row,
            None,
            format!(
                "Expected row to have {} cells but received {}.",
                SCHEMA.len(),
                cells.len()
            ),
        )];
    }

    SCHEMA
        .iter()
        .zip(cells)
        .enumerate()
        .filter_map(|(column, (expected, raw))| {
            check_cell(expected.constraint, raw)
                .map(|message| Violation::new(ViolationKind::Cell, row, Some(column), message))
        })
        .collect()
}

// =============================================================================
// Content Validator
// =============================================================================

/// Validates a whole document and returns every violation in document order.
///
/// The first line is always the header, even when blank. Whitespace-only data
/// lines are skipped without a violation. An empty result means the text can
/// be transformed safely.
pub fn validate_content(text: &str) -> Vec<Violation> {
    let mut violations = check_header(&split_record(header_line(text)));

    for (row, line) in data_lines(text) {
        violations.extend(check_row(row, &split_record(line)));
    }

    violations
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Product name,Price,Quantity";

    fn doc(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn test_check_cell_nonempty_string() {
        assert!(check_cell(ConstraintKind::NonEmptyString, "Tea").is_none());
        assert!(check_cell(ConstraintKind::NonEmptyString, " x ").is_none());

        assert_eq!(
            check_cell(ConstraintKind::NonEmptyString, "").unwrap(),
            "Expected cell to be a nonempty string but received \"\"."
        );
        assert!(check_cell(ConstraintKind::NonEmptyString, "\t ").is_some());
    }

    #[test]
    fn test_check_cell_positive_number() {
        assert!(check_cell(ConstraintKind::PositiveNumber, "9.00").is_none());
        assert!(check_cell(ConstraintKind::PositiveNumber, "1").is_none());
        assert!(check_cell(ConstraintKind::PositiveNumber, " 2.5 ").is_none());
        assert!(check_cell(ConstraintKind::PositiveNumber, "1e2").is_none());

        assert_eq!(
            check_cell(ConstraintKind::PositiveNumber, "-3").unwrap(),
            "Expected cell to be a positive number but received \"-3\"."
        );
        assert!(check_cell(ConstraintKind::PositiveNumber, "0").is_some());
        assert!(check_cell(ConstraintKind::PositiveNumber, "").is_some());
        assert!(check_cell(ConstraintKind::PositiveNumber, "abc").is_some());
        assert!(check_cell(ConstraintKind::PositiveNumber, "NaN").is_some());
        assert!(check_cell(ConstraintKind::PositiveNumber, "inf").is_some());
    }

    #[test]
    fn test_check_header_valid() {
        assert!(check_header(&["Product name", "Price", "Quantity"]).is_empty());
    }

    #[test]
    fn test_check_header_reports_only_first_mismatch() {
        let violations = check_header(&["Product namex", "Pricex", "Quantityx"]);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::Header);
        assert_eq!(violations[0].row, 0);
        assert_eq!(violations[0].column, Some(0));
        assert_eq!(
            violations[0].message,
            "Expected header to be named \"Product name\" but received Product namex."
        );
    }

    #[test]
    fn test_check_header_is_case_and_whitespace_sensitive() {
        let violations = check_header(&["Product name", "price", "Quantity"]);
        assert_eq!(violations[0].column, Some(1));

        let violations = check_header(&["Product name", "Price", " Quantity"]);
        assert_eq!(violations[0].column, Some(2));
    }

    #[test]
    fn test_check_header_missing_column() {
        let violations = check_header(&["Product name", "Price"]);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].column, Some(2));
        assert_eq!(
            violations[0].message,
            "Expected header to be named \"Quantity\" but received ."
        );
    }

    #[test]
    fn test_check_row_wrong_width_stops_cell_checks() {
        let violations = check_row(1, &["", "-1"]);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::Row);
        assert_eq!(violations[0].row, 1);
        assert_eq!(violations[0].column, None);
        assert_eq!(
            violations[0].message,
            "Expected row to have 3 cells but received 2."
        );
    }

    #[test]
    fn test_check_row_collects_every_cell_violation() {
        let violations = check_row(7, &[" ", "0", "x"]);

        assert_eq!(violations.len(), 3);
        assert!(violations.iter().all(|v| v.kind == ViolationKind::Cell));
        assert!(violations.iter().all(|v| v.row == 7));
        let columns: Vec<Option<usize>> = violations.iter().map(|v| v.column).collect();
        assert_eq!(columns, vec![Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn test_validate_content_well_formed() {
        let text = doc(&["Mollis consequat,9.00,2", "Tvoluptatem,10.32,1"]);
        assert!(validate_content(&text).is_empty());
    }

    #[test]
    fn test_validate_content_header_mismatch() {
        let text = "Product namex,Price,Quantity\nTea,1,1";
        let violations = validate_content(text);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::Header);
        assert_eq!(
            violations[0].message,
            "Expected header to be named \"Product name\" but received Product namex."
        );
    }

    #[test]
    fn test_validate_content_row_width() {
        let violations = validate_content(&doc(&["Test,9.00"]));

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::Row);
        assert_eq!(
            violations[0].message,
            "Expected row to have 3 cells but received 2."
        );
    }

    #[test]
    fn test_validate_content_empty_name() {
        let violations = validate_content(&doc(&[",3,2"]));

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::Cell);
        assert_eq!(violations[0].column, Some(0));
        assert_eq!(
            violations[0].message,
            "Expected cell to be a nonempty string but received \"\"."
        );
    }

    #[test]
    fn test_validate_content_negative_price() {
        let violations = validate_content(&doc(&["Test,-3,2"]));

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::Cell);
        assert_eq!(violations[0].column, Some(1));
        assert_eq!(
            violations[0].message,
            "Expected cell to be a positive number but received \"-3\"."
        );
    }

    #[test]
    fn test_validate_content_orders_by_position() {
        let text = "Product name,Pricex,Quantity\nTea,1\n,2,-1";
        let violations = validate_content(text);

        let summary: Vec<(ViolationKind, usize, Option<usize>)> = violations
            .iter()
            .map(|v| (v.kind, v.row, v.column))
            .collect();
        assert_eq!(
            summary,
            vec![
                (ViolationKind::Header, 0, Some(1)),
                (ViolationKind::Row, 1, None),
                (ViolationKind::Cell, 2, Some(0)),
                (ViolationKind::Cell, 2, Some(2)),
            ]
        );
    }

    #[test]
    fn test_validate_content_skips_blank_lines() {
        let text = "Product name,Price,Quantity\n\nTea,1,1\n   \nMilk,x,1\n";
        let violations = validate_content(text);

        // Blank lines are not reported but keep their row numbers.
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].row, 4);
    }

    #[test]
    fn test_validate_content_empty_document() {
        let violations = validate_content("");

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::Header);
        assert_eq!(
            violations[0].message,
            "Expected header to be named \"Product name\" but received ."
        );
    }

    #[test]
    fn test_validate_content_crlf() {
        let text = "Product name,Price,Quantity\r\nTea,1.50,2\r\n";
        assert!(validate_content(text).is_empty());
    }

    #[test]
    fn test_violation_serializes_with_type_key() {
        let v = Violation::new(ViolationKind::Row, 2, None, "bad");
        let json = serde_json::to_value(&v).unwrap();

        assert_eq!(json["type"], "row");
        assert_eq!(json["row"], 2);
        assert!(json["column"].is_null());
        assert_eq!(json["message"], "bad");
    }
}
