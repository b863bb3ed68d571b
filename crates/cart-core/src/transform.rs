//! # Line Transformer
//!
//! Turns one data line into a [`LineItem`].
//!
//! ```text
//!   "  Tea , 2.50 ,4"
//!        │ split on ',' and trim every cell
//!        ▼
//!   ["Tea", "2.50", "4"]
//!        │ coerce price/quantity, ask IdSource for an id
//!        ▼
//!   LineItem { id, name: "Tea", price: 2.5, quantity: 4.0 }
//! ```
//!
//! The transformer assumes the line already passed
//! [`validate_content`](crate::validate_content). It does not re-check any
//! rule; it only reports a [`CoreError`] when a cell cannot be coerced at all.

use crate::error::{CoreError, CoreResult};
use crate::id::IdSource;
use crate::schema::{split_record, NAME_COLUMN, PRICE_COLUMN, QUANTITY_COLUMN};
use crate::types::LineItem;

/// Converts a validated line into a line item with a fresh id.
///
/// ## Example
/// ```rust
/// use cart_core::transform::transform_line;
///
/// let ids = || "item-1".to_string();
/// let item = transform_line(" Tea ,2.50,4", &ids).unwrap();
///
/// assert_eq!(item.id, "item-1");
/// assert_eq!(item.name, "Tea");
/// assert_eq!(item.price, 2.5);
/// assert_eq!(item.quantity, 4.0);
/// ```
pub fn transform_line<I>(line: &str, ids: &I) -> CoreResult<LineItem>
where
    I: IdSource + ?Sized,
{
    let cells: Vec<&str> = split_record(line).into_iter().map(str::trim).collect();

    let cell = |column: usize| {
        cells.get(column).copied().ok_or_else(|| CoreError::MalformedLine {
            line: line.to_string(),
            reason: format!("missing column {}", column),
        })
    };

    let number = |column: usize, field: &str| -> CoreResult<f64> {
        cell(column)?
            .parse::<f64>()
            .map_err(|e| CoreError::MalformedLine {
                line: line.to_string(),
                reason: format!("{} is not a number: {}", field, e),
            })
    };

    let name = cell(NAME_COLUMN)?.to_string();
    let price = number(PRICE_COLUMN, "price")?;
    let quantity = number(QUANTITY_COLUMN, "quantity")?;

    Ok(LineItem {
        id: ids.generate_id(),
        name,
        price,
        quantity,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
