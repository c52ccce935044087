//! # Validation Module
//!
//! Input validation for fiscal computation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Validation Layers                             │
//! │                                                                     │
//! │  Layer 1: Frontend                                                  │
//! │  └── Input masks, immediate feedback                                │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE (before any arithmetic or layout)             │
//! │  ├── Negative qty / unit price  → InvalidLineItem                   │
//! │  └── Percentages outside [0,100] → InvalidPercentage                │
//! │                                                                     │
//! │  A failure here is a single synchronous error; no document bytes    │
//! │  are ever produced for invalid input.                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::money::Percent;
use crate::types::LineItem;

// =============================================================================
// Line Item Validators
// =============================================================================

/// Validates a single line item.
///
/// ## Rules
/// - Quantity must be >= 0 (zero is a valid struck-through line)
/// - Unit price must be >= 0 (zero is a valid free item)
///
/// ## Example
/// ```rust
/// use sona_core::types::LineItem;
/// use sona_core::validation::validate_line_item;
///
/// let item = LineItem {
///     name: "Gold Ring".into(),
///     qty: 2,
///     unit_price_paise: 150000,
///     product_id: None,
/// };
/// assert!(validate_line_item(0, &item).is_ok());
/// ```
pub fn validate_line_item(index: usize, item: &LineItem) -> CoreResult<()> {
    if item.qty < 0 {
        return Err(CoreError::InvalidLineItem {
            index,
            reason: format!("quantity {} is negative", item.qty),
        });
    }

    if item.unit_price_paise < 0 {
        return Err(CoreError::InvalidLineItem {
            index,
            reason: format!("unit price {} is negative", item.unit_price_paise),
        });
    }

    Ok(())
}

/// Validates every line item on an invoice, reporting the first offender
/// by index.
pub fn validate_line_items(items: &[LineItem]) -> CoreResult<()> {
    for (index, item) in items.iter().enumerate() {
        validate_line_item(index, item)?;
    }
    Ok(())
}

// =============================================================================
// Percentage Validators
// =============================================================================

/// Validates and converts a decimal percentage into a [`Percent`].
///
/// Thin wrapper kept so callers validating without computing totals go
/// through the same path as the calculator.
pub fn validate_percent(value: f64, field: &'static str) -> CoreResult<Percent> {
    Percent::from_decimal(value, field)
}

// =============================================================================
// Unit Tests
// =============================================================================
