//! # Error Types
//!
//! Domain-specific error types for sona-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  sona-core errors (this file)                                       │
//! │  └── CoreError        - Invalid invoice input                       │
//! │                                                                     │
//! │  sona-render errors (separate crate)                                │
//! │  └── RenderError      - Wraps CoreError + PDF construction failure  │
//! │                                                                     │
//! │  Flow: CoreError → RenderError → HTTP layer → Frontend              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item index, offending value)
//! 3. Errors are enum variants, never String
//! 4. Missing optional fields (customer name, shop address) are NEVER
//!    errors - they resolve to documented defaults

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Fiscal input errors.
///
/// Both variants are detected up front, before any totals arithmetic or
/// layout work begins. A caller never receives a partially built artifact.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// A line item carries a negative quantity or unit price.
    ///
    /// ## When This Occurs
    /// - A corrupted record reaches the engine
    /// - A caller multiplies sign conventions (refunds are not line items)
    #[error("invalid line item at index {index}: {reason}")]
    InvalidLineItem { index: usize, reason: String },

    /// Discount or GST percentage outside the closed range [0, 100].
    #[error("invalid {field}: {value} is not within 0..=100")]
    InvalidPercentage { field: &'static str, value: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidLineItem {
            index: 2,
            reason: "quantity -1 is negative".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid line item at index 2: quantity -1 is negative"
        );

        let err = CoreError::InvalidPercentage {
            field: "discount_percent",
            value: 120.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid discount_percent: 120 is not within 0..=100"
        );
    }
}
