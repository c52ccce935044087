//! # sona-core: Pure Fiscal Logic for Sona POS
//!
//! This crate is the **heart** of the invoice engine. It contains the
//! totals algorithm and the domain records as pure functions and types
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Sona POS Architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │          Frontend + HTTP/persistence (external)               │  │
//! │  │   Billing UI ──► create invoice ──► download/print/share      │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │ Invoice + ShopProfile (JSON)       │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │               ★ sona-core (THIS CRATE) ★                      │  │
//! │  │                                                               │  │
//! │  │   ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌───────────┐     │  │
//! │  │   │   types   │ │   money   │ │  fiscal   │ │ validation│     │  │
//! │  │   │  Invoice  │ │   Money   │ │  Totals   │ │   rules   │     │  │
//! │  │   │ LineItem  │ │  Percent  │ │  compute  │ │   checks  │     │  │
//! │  │   └───────────┘ └───────────┘ └───────────┘ └───────────┘     │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │            sona-render (artifact producers)                   │  │
//! │  │      thermal receipt PDF, A4 invoice PDF, share message       │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same invoice in, same totals out, on any platform
//! 2. **Integer Money**: all monetary values are paise (i64); percentages
//!    are basis points with one explicit rounding per application
//! 3. **Derived Totals**: `grand_total` is always recomputed from the line
//!    items, never accepted as an unchecked external value
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use sona_core::fiscal::FiscalTotals;
//! use sona_core::types::LineItem;
//!
//! let items = vec![LineItem {
//!     name: "Gold Ring".into(),
//!     qty: 2,
//!     unit_price_paise: 150000, // ₹1500.00
//!     product_id: None,
//! }];
//!
//! let totals = FiscalTotals::compute(&items, 10.0, 3.0).unwrap();
//! assert_eq!(totals.sub_total.paise(), 300000);
//! assert_eq!(totals.grand_total.paise(), 278100); // ₹2781.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fiscal;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use sona_core::Money` instead of
// `use sona_core::money::Money`

pub use error::{CoreError, CoreResult};
pub use fiscal::FiscalTotals;
pub use money::{Money, Percent};
pub use types::*;
