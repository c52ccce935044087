//! # Domain Types
//!
//! Core domain types shared between the persistence collaborator and the
//! rendering engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │    Invoice      │   │    LineItem     │   │   ShopProfile   │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id (UUID)      │   │  name           │   │  name?          │   │
//! │  │  date           │   │  qty            │   │  address?       │   │
//! │  │  items[]        │   │  unit_price     │   │  phone?         │   │
//! │  │  sub_total      │   │  product_id?    │   │  gst_number?    │   │
//! │  │  grand_total    │   └─────────────────┘   └─────────────────┘   │
//! │  └─────────────────┘                                               │
//! │                                                                    │
//! │  An Invoice is append-only: created once at sale time, never       │
//! │  mutated. The engine only READS it - and recomputes its totals.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreResult;
use crate::fiscal::FiscalTotals;
use crate::money::Money;

// =============================================================================
// Line Item
// =============================================================================

/// A line item on an invoice.
/// Uses snapshot pattern: name and price are frozen at sale time, even if
/// the product record changes later.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Product name at time of sale (frozen).
    pub name: String,

    /// Quantity sold. Zero is allowed (a struck-through line); negative is
    /// rejected by validation.
    pub qty: i64,

    /// Unit price in paise at time of sale (frozen).
    pub unit_price_paise: i64,

    /// Back-reference to the catalog product, if it came from one.
    pub product_id: Option<String>,
}

impl LineItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_paise(self.unit_price_paise)
    }

    /// Line total before discount/tax (unit_price × qty), exact.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.qty)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// The customer on an invoice. Both fields optional: a walk-in sale has
/// neither, and that is never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub name: Option<String>,

    /// Raw phone number as entered; normalization happens at message
    /// composition time, not here.
    pub phone: Option<String>,
}

// =============================================================================
// Payment Mode
// =============================================================================

/// How the customer paid. Wire values match the frontend strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentMode {
    Cash,
    Card,
    #[serde(rename = "UPI")]
    Upi,
    NetBanking,
}

impl PaymentMode {
    /// Label used on printed documents and the share message.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "Cash",
            PaymentMode::Card => "Card",
            PaymentMode::Upi => "UPI",
            PaymentMode::NetBanking => "NetBanking",
        }
    }
}

impl Default for PaymentMode {
    fn default() -> Self {
        PaymentMode::Cash
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A finalized sale.
///
/// Owned by the persistence collaborator; this crate creates it (at sale
/// time) and reads it (at render time). The stored totals exist for wire
/// compatibility with consumers that only see the record - every producer
/// in this workspace recomputes them from the line items instead of
/// trusting them.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Invoice {
    pub id: String,

    #[ts(as = "String")]
    pub date: DateTime<Utc>,

    pub customer: Customer,

    pub items: Vec<LineItem>,

    /// Whole-bill discount as a decimal percentage in [0, 100].
    pub discount_percent: f64,

    /// GST rate as a decimal percentage in [0, 100].
    pub gst_percent: f64,

    /// Σ qty × unit_price, recorded at creation time.
    pub sub_total_paise: i64,

    /// Derived total recorded at creation time. Display paths recompute.
    pub grand_total_paise: i64,

    pub payment_mode: PaymentMode,
}

impl Invoice {
    /// Creates a new invoice at sale time: fresh UUID, current timestamp,
    /// totals derived from the items. Totals are never accepted from the
    /// caller.
    pub fn create(
        customer: Customer,
        items: Vec<LineItem>,
        discount_percent: f64,
        gst_percent: f64,
        payment_mode: PaymentMode,
    ) -> CoreResult<Self> {
        let totals = FiscalTotals::compute(&items, discount_percent, gst_percent)?;
        Ok(Invoice {
            id: Uuid::new_v4().to_string(),
            date: Utc::now(),
            customer,
            items,
            discount_percent,
            gst_percent,
            sub_total_paise: totals.sub_total.paise(),
            grand_total_paise: totals.grand_total.paise(),
            payment_mode,
        })
    }

    /// Recomputed totals for this invoice.
    pub fn totals(&self) -> CoreResult<FiscalTotals> {
        FiscalTotals::compute(&self.items, self.discount_percent, self.gst_percent)
    }

    /// First 8 characters of the id, for compact display. Ids come from
    /// the persistence collaborator and may hold any Unicode text, so
    /// the cut lands on a char boundary, never a byte offset.
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(8) {
            Some((i, _)) => &self.id[..i],
            None => &self.id,
        }
    }

    /// Invoice date as `dd/mm/yyyy` (en-IN convention, unambiguous).
    pub fn date_display(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}

// =============================================================================
// Shop Profile
// =============================================================================

/// Singleton shop configuration supplied by the settings collaborator.
///
/// Every field is optional; each rendering surface substitutes its own
/// documented default when a field is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShopProfile {
    pub name: Option<String>,

    /// Postal address; embedded `\n` line breaks are preserved by the
    /// renderers.
    pub address: Option<String>,

    pub phone: Option<String>,

    /// GST registration number (GSTIN).
    pub gst_number: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
