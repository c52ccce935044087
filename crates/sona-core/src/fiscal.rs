//! # Fiscal Calculator
//!
//! The single totals algorithm shared by invoice creation, both PDF
//! renderers, and the share-message composer. If two surfaces ever show a
//! different grand total, the bug is here and nowhere else.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  sub_total             = Σ qty_i × unit_price_i     (exact, paise)  │
//! │  discount_amount       = discount% of sub_total     (one rounding)  │
//! │  amount_after_discount = sub_total − discount_amount                │
//! │  gst_amount            = gst% of amount_after_discount (one round)  │
//! │  grand_total           = amount_after_discount + gst_amount         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rounding happens exactly once per percentage application, inside
//! [`Percent::apply_to`]; the additive steps are exact integer arithmetic.

use serde::Serialize;
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::{Money, Percent};
use crate::types::LineItem;
use crate::validation::{validate_line_items, validate_percent};

// =============================================================================
// Fiscal Totals
// =============================================================================

/// The complete monetary breakdown of a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct FiscalTotals {
    pub sub_total: Money,
    pub discount_amount: Money,
    pub amount_after_discount: Money,
    pub gst_amount: Money,
    pub grand_total: Money,

    /// The validated discount rate, kept for display labels.
    pub discount: Percent,

    /// The validated GST rate, kept for display labels.
    pub gst: Percent,
}

impl FiscalTotals {
    /// Computes the breakdown for a set of line items.
    ///
    /// All input validation happens up front: negative quantities or unit
    /// prices and out-of-range percentages fail here, before a single
    /// paisa is multiplied.
    ///
    /// ## Example
    /// ```rust
    /// use sona_core::fiscal::FiscalTotals;
    /// use sona_core::types::LineItem;
    ///
    /// let items = vec![LineItem {
    ///     name: "Gold Ring".into(),
    ///     qty: 2,
    ///     unit_price_paise: 150000,
    ///     product_id: None,
    /// }];
    /// let totals = FiscalTotals::compute(&items, 10.0, 3.0).unwrap();
    /// assert_eq!(totals.grand_total.paise(), 278100); // ₹2781.00
    /// ```
    pub fn compute(
        items: &[LineItem],
        discount_percent: f64,
        gst_percent: f64,
    ) -> CoreResult<Self> {
        validate_line_items(items)?;
        let discount = validate_percent(discount_percent, "discount_percent")?;
        let gst = validate_percent(gst_percent, "gst_percent")?;

        let sub_total = items
            .iter()
            .fold(Money::zero(), |acc, item| acc + item.line_total());

        let discount_amount = discount.apply_to(sub_total);
        let amount_after_discount = sub_total - discount_amount;
        let gst_amount = gst.apply_to(amount_after_discount);
        let grand_total = amount_after_discount + gst_amount;

        Ok(FiscalTotals {
            sub_total,
            discount_amount,
            amount_after_discount,
            gst_amount,
            grand_total,
            discount,
            gst,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn item(name: &str, qty: i64, unit_price_paise: i64) -> LineItem {
        LineItem {
            name: name.to_string(),
            qty,
            unit_price_paise,
            product_id: None,
        }
    }

    #[test]
    fn test_gold_ring_scenario() {
        // 2 × ₹1500.00, 10% discount, 3% GST
        let items = vec![item("Gold Ring", 2, 150000)];
        let totals = FiscalTotals::compute(&items, 10.0, 3.0).unwrap();

        assert_eq!(totals.sub_total.paise(), 300000);
        assert_eq!(totals.discount_amount.paise(), 30000);
        assert_eq!(totals.amount_after_discount.paise(), 270000);
        assert_eq!(totals.gst_amount.paise(), 8100);
        assert_eq!(totals.grand_total.paise(), 278100);
    }

    #[test]
    fn test_empty_items_are_zero_not_error() {
        let totals = FiscalTotals::compute(&[], 10.0, 3.0).unwrap();
        assert_eq!(totals.sub_total, Money::zero());
        assert_eq!(totals.grand_total, Money::zero());
    }

    #[test]
    fn test_zero_rates() {
        let items = vec![item("Silver Anklet", 3, 45000)];
        let totals = FiscalTotals::compute(&items, 0.0, 0.0).unwrap();
        assert_eq!(totals.sub_total.paise(), 135000);
        assert_eq!(totals.discount_amount, Money::zero());
        assert_eq!(totals.gst_amount, Money::zero());
        assert_eq!(totals.grand_total.paise(), 135000);
    }

    #[test]
    fn test_hundred_percent_discount() {
        let items = vec![item("Gold Coin", 1, 500000)];
        let totals = FiscalTotals::compute(&items, 100.0, 18.0).unwrap();
        assert_eq!(totals.amount_after_discount, Money::zero());
        assert_eq!(totals.grand_total, Money::zero());
    }

    #[test]
    fn test_negative_qty_rejected_before_arithmetic() {
        let items = vec![item("Gold Ring", -1, 150000)];
        let err = FiscalTotals::compute(&items, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidLineItem { index: 0, .. }));
    }

    #[test]
    fn test_out_of_range_rates_rejected() {
        let items = vec![item("Gold Ring", 1, 150000)];
        assert!(FiscalTotals::compute(&items, -5.0, 0.0).is_err());
        assert!(FiscalTotals::compute(&items, 0.0, 101.0).is_err());
    }

    /// Minimal deterministic LCG, enough to exercise the properties over
    /// a few hundred random carts without pulling in a fuzzing crate.
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self) -> u64 {
            self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            self.0 >> 33
        }
    }

    #[test]
    fn test_subtotal_is_sum_of_line_totals_property() {
        let mut rng = Lcg(0x5eed);
        for _ in 0..200 {
            let n = (rng.next() % 12) as usize;
            let items: Vec<LineItem> = (0..n)
                .map(|i| {
                    item(
                        &format!("Item {i}"),
                        (rng.next() % 50) as i64,
                        (rng.next() % 10_000_000) as i64,
                    )
                })
                .collect();

            let expected: i64 = items.iter().map(|it| it.qty * it.unit_price_paise).sum();
            let totals = FiscalTotals::compute(&items, 0.0, 0.0).unwrap();
            assert_eq!(totals.sub_total.paise(), expected);
        }
    }

    #[test]
    fn test_grand_total_identity_property() {
        let mut rng = Lcg(0x601d);
        for _ in 0..200 {
            let items = vec![item("Bangle", (rng.next() % 20) as i64, (rng.next() % 5_000_000) as i64)];
            let discount = (rng.next() % 101) as f64;
            let gst = (rng.next() % 101) as f64;

            let totals = FiscalTotals::compute(&items, discount, gst).unwrap();
            assert_eq!(
                totals.grand_total,
                totals.amount_after_discount + totals.gst_amount
            );
            assert_eq!(
                totals.amount_after_discount,
                totals.sub_total - totals.discount_amount
            );
        }
    }
}
