//! Thermal receipt renderer.
//!
//! Produces a single, auto-height 80mm receipt page: the content is laid
//! out first against the column engine, the resulting height becomes the
//! page height, and only then are the primitives painted. A continuous
//! receipt roll is sized to its content, not the other way round - no
//! blank trailing paper, no truncated totals.

use tracing::debug;

use sona_core::{Invoice, ShopProfile};

use crate::error::RenderResult;
use crate::layout::{Align, Column, ColumnLayout, LayoutConfig, Primitive};
use crate::metrics::FontStyle;
use crate::pdf::PdfWriter;

/// 80mm roll width in points.
const PAGE_WIDTH: f32 = 226.8;
const MARGIN: f32 = 8.0;

const BODY_SIZE: f32 = 8.0;
const NAME_SIZE: f32 = 13.0;
const TOTAL_SIZE: f32 = 10.0;
const FOOTER_SIZE: f32 = 9.0;

/// Defaults printed when the shop profile is incomplete.
const DEFAULT_NAME: &str = "BUSINESS NAME";
const DEFAULT_ADDRESS: &str = "Address Line 1\nCity, State, ZIP";

fn receipt_config() -> LayoutConfig {
    LayoutConfig {
        page_width: PAGE_WIDTH,
        margin: MARGIN,
        font_size: BODY_SIZE,
        line_height: 10.0,
        gutter: 6.0,
        rule_gap: 8.0,
    }
}

fn receipt_columns() -> Vec<Column> {
    vec![
        Column { key: "sn", width: Some(12.0), align: Align::Left },
        Column { key: "item", width: None, align: Align::Left },
        Column { key: "qty", width: Some(20.0), align: Align::Right },
        Column { key: "price", width: Some(50.0), align: Align::Right },
        Column { key: "amt", width: Some(50.0), align: Align::Right },
    ]
}

/// Lays out the receipt and returns `(primitives, page_height)`.
///
/// Split from [`render_thermal_receipt`] so tests can inspect the laid-out
/// text without decoding PDF bytes.
pub fn layout_receipt(
    invoice: &Invoice,
    shop: &ShopProfile,
) -> RenderResult<(Vec<Primitive>, f32)> {
    // Validation and totals first; a bad invoice never reaches layout.
    let totals = invoice.totals()?;

    let mut layout = ColumnLayout::new(receipt_config(), &receipt_columns());

    // Header: shop identity, centered.
    let name = shop.name.as_deref().unwrap_or(DEFAULT_NAME);
    layout.emit_centered(name, NAME_SIZE, FontStyle::Bold);

    let address = shop.address.as_deref().unwrap_or(DEFAULT_ADDRESS);
    for line in address.split('\n') {
        layout.emit_centered(line.trim(), BODY_SIZE, FontStyle::Regular);
    }
    if let Some(phone) = shop.phone.as_deref() {
        layout.emit_centered(&format!("PHONE: {phone}"), BODY_SIZE, FontStyle::Regular);
    }
    if let Some(gst) = shop.gst_number.as_deref() {
        layout.emit_centered(&format!("GSTIN: {gst}"), BODY_SIZE, FontStyle::Regular);
    }

    layout.space(4.0);

    // Bill number left, date right, same baseline.
    layout.emit_split(
        &format!("Bill No: {}", invoice.id),
        &format!("Date: {}", invoice.date_display()),
        BODY_SIZE,
        FontStyle::Regular,
    );

    if let Some(customer) = invoice.customer.name.as_deref() {
        layout.emit_text(
            &format!("Customer: {customer}"),
            BODY_SIZE,
            FontStyle::Regular,
            Align::Left,
        );
    }

    layout.emit_rule();

    // Item table. An empty invoice still gets its header and rules.
    layout.emit_row(&["SN", "Item", "Qty", "Price", "Amt"], FontStyle::Bold);
    for (idx, item) in invoice.items.iter().enumerate() {
        let sn = (idx + 1).to_string();
        let qty = item.qty.to_string();
        let price = item.unit_price().to_decimal_string();
        let amount = item.line_total().to_decimal_string();
        layout.emit_row(&[&sn, &item.name, &qty, &price, &amount], FontStyle::Regular);
    }

    layout.emit_rule();

    // Totals block. Discount only when a rate is set; the GST line always
    // prints, even at 0%.
    layout.emit_split(
        "Subtotal:",
        &totals.sub_total.to_decimal_string(),
        BODY_SIZE,
        FontStyle::Regular,
    );
    if !totals.discount.is_zero() {
        layout.emit_split(
            &format!("Discount ({}%):", totals.discount.label()),
            &format!("-{}", totals.discount_amount.to_decimal_string()),
            BODY_SIZE,
            FontStyle::Regular,
        );
    }
    layout.emit_split(
        &format!("GST ({}%):", totals.gst.label()),
        &totals.gst_amount.to_decimal_string(),
        BODY_SIZE,
        FontStyle::Regular,
    );

    layout.space(4.0);
    layout.emit_rule();

    layout.emit_split(
        "TOTAL:",
        &totals.grand_total.to_decimal_string(),
        TOTAL_SIZE,
        FontStyle::Bold,
    );

    layout.emit_rule();
    layout.space(4.0);

    layout.emit_centered("Thank You!", FOOTER_SIZE, FontStyle::Bold);

    let page_height = layout.height() + MARGIN;
    debug!(
        invoice_id = %invoice.id,
        items = invoice.items.len(),
        page_height,
        "thermal receipt laid out"
    );

    Ok((layout.into_primitives(), page_height))
}

/// Renders the invoice as an 80mm thermal receipt PDF.
pub fn render_thermal_receipt(invoice: &Invoice, shop: &ShopProfile) -> RenderResult<Vec<u8>> {
    let (primitives, page_height) = layout_receipt(invoice, shop)?;
    let writer = PdfWriter::new("Receipt", PAGE_WIDTH, page_height)?;
    writer.paint(&primitives);
    writer.finalize()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sona_core::{Customer, LineItem, PaymentMode};

    fn invoice(items: Vec<LineItem>, discount: f64, gst: f64) -> Invoice {
        Invoice::create(Customer::default(), items, discount, gst, PaymentMode::Cash).unwrap()
    }

    fn ring() -> LineItem {
        LineItem {
            name: "Gold Ring".to_string(),
            qty: 2,
            unit_price_paise: 150000,
            product_id: None,
        }
    }

    fn texts(primitives: &[Primitive]) -> Vec<&str> {
        primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_receipt_shows_defaults_for_missing_shop() {
        let (prims, _) = layout_receipt(&invoice(vec![ring()], 0.0, 0.0), &ShopProfile::default()).unwrap();
        let texts = texts(&prims);
        assert!(texts.contains(&"BUSINESS NAME"));
        assert!(texts.contains(&"Address Line 1"));
        assert!(texts.contains(&"City, State, ZIP"));
        // no phone/GSTIN lines when absent
        assert!(!texts.iter().any(|t| t.starts_with("PHONE:")));
        assert!(!texts.iter().any(|t| t.starts_with("GSTIN:")));
    }

    #[test]
    fn test_gst_line_always_present_even_at_zero() {
        let (prims, _) = layout_receipt(&invoice(vec![ring()], 0.0, 0.0), &ShopProfile::default()).unwrap();
        let texts = texts(&prims);
        assert!(texts.contains(&"GST (0%):"));
        // but no discount line at 0%
        assert!(!texts.iter().any(|t| t.starts_with("Discount")));
    }

    #[test]
    fn test_discount_line_when_set() {
        let (prims, _) = layout_receipt(&invoice(vec![ring()], 10.0, 3.0), &ShopProfile::default()).unwrap();
        let texts = texts(&prims);
        assert!(texts.contains(&"Discount (10%):"));
        assert!(texts.contains(&"-300.00"));
        assert!(texts.contains(&"GST (3%):"));
        assert!(texts.contains(&"81.00"));
        assert!(texts.contains(&"2781.00"));
    }

    #[test]
    fn test_bill_number_wraps_clear_of_the_date() {
        // a freshly created invoice carries a full 36-char uuid
        let (prims, _) =
            layout_receipt(&invoice(vec![ring()], 0.0, 0.0), &ShopProfile::default()).unwrap();
        let (date_x, date_y) = prims
            .iter()
            .find_map(|p| match p {
                Primitive::Text { text, x, y, .. } if text.starts_with("Date: ") => {
                    Some((*x, *y))
                }
                _ => None,
            })
            .unwrap();

        for p in &prims {
            if let Primitive::Text { text, x, y, size, style } = p {
                if (y - date_y).abs() < 0.001 && !text.starts_with("Date:") {
                    let end = x + crate::metrics::text_width(*style, text, *size);
                    assert!(
                        end <= date_x + 0.001,
                        "{text:?} ends at {end}, date starts at {date_x}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_taller_content_grows_page() {
        let one = layout_receipt(&invoice(vec![ring()], 0.0, 0.0), &ShopProfile::default()).unwrap();
        let many = layout_receipt(
            &invoice(vec![ring(); 12], 0.0, 0.0),
            &ShopProfile::default(),
        )
        .unwrap();
        assert!(many.1 > one.1);
    }

    #[test]
    fn test_empty_invoice_renders() {
        let bytes = render_thermal_receipt(&invoice(vec![], 0.0, 0.0), &ShopProfile::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_negative_qty_fails_before_layout() {
        let mut inv = invoice(vec![ring()], 0.0, 0.0);
        inv.items[0].qty = -1;
        let err = render_thermal_receipt(&inv, &ShopProfile::default()).unwrap_err();
        assert!(matches!(err, crate::error::RenderError::Invalid(_)));
    }

    #[test]
    fn test_address_line_breaks_preserved() {
        let shop = ShopProfile {
            name: Some("Sona Jewellers".to_string()),
            address: Some("14 MG Road\nBengaluru 560001".to_string()),
            phone: Some("+91 98765 43210".to_string()),
            gst_number: Some("29ABCDE1234F1Z5".to_string()),
        };
        let (prims, _) = layout_receipt(&invoice(vec![ring()], 0.0, 0.0), &shop).unwrap();
        let texts = texts(&prims);
        assert!(texts.contains(&"Sona Jewellers"));
        assert!(texts.contains(&"14 MG Road"));
        assert!(texts.contains(&"Bengaluru 560001"));
        assert!(texts.contains(&"PHONE: +91 98765 43210"));
        assert!(texts.contains(&"GSTIN: 29ABCDE1234F1Z5"));
    }
}
