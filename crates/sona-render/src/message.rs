//! WhatsApp share-message composer.
//!
//! Formats the invoice into a fixed plain-text template and, when a
//! customer phone number is available, a deep link that opens WhatsApp
//! with the message pre-filled. Missing optional fields fall back to
//! defaults; the composer never fails on absent data.

use serde::Serialize;
use tracing::debug;

use sona_core::{Invoice, ShopProfile};

use crate::error::RenderResult;

/// Country code prepended to domestic mobile numbers.
const COUNTRY_CODE: &str = "91";

const DEFAULT_SHOP_NAME: &str = "Jewelry Store";
const DEFAULT_SHOP_ADDRESS: &str = "123 Main Street";
const DEFAULT_SHOP_PHONE: &str = "+91-9876543210";
const DEFAULT_CUSTOMER: &str = "Walk-in Customer";

const DIVIDER: &str = "━━━━━━━━━━━━━━━━━━━";

/// The composed shareable artifact.
#[derive(Debug, Clone, Serialize)]
pub struct ShareMessage {
    /// Plain UTF-8 message body with `\n` line breaks.
    pub text: String,

    /// WhatsApp deep link, absent when no phone number is available.
    pub url: Option<String>,
}

/// Normalizes a raw phone number for the deep link.
///
/// Strips all non-digit characters; a 10-digit domestic mobile (leading
/// 6-9) gets the country code prepended; leading zeros are trimmed
/// (landlines often carry them). Unrecognized formats pass through
/// digit-stripped as-is - best effort, never an error.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    let digits = if digits.len() == 10 && digits.starts_with(['6', '7', '8', '9']) {
        format!("{COUNTRY_CODE}{digits}")
    } else {
        digits
    };

    digits.trim_start_matches('0').to_string()
}

/// Composes the share message and deep link for an invoice.
pub fn compose_share_message(invoice: &Invoice, shop: &ShopProfile) -> RenderResult<ShareMessage> {
    let totals = invoice.totals()?;

    let shop_name = shop.name.as_deref().unwrap_or(DEFAULT_SHOP_NAME);
    let shop_address = shop.address.as_deref().unwrap_or(DEFAULT_SHOP_ADDRESS);
    let shop_phone = shop.phone.as_deref().unwrap_or(DEFAULT_SHOP_PHONE);
    let customer = invoice.customer.name.as_deref().unwrap_or(DEFAULT_CUSTOMER);

    let items_list = invoice
        .items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            format!(
                "{}. 💍 *{}* ({}) – {}",
                idx + 1,
                item.name,
                item.qty,
                item.line_total().formatted()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut text = format!(
        "🙏 Thank you for shopping with {shop_name}! 🙏\n\
         \n\
         🏪 {shop_name}\n\
         📍 {shop_address}\n\
         📞 {shop_phone}\n\
         \n\
         {DIVIDER}\n\
         🧾 INVOICE DETAILS\n\
         {DIVIDER}\n\
         📄 Invoice No: {short_id}\n\
         📅 Date: {date}\n\
         👤 Customer: {customer}\n\
         {DIVIDER}\n\
         \n\
         💎 ITEMS PURCHASED\n\
         {items_list}\n\
         \n\
         {DIVIDER}\n\
         💰 BILLING SUMMARY\n\
         {DIVIDER}\n\
         💵 Subtotal: {sub_total}",
        short_id = invoice.short_id(),
        date = invoice.date_display(),
        sub_total = totals.sub_total.formatted(),
    );

    if !totals.discount.is_zero() {
        text.push_str(&format!(
            "\n💸 *Discount ({}%):* -{}",
            totals.discount.label(),
            totals.discount_amount.formatted()
        ));
    }

    if !totals.gst.is_zero() {
        text.push_str(&format!(
            "\n🧮 *GST ({}%):* +{}",
            totals.gst.label(),
            totals.gst_amount.formatted()
        ));
    }

    text.push_str(&format!(
        "\n\
         \n\
         💳 Payment Mode: {mode}\n\
         💰 Grand Total: {grand_total}\n\
         \n\
         {DIVIDER}\n\
         🌟 We appreciate your trust and loyalty!\n\
         💬 For queries, contact us at {shop_phone}.",
        mode = invoice.payment_mode.label(),
        grand_total = totals.grand_total.formatted(),
    ));

    let url = invoice
        .customer
        .phone
        .as_deref()
        .map(normalize_phone)
        .filter(|phone| !phone.is_empty())
        .map(|phone| {
            format!(
                "https://api.whatsapp.com/send?phone={phone}&text={}",
                urlencoding::encode(&text)
            )
        });

    debug!(invoice_id = %invoice.id, has_link = url.is_some(), "share message composed");

    Ok(ShareMessage { text, url })
}

// =============================================================================
// Unit Tests
// =============================================================================
