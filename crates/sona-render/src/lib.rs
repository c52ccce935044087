//! # sona-render: Document & Message Artifact Producers
//!
//! Turns a finalized `(Invoice, ShopProfile)` pair into three independent
//! artifacts. None depends on another's output; each recomputes the
//! fiscal totals through sona-core, so every surface always agrees on the
//! numbers.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 (Invoice, ShopProfile) from caller                  │
//! │                              │                                      │
//! │          ┌───────────────────┼───────────────────┐                  │
//! │          ▼                   ▼                   ▼                  │
//! │  render_thermal_receipt  render_a4_invoice  compose_share_message   │
//! │    80mm auto-height        fixed A4 page      text + deep link      │
//! │    PDF (Vec<u8>)           PDF (Vec<u8>)      (ShareMessage)        │
//! │                                                                     │
//! │  layout (primitive list) ──► PdfWriter paint ──► finalize() bytes   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All producers are pure, synchronous functions of their inputs; no
//! state crosses invocations, so concurrent calls for different invoices
//! need no coordination. There is no cancellation: a caller that times
//! out simply discards the result.

pub mod a4;
pub mod error;
pub mod layout;
pub mod message;
pub mod metrics;
pub mod pdf;
pub mod thermal;

pub use a4::render_a4_invoice;
pub use error::{RenderError, RenderResult};
pub use message::{compose_share_message, normalize_phone, ShareMessage};
pub use thermal::render_thermal_receipt;
