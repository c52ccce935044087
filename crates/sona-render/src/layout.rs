//! Column layout engine.
//!
//! A reusable primitive for laying out tabular text inside a fixed content
//! width. The engine owns an explicit vertical cursor and emits
//! backend-independent [`Primitive`]s with top-down coordinates; the PDF
//! writer paints them later. Keeping layout off the PDF backend means the
//! thermal page height is known before the page exists, and the alignment
//! invariants are testable without decoding PDF bytes.
//!
//! ## Column placement is right-to-left
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ SN  Item name that may wrap        Qty     Price        Amt  │
//! │ ▲   ▲                                ▲         ▲          ▲  │
//! │ │   └ wrappable column: leftover span │         │          │  │
//! │ └ left-anchored, fixed width          └─────────┴──────────┘  │
//! │                     right-anchored: last column pinned to the │
//! │                     content right edge, each previous column  │
//! │                     ends one gutter before the next begins    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//! This guarantees the numeric columns stay vertically aligned across
//! rows even though the item-name column has variable, wrapping content.

use crate::metrics::{self, FontStyle};

/// Vertical spacing multiplier for free-standing text lines.
const LINE_SPACING: f32 = 1.35;

/// Gap a separator rule sits below the cursor.
const RULE_OFFSET: f32 = 2.0;

// =============================================================================
// Primitives
// =============================================================================

/// One positioned drawing operation. `y` grows downward from the page top;
/// the PDF writer flips it into PDF coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Text {
        x: f32,
        y: f32,
        size: f32,
        style: FontStyle,
        text: String,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
    },
}

// =============================================================================
// Column Specs
// =============================================================================

/// Horizontal alignment of a cell within its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// One column of the table. `width: None` marks the single wrappable
/// column, which takes the span left over after the fixed columns and
/// gutters are placed.
#[derive(Debug, Clone)]
pub struct Column {
    pub key: &'static str,
    pub width: Option<f32>,
    pub align: Align,
}

#[derive(Debug, Clone)]
struct ResolvedColumn {
    key: &'static str,
    x: f32,
    width: f32,
    align: Align,
}

// =============================================================================
// Layout Config
// =============================================================================

/// Geometry shared by every row the engine emits.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Full page width in points.
    pub page_width: f32,
    /// Left/right/top margin in points.
    pub margin: f32,
    /// Baseline font size for table rows.
    pub font_size: f32,
    /// Vertical advance per table line.
    pub line_height: f32,
    /// Horizontal gap between adjacent columns.
    pub gutter: f32,
    /// Vertical advance consumed by a separator rule.
    pub rule_gap: f32,
}

impl LayoutConfig {
    fn content_left(&self) -> f32 {
        self.margin
    }

    fn content_right(&self) -> f32 {
        self.page_width - self.margin
    }
}

// =============================================================================
// Column Layout Engine
// =============================================================================

/// Fixed-width multi-column text layout with a wrap-aware vertical cursor.
///
/// The cursor is explicit engine state. Two engines laying out two
/// invoices on two threads share nothing.
pub struct ColumnLayout {
    cfg: LayoutConfig,
    cols: Vec<ResolvedColumn>,
    wrap_idx: usize,
    cursor: f32,
    out: Vec<Primitive>,
}

impl ColumnLayout {
    /// Resolves column X positions and starts the cursor at the top
    /// margin.
    ///
    /// Exactly one column must have `width: None`; columns before it are
    /// anchored left-to-right from the content left edge, columns after
    /// it right-to-left from the content right edge.
    pub fn new(cfg: LayoutConfig, columns: &[Column]) -> Self {
        // Invariant: callers mark exactly one column `width: None`. Every
        // table definition in this crate is a compile-time constant, so a
        // violation is a programming error, not a data error. Release
        // builds fall back to treating the first column as wrappable.
        let wrap_idx = columns.iter().position(|c| c.width.is_none());
        debug_assert!(wrap_idx.is_some(), "one column must carry width: None");
        let wrap_idx = wrap_idx.unwrap_or(0);

        let mut resolved: Vec<ResolvedColumn> = columns
            .iter()
            .map(|c| ResolvedColumn {
                key: c.key,
                x: 0.0,
                width: c.width.unwrap_or(0.0),
                align: c.align,
            })
            .collect();

        // Left-anchored columns, then the wrappable column's left edge.
        let mut x = cfg.content_left();
        for col in resolved.iter_mut().take(wrap_idx) {
            col.x = x;
            x += col.width + cfg.gutter;
        }
        let wrap_left = x;

        // Right-anchored columns, walked from the last backwards.
        let mut right_edge = cfg.content_right();
        for col in resolved.iter_mut().skip(wrap_idx + 1).rev() {
            col.x = right_edge - col.width;
            right_edge = col.x - cfg.gutter;
        }

        if let Some(col) = resolved.get_mut(wrap_idx) {
            col.x = wrap_left;
            col.width = right_edge - wrap_left;
        }

        let cursor = cfg.margin;
        ColumnLayout {
            cfg,
            cols: resolved,
            wrap_idx,
            cursor,
            out: Vec::new(),
        }
    }

    /// Current vertical cursor (distance from the page top).
    #[inline]
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Total height consumed so far.
    #[inline]
    pub fn height(&self) -> f32 {
        self.cursor
    }

    /// The primitives laid out so far.
    pub fn primitives(&self) -> &[Primitive] {
        &self.out
    }

    /// Resolved `(x, width)` of the column with the given key.
    pub fn column_span(&self, key: &str) -> Option<(f32, f32)> {
        self.cols.iter().find(|c| c.key == key).map(|c| (c.x, c.width))
    }

    /// Consumes the engine, returning the primitive list.
    pub fn into_primitives(self) -> Vec<Primitive> {
        self.out
    }

    /// Moves the cursor down without emitting anything.
    #[inline]
    pub fn space(&mut self, dy: f32) {
        self.cursor += dy;
    }

    fn push_text(&mut self, x: f32, y: f32, size: f32, style: FontStyle, text: &str) {
        self.out.push(Primitive::Text {
            x,
            y,
            size,
            style,
            text: text.to_string(),
        });
    }

    fn aligned_x(&self, col: &ResolvedColumn, style: FontStyle, size: f32, text: &str) -> f32 {
        match col.align {
            Align::Left => col.x,
            Align::Right => col.x + col.width - metrics::text_width(style, text, size),
        }
    }

    /// Renders one table row at the current cursor.
    ///
    /// The wrappable cell may span multiple lines; all other cells render
    /// on the row's first line only, so numeric cells share the first
    /// line's baseline no matter how far the name wraps. The cursor
    /// advances by `max(lines, 1) × line_height`.
    pub fn emit_row(&mut self, cells: &[&str], style: FontStyle) {
        debug_assert_eq!(cells.len(), self.cols.len());

        let y0 = self.cursor;
        let size = self.cfg.font_size;
        let mut line_count = 1usize;

        for (i, cell) in cells.iter().enumerate() {
            let col = self.cols[i].clone();
            if i == self.wrap_idx {
                let lines = metrics::wrap(style, cell, size, col.width);
                line_count = line_count.max(lines.len());
                for (j, line) in lines.iter().enumerate() {
                    let y = y0 + j as f32 * self.cfg.line_height;
                    let x = self.aligned_x(&col, style, size, line);
                    self.push_text(x, y, size, style, line);
                }
            } else {
                let x = self.aligned_x(&col, style, size, cell);
                self.push_text(x, y0, size, style, cell);
            }
        }

        self.cursor = y0 + line_count as f32 * self.cfg.line_height;
    }

    /// Height a row would consume, without mutating any state.
    pub fn measure_row(&self, cells: &[&str], style: FontStyle) -> f32 {
        debug_assert_eq!(cells.len(), self.cols.len());
        let wrap_col = &self.cols[self.wrap_idx];
        let lines = metrics::wrap(style, cells[self.wrap_idx], self.cfg.font_size, wrap_col.width);
        lines.len().max(1) as f32 * self.cfg.line_height
    }

    /// Draws a horizontal separator across the content width and advances
    /// the cursor by the configured rule gap.
    pub fn emit_rule(&mut self) {
        self.out.push(Primitive::Rule {
            x1: self.cfg.content_left(),
            x2: self.cfg.content_right(),
            y: self.cursor + RULE_OFFSET,
        });
        self.cursor += self.cfg.rule_gap;
    }

    /// One free-standing line spanning the content width.
    pub fn emit_text(&mut self, text: &str, size: f32, style: FontStyle, align: Align) {
        let x = match align {
            Align::Left => self.cfg.content_left(),
            Align::Right => self.cfg.content_right() - metrics::text_width(style, text, size),
        };
        let y = self.cursor;
        self.push_text(x, y, size, style, text);
        self.cursor += size * LINE_SPACING;
    }

    /// One horizontally centered line.
    pub fn emit_centered(&mut self, text: &str, size: f32, style: FontStyle) {
        let width = metrics::text_width(style, text, size);
        let x = self.cfg.content_left()
            + (self.cfg.content_right() - self.cfg.content_left() - width) / 2.0;
        let y = self.cursor;
        self.push_text(x, y, size, style, text);
        self.cursor += size * LINE_SPACING;
    }

    /// Left text and right text sharing the first baseline (bill-no/date
    /// rows, totals lines). The left text wraps within the span before
    /// the right text, so a long bill number never runs under the date.
    pub fn emit_split(&mut self, left: &str, right: &str, size: f32, style: FontStyle) {
        let y0 = self.cursor;
        let right_x = self.cfg.content_right() - metrics::text_width(style, right, size);
        let left_max = right_x - self.cfg.gutter - self.cfg.content_left();
        let lines = metrics::wrap(style, left, size, left_max);
        for (i, line) in lines.iter().enumerate() {
            let y = y0 + i as f32 * size * LINE_SPACING;
            self.push_text(self.cfg.content_left(), y, size, style, line);
        }
        self.push_text(right_x, y0, size, style, right);
        self.cursor = y0 + lines.len().max(1) as f32 * size * LINE_SPACING;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
