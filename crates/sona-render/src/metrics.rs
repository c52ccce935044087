//! Font metrics for the builtin PDF fonts.
//!
//! `printpdf` exposes the standard-14 Helvetica faces but no measurement
//! API for them, so this module carries the standard AFM advance widths
//! (millesimal em units) for the ASCII range. Width measurement drives
//! right alignment and word wrapping in the layout engine; anything
//! outside ASCII falls back to a conservative 600/1000 em.

/// Which builtin face a piece of text renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// Helvetica advance widths for chars 32..=126, in 1/1000 em.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, // 'A'..'P'
    778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'Q'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, // 'a'..'p'
    556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'q'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Helvetica-Bold advance widths for chars 32..=126, in 1/1000 em.
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    333, 333, 584, 584, 584, 611, 975, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, 667, // 'A'..'P'
    778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'Q'..'Z'
    333, 278, 333, 584, 556, 333, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, // 'a'..'p'
    611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'q'..'z'
    389, 280, 389, 584, // '{'..'~'
];

/// Fallback for glyphs outside the table (₹, box-drawing, emoji).
const FALLBACK_WIDTH: u16 = 600;

fn char_width_millis(style: FontStyle, c: char) -> u16 {
    let table = match style {
        FontStyle::Regular => &HELVETICA,
        FontStyle::Bold => &HELVETICA_BOLD,
    };
    let code = c as u32;
    if (32..=126).contains(&code) {
        table[(code - 32) as usize]
    } else {
        FALLBACK_WIDTH
    }
}

/// Width of `text` at `size` points.
pub fn text_width(style: FontStyle, text: &str, size: f32) -> f32 {
    let millis: u32 = text.chars().map(|c| char_width_millis(style, c) as u32).sum();
    millis as f32 * size / 1000.0
}

/// Word-wraps `text` to fit `max_width` points.
///
/// Breaks at spaces; a single word wider than the column is hard-wrapped
/// at the width boundary rather than truncated. Always returns at least
/// one line (possibly empty) so a row's height is never zero.
pub fn wrap(style: FontStyle, text: &str, size: f32, max_width: f32) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if text_width(style, &candidate, size) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if text_width(style, word, size) <= max_width {
            current = word.to_string();
        } else {
            // Hard-wrap the oversized word at the width boundary.
            let mut chunk = String::new();
            for c in word.chars() {
                let mut grown = chunk.clone();
                grown.push(c);
                if !chunk.is_empty() && text_width(style, &grown, size) > max_width {
                    lines.push(std::mem::take(&mut chunk));
                    chunk.push(c);
                } else {
                    chunk = grown;
                }
            }
            current = chunk;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
