//! PDF writer: builder + finalize over `printpdf`.
//!
//! A `PdfWriter` is created at a known page size, paints a primitive list,
//! and surfaces construction errors through a single
//! `finalize() → Result<Vec<u8>>`. The caller gets the full byte buffer or
//! an error, never partial output.

use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocumentReference, PdfDocument, PdfLayerReference, Point};

use crate::error::{RenderError, RenderResult};
use crate::layout::Primitive;
use crate::metrics::FontStyle;

/// Points to millimetres (printpdf positions in Mm, layout in pt).
const PT_TO_MM: f32 = 25.4 / 72.0;

#[inline]
fn mm(pt: f32) -> Mm {
    Mm(pt * PT_TO_MM)
}

/// One PDF page under construction.
pub struct PdfWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    page_height: f32,
}

impl PdfWriter {
    /// Creates a single-page document of the given size (points).
    ///
    /// The thermal renderer passes a height computed from its own laid-out
    /// content; the A4 renderer passes the fixed A4 size.
    pub fn new(title: &str, page_width_pt: f32, page_height_pt: f32) -> RenderResult<Self> {
        let (doc, page, layer) = PdfDocument::new(title, mm(page_width_pt), mm(page_height_pt), "Layer 1");
        let layer = doc.get_page(page).get_layer(layer);

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;

        Ok(PdfWriter {
            doc,
            layer,
            regular,
            bold,
            page_height: page_height_pt,
        })
    }

    /// Paints a laid-out primitive list onto the page.
    ///
    /// Layout coordinates grow downward from the page top with `y` at the
    /// top of the line; PDF coordinates grow upward with text positioned
    /// at the baseline, so each text drop is flipped and pushed down by
    /// its font size.
    pub fn paint(&self, primitives: &[Primitive]) {
        for prim in primitives {
            match prim {
                Primitive::Text { x, y, size, style, text } => {
                    let font = match style {
                        FontStyle::Regular => &self.regular,
                        FontStyle::Bold => &self.bold,
                    };
                    let baseline = self.page_height - y - size;
                    self.layer.use_text(text.as_str(), *size, mm(*x), mm(baseline), font);
                }
                Primitive::Rule { x1, x2, y } => {
                    let flipped = self.page_height - y;
                    self.layer.add_line(Line {
                        points: vec![
                            (Point::new(mm(*x1), mm(flipped)), false),
                            (Point::new(mm(*x2), mm(flipped)), false),
                        ],
                        is_closed: false,
                    });
                }
            }
        }
    }

    /// Closes the document and returns the full PDF byte buffer.
    pub fn finalize(self) -> RenderResult<Vec<u8>> {
        let mut writer = std::io::BufWriter::new(Vec::<u8>::new());
        self.doc
            .save(&mut writer)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        writer
            .into_inner()
            .map_err(|e| RenderError::Pdf(e.to_string()))
    }
}
