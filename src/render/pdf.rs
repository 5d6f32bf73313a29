//! PDF backend for the [`Canvas`] trait.
//!
//! Produces a plain multi-page PDF: one content stream per page, a shared
//! media box, and the built-in Type1 Helvetica for headings (no font
//! embedding, so output is small and byte-for-byte deterministic for a
//! given board).

use std::path::Path;

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

use super::canvas::{Canvas, Rgb};
use super::error::{RenderError, RenderResult};
use super::font;

/// Resource name of the heading font in every page's font dictionary.
const FONT_NAME: Name<'static> = Name(b"F1");

/// Default page size when the layout driver never sets one (points,
/// US Letter). Only reachable for boards that produce zero pages.
const DEFAULT_PAGE_SIZE: (f64, f64) = (612.0, 792.0);

/// A [`Canvas`] that accumulates pages and writes a PDF file.
pub struct PdfCanvas {
    page_size: (f64, f64),
    content: Content,
    pages: Vec<Vec<u8>>,
}

impl Default for PdfCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfCanvas {
    /// Creates an empty canvas.
    #[must_use]
    pub fn new() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            content: Content::new(),
            pages: Vec::new(),
        }
    }

    /// Number of closed pages so far.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Assembles the document and writes it to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn finish(self, path: &Path) -> RenderResult<()> {
        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        let font_id = Ref::new(3);

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(page_tree_id);

        let media_box = Rect::new(
            0.0,
            0.0,
            to_f32(self.page_size.0),
            to_f32(self.page_size.1),
        );

        let mut next_id = 4;
        let mut page_ids = Vec::with_capacity(self.pages.len());
        for stream in &self.pages {
            let page_id = Ref::new(next_id);
            let content_id = Ref::new(next_id + 1);
            next_id += 2;
            page_ids.push(page_id);

            let mut page = pdf.page(page_id);
            page.media_box(media_box);
            page.parent(page_tree_id);
            page.contents(content_id);
            page.resources().fonts().pair(FONT_NAME, font_id);
            page.finish();

            pdf.stream(content_id, stream);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let count = self.pages.len() as i32;
        pdf.pages(page_tree_id).kids(page_ids).count(count);
        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        std::fs::write(path, pdf.finish()).map_err(|e| RenderError::file_write(path, e))
    }
}

impl Canvas for PdfCanvas {
    fn set_page_size(&mut self, width: f64, height: f64) {
        self.page_size = (width, height);
    }

    fn set_fill(&mut self, color: Rgb) {
        self.content
            .set_fill_rgb(to_f32(color.r), to_f32(color.g), to_f32(color.b));
    }

    fn fill_polygon(&mut self, corners: &[(f64, f64)]) {
        let Some((first, rest)) = corners.split_first() else {
            return;
        };
        self.content.move_to(to_f32(first.0), to_f32(first.1));
        for corner in rest {
            self.content.line_to(to_f32(corner.0), to_f32(corner.1));
        }
        // The fill operator closes the subpath itself; no stroke is drawn.
        self.content.fill_nonzero();
    }

    fn draw_centred_text(&mut self, x: f64, y: f64, size: f64, text: &str) {
        let left = x - font::text_width(text, size) / 2.0;
        self.content.begin_text();
        self.content.set_font(FONT_NAME, to_f32(size));
        self.content.next_line(to_f32(left), to_f32(y));
        self.content.show(Str(text.as_bytes()));
        self.content.end_text();
    }

    fn end_page(&mut self) {
        let content = std::mem::replace(&mut self.content, Content::new());
        self.pages.push(content.finish());
    }
}

/// Narrows board coordinates to the f32 the PDF writer expects.
#[allow(clippy::cast_possible_truncation)]
fn to_f32(value: f64) -> f32 {
    value as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_closed_pages() {
        let mut canvas = PdfCanvas::new();
        assert_eq!(canvas.page_count(), 0);

        canvas.set_page_size(100.0, 55.0);
        canvas.set_fill(Rgb::new(0.0, 0.0, 0.0));
        canvas.fill_polygon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        canvas.end_page();
        canvas.draw_centred_text(50.0, 52.0, 1.1, "V = 10k, N = R1");
        canvas.end_page();

        assert_eq!(canvas.page_count(), 2);
    }

    #[test]
    fn empty_polygon_is_ignored() {
        let mut canvas = PdfCanvas::new();
        canvas.fill_polygon(&[]);
        canvas.end_page();
        assert_eq!(canvas.page_count(), 1);
    }

    #[test]
    fn writes_a_pdf_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");

        let mut canvas = PdfCanvas::new();
        canvas.set_page_size(100.0, 55.0);
        canvas.set_fill(Rgb::new(0.827, 0.827, 0.827));
        canvas.fill_polygon(&[(10.0, 10.0), (20.0, 10.0), (20.0, 20.0), (10.0, 20.0)]);
        canvas.draw_centred_text(50.0, 52.25, 1.1, "V = 10k, N = R1");
        canvas.end_page();
        canvas.finish(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
