//! The output surface consumed by the renderers.
//!
//! The layout driver and pad renderer only ever talk to this trait, which
//! is the full set of drawing operations the sheets need. [`PdfCanvas`]
//! implements it for real output; tests substitute a recording double.
//!
//! [`PdfCanvas`]: super::pdf::PdfCanvas

use serde::Deserialize;

/// An RGB fill colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rgb {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
}

impl Rgb {
    /// Creates a colour from components.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Whether all components are within `0.0..=1.0`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }
}

/// A multi-page vector drawing surface.
///
/// Pages accumulate in order; `end_page` closes the current one. The page
/// size is fixed for the whole document and must be set before drawing.
pub trait Canvas {
    /// Sets the fixed page size for the document, in the same units as the
    /// board coordinates.
    fn set_page_size(&mut self, width: f64, height: f64);

    /// Sets the fill colour for subsequent polygons.
    fn set_fill(&mut self, color: Rgb);

    /// Draws a filled polygon through the given corners. No stroke.
    fn fill_polygon(&mut self, corners: &[(f64, f64)]);

    /// Draws a single line of text horizontally centred on `x`, with its
    /// baseline at `y`.
    fn draw_centred_text(&mut self, x: f64, y: f64, size: f64, text: &str);

    /// Closes the current page and starts a new one.
    fn end_page(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_validity() {
        assert!(Rgb::new(0.0, 0.5, 1.0).is_valid());
        assert!(!Rgb::new(-0.1, 0.5, 1.0).is_valid());
        assert!(!Rgb::new(0.0, 0.5, 1.1).is_valid());
    }
}
