//! Sheet layout: one page per (layer, value, prefix) group.

use indexmap::IndexMap;

use crate::board::{BoardInfo, Component};

use super::canvas::{Canvas, Rgb};
use super::pad::render_pad;

/// Visual style of the emitted sheets.
///
/// Defaults reproduce the long-established output: light-grey context pads,
/// black highlights, a heading band one tenth of the board height and a
/// heading font one fifth of the band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetStyle {
    /// Fill tone for context pads outside the current group.
    pub muted: Rgb,

    /// Fill tone for the current group's pads.
    pub highlight: Rgb,

    /// Heading band height as a fraction of the board height.
    pub heading_band_ratio: f64,

    /// Heading font size as a fraction of the band height.
    pub heading_font_ratio: f64,
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            muted: Rgb::new(0.827, 0.827, 0.827),
            highlight: Rgb::new(0.0, 0.0, 0.0),
            heading_band_ratio: 0.1,
            heading_font_ratio: 0.2,
        }
    }
}

/// Emits one page per (value, prefix) group of components resolved to
/// `layer`.
///
/// Page size is the board's bounding box plus the heading band, fixed for
/// the whole document. Values iterate in first-seen board order, prefix
/// groups likewise; member names sort alphabetically within the heading.
/// Values with no component on `layer` produce no page. Within a page every
/// same-layer pad renders muted first, then the group's pads render
/// highlighted on top, so a highlight is never obscured.
pub fn build_sheets(canvas: &mut dyn Canvas, board: &BoardInfo, layer: &str, style: &SheetStyle) {
    let band = board.bounds.height() * style.heading_band_ratio;
    let width = board.bounds.width();
    let height = board.bounds.height() + band;
    canvas.set_page_size(width, height);

    for value in board.values() {
        let Some(members) = board.on_layer_with_value(layer, value) else {
            continue;
        };

        // Partition by name prefix; components without one form their own
        // group.
        let mut groups: IndexMap<Option<&str>, Vec<&Component>> = IndexMap::new();
        for component in members {
            groups
                .entry(component.prefix.as_deref())
                .or_default()
                .push(component);
        }

        for group in groups.values() {
            let mut names: Vec<&str> = group.iter().map(|c| c.name.as_str()).collect();
            names.sort_unstable();
            let heading = format!("V = {value}, N = {}", names.join(","));
            canvas.draw_centred_text(
                width / 2.0,
                height - band / 2.0,
                band * style.heading_font_ratio,
                &heading,
            );

            // Context pass: everything on this layer except the group.
            for component in board.on_layer(layer) {
                if group.iter().any(|m| std::ptr::eq(*m, component)) {
                    continue;
                }
                for pad in &component.pads {
                    render_pad(canvas, board, component, pad, false, style);
                }
            }

            // Highlight pass, drawn last so nothing overlays it.
            for component in group {
                for pad in &component.pads {
                    render_pad(canvas, board, component, pad, true, style);
                }
            }

            tracing::debug!(value, heading = %heading, "Emitted sheet");
            canvas.end_page();
        }
    }
}
