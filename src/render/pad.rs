//! Pad rendering: package-local geometry → filled page-space polygon.

use crate::board::{BoardInfo, Component, Pad};
use crate::geom;

use super::canvas::Canvas;
use super::sheet::SheetStyle;

/// Draws one pad of a component as a solid silhouette on the current page.
///
/// The corner pipeline, innermost transform first:
///
/// 1. corners at (±width/2, ±height/2) in the pad's own frame
/// 2. rotate by the pad angle
/// 3. translate by the pad offset within the package
/// 4. rotate by the component angle
/// 5. translate by the component's board position
/// 6. translate by (−xmin, −ymin) so the board's lower-left corner sits at
///    the page origin
///
/// All inputs are validated during extraction, so this cannot fail.
pub fn render_pad(
    canvas: &mut dyn Canvas,
    board: &BoardInfo,
    component: &Component,
    pad: &Pad,
    highlight: bool,
    style: &SheetStyle,
) {
    let corners = pad_corners(board, component, pad);
    let tone = if highlight {
        style.highlight
    } else {
        style.muted
    };
    canvas.set_fill(tone);
    canvas.fill_polygon(&corners);
}

/// Computes the four page-space corners of a pad.
#[must_use]
pub fn pad_corners(board: &BoardInfo, component: &Component, pad: &Pad) -> [(f64, f64); 4] {
    let half_w = pad.width / 2.0;
    let half_h = pad.height / 2.0;
    [
        (-half_w, -half_h),
        (-half_w, half_h),
        (half_w, half_h),
        (half_w, -half_h),
    ]
    .map(|corner| {
        let (x, y) = geom::rotate(corner, pad.angle);
        let (x, y) = geom::rotate((x + pad.x, y + pad.y), component.angle);
        (
            x + component.x - board.bounds.xmin,
            y + component.y - board.bounds.ymin,
        )
    })
}
