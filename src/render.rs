//! Rendering of a line set onto a fixed-size canvas.
//!
//! The canvas size is a constant. Coordinates are not measured or fitted:
//! whatever falls outside 1800x1000 after zooming is simply not visible.

use crate::canvas::{Canvas, Pen};
use crate::polyline::LineSet;
use log::debug;

/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 1800;

/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 1000;

/// Draws every polyline, in order, with a black pen on a fresh canvas.
///
/// Later polylines paint over earlier ones where they overlap.
pub fn render(lines: &LineSet) -> Canvas {
    let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    let pen = Pen::black();

    for (idx, line) in lines.iter().enumerate() {
        debug!("Drawing polyline {} ({} values)", idx + 1, line.len());
        canvas.draw_polyline(line, &pen);
    }

    canvas
}
