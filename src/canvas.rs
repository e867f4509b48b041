//! Off-screen RGB canvas that polylines are stroked onto.

use crate::polyline::Polyline;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_antialiased_line_segment_mut;
use imageproc::pixelops::interpolate;
use log::{trace, warn};

/// Background of a fresh canvas.
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Margin, in pixels, kept around the canvas when clipping segments.
/// Clipped endpoints always fit in `i32`.
const CLIP_MARGIN: f64 = 2.0;

/// Solid stroke style. Strokes are always one pixel wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pen {
    pub color: Rgb<u8>,
}

impl Pen {
    pub fn new(color: Rgb<u8>) -> Self {
        Pen { color }
    }

    pub fn black() -> Self {
        Pen::new(Rgb([0, 0, 0]))
    }
}

/// Mutable pixel buffer that strokes are drawn onto before display.
///
/// Coordinates are in pixels with the origin at the top-left corner.
/// Anything drawn outside the buffer is discarded.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Creates a white canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Canvas {
            image: RgbImage::from_pixel(width, height, BACKGROUND),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Returns the pixel at (x, y), or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    /// Strokes a connected line through every point of `polyline`.
    ///
    /// A trailing unpaired value is ignored, and a polyline with fewer than
    /// two points draws nothing.
    pub fn draw_polyline(&mut self, polyline: &Polyline, pen: &Pen) {
        if let Some(value) = polyline.dangling_value() {
            warn!(
                "Polyline has an odd number of values, ignoring trailing {}",
                value
            );
        }

        let points: Vec<(f64, f64)> = polyline.points().collect();
        for segment in points.windows(2) {
            self.draw_segment(segment[0], segment[1], pen);
        }
    }

    /// Strokes a single antialiased segment.
    ///
    /// Endpoints are rounded to whole pixels and drawn at full intensity.
    pub fn draw_segment(&mut self, from: (f64, f64), to: (f64, f64), pen: &Pen) {
        if ![from.0, from.1, to.0, to.1].iter().all(|v| v.is_finite()) {
            warn!("Skipping segment with non-finite endpoint {:?} -> {:?}", from, to);
            return;
        }

        let bounds = (
            -CLIP_MARGIN,
            -CLIP_MARGIN,
            f64::from(self.width()) + CLIP_MARGIN,
            f64::from(self.height()) + CLIP_MARGIN,
        );
        match clip_segment(from, to, bounds) {
            Some((from, to)) => self.stroke(from, to, pen.color),
            None => trace!("Segment {:?} -> {:?} is off canvas", from, to),
        }
    }

    /// Hands a clipped segment to the antialiased line primitive.
    fn stroke(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb<u8>) {
        let start = (from.0.round() as i32, from.1.round() as i32);
        let end = (to.0.round() as i32, to.1.round() as i32);
        draw_antialiased_line_segment_mut(&mut self.image, start, end, color, interpolate);
    }
}

/// Liang-Barsky clipping of a segment to `(min_x, min_y, max_x, max_y)`.
fn clip_segment(
    from: (f64, f64),
    to: (f64, f64),
    (min_x, min_y, max_x, max_y): (f64, f64, f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    for (p, q) in [
        (-dx, from.0 - min_x),
        (dx, max_x - from.0),
        (-dy, from.1 - min_y),
        (dy, max_y - from.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
        }
    }

    if t0 > t1 {
        return None;
    }

    Some((
        (from.0 + t0 * dx, from.1 + t0 * dy),
        (from.0 + t1 * dx, from.1 + t1 * dy),
    ))
}
