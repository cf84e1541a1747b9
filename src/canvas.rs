//! RGB raster canvas and the drawing primitives used for icons.
//!
//! The canvas wraps an [`image::RgbImage`] and draws shapes with per-pixel
//! coverage tests against pixel centers. This keeps the output fully
//! deterministic: no anti-aliasing, no floating-point accumulation across
//! pixels, just a distance test per pixel.

use image::RgbImage;
use palette::Srgb;

use crate::color::to_pixel;
use crate::geometry::BoundingBox;

// ============================================================================
// Canvas
// ============================================================================

/// A square mutable RGB raster.
///
/// Created pre-filled with a background color, drawn on by the shape
/// primitives, and finally consumed via [`into_image`](Self::into_image)
/// for encoding. Each canvas is owned by a single render call.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
    size: u32,
}

impl Canvas {
    /// Creates a `size x size` canvas filled with the background color.
    pub fn new(size: u32, background: Srgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(size, size, to_pixel(background)),
            size,
        }
    }

    /// Returns the canvas side length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the pixel at the given coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }

    /// Consumes the canvas and returns the underlying raster.
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Draws a filled circle inscribed in `bbox` with an inner outline ring.
    ///
    /// A pixel belongs to the disc when its center lies within the inscribed
    /// radius; the outermost `outline_width` pixels of that radius form the
    /// outline ring. Geometry outside the canvas clips at the edges.
    pub fn fill_disc(
        &mut self,
        bbox: BoundingBox,
        fill: Srgb<u8>,
        outline: Srgb<u8>,
        outline_width: u32,
    ) {
        let (cx, cy) = bbox.center();
        let radius = bbox.inscribed_radius();
        let inner = radius - outline_width as f32;

        let fill_px = to_pixel(fill);
        let outline_px = to_pixel(outline);

        let x_end = bbox.x1.min(self.size);
        let y_end = bbox.y1.min(self.size);

        for y in bbox.y0.min(self.size)..y_end {
            for x in bbox.x0.min(self.size)..x_end {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist <= radius {
                    let px = if dist > inner { outline_px } else { fill_px };
                    self.image.put_pixel(x, y, px);
                }
            }
        }
    }

    /// Draws a straight line segment with the given stroke width.
    ///
    /// A pixel is covered when its center lies within `width / 2` of the
    /// segment. A zero width draws nothing.
    pub fn stroke_line(
        &mut self,
        from: (u32, u32),
        to: (u32, u32),
        color: Srgb<u8>,
        width: u32,
    ) {
        if width == 0 {
            return;
        }

        let (ax, ay) = (from.0 as f32, from.1 as f32);
        let (bx, by) = (to.0 as f32, to.1 as f32);
        let half = width as f32 / 2.0;
        let px = to_pixel(color);

        // Scan only the segment's bounding region, padded by the half-width.
        let pad = half.ceil() as u32 + 1;
        let x_min = from.0.min(to.0).saturating_sub(pad);
        let y_min = from.1.min(to.1).saturating_sub(pad);
        let x_max = (from.0.max(to.0) + pad).min(self.size);
        let y_max = (from.1.max(to.1) + pad).min(self.size);

        for y in y_min..y_max {
            for x in x_min..x_max {
                let p = (x as f32 + 0.5, y as f32 + 0.5);
                if distance_to_segment(p, (ax, ay), (bx, by)) <= half {
                    self.image.put_pixel(x, y, px);
                }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Distance from a point to a line segment.
fn distance_to_segment(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (px, py) = p;
    let (ax, ay) = a;
    let (bx, by) = b;

    let abx = bx - ax;
    let aby = by - ay;
    let len_sq = abx * abx + aby * aby;

    // Degenerate segment: distance to the single point.
    if len_sq == 0.0 {
        let dx = px - ax;
        let dy = py - ay;
        return (dx * dx + dy * dy).sqrt();
    }

    let t = (((px - ax) * abx + (py - ay) * aby) / len_sq).clamp(0.0, 1.0);
    let dx = px - (ax + t * abx);
    let dy = py - (ay + t * aby);
    (dx * dx + dy * dy).sqrt()
}

// ============================================================================
// Tests
// ============================================================================
