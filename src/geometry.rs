//! Integer shape derivation for icon rendering.
//!
//! Every coordinate in the icon is derived deterministically from the target
//! pixel size using floor division, so that the same size always yields the
//! same geometry.

// ============================================================================
// BoundingBox
// ============================================================================

/// An axis-aligned `[x0, y0, x1, y1]` rectangle in pixel coordinates.
///
/// Used to define the extent of the inscribed disc. The right/bottom edges
/// are inclusive of the shape extent, matching the bounding-box convention
/// of 2D drawing APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl BoundingBox {
    /// Creates a bounding box from its corner coordinates.
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Returns the center of the box in sub-pixel coordinates.
    pub fn center(&self) -> (f32, f32) {
        (
            (self.x0 + self.x1) as f32 / 2.0,
            (self.y0 + self.y1) as f32 / 2.0,
        )
    }

    /// Returns the radius of the circle inscribed in this box.
    ///
    /// For a non-square box this is half the smaller dimension.
    pub fn inscribed_radius(&self) -> f32 {
        let w = (self.x1 - self.x0) as f32;
        let h = (self.y1 - self.y0) as f32;
        w.min(h) / 2.0
    }
}

// ============================================================================
// IconGeometry
// ============================================================================

/// All shape parameters for one icon, derived from its pixel size.
///
/// The disc is inscribed with a margin of `size / 8` on each side; the pen
/// stroke runs from one third down the canvas to two thirds, leaning right,
/// with a width of `size / 20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    /// Target canvas size (width and height) in pixels.
    pub size: u32,

    /// Margin between the canvas edge and the disc, `size / 8`.
    pub margin: u32,

    /// Bounding box of the disc.
    pub disc: BoundingBox,

    /// Outline ring width, `size / 40` clamped to at least 1 so the outline
    /// never silently disappears on small icons.
    pub outline_width: u32,

    /// Pen stroke width, `size / 20`.
    pub pen_width: u32,

    /// Pen stroke start point.
    pub pen_start: (u32, u32),

    /// Pen stroke end point.
    pub pen_end: (u32, u32),
}

impl IconGeometry {
    /// Derives the geometry for the given icon size.
    ///
    /// All values use integer floor division. The caller is responsible for
    /// ensuring `size >= 1`; see [`IconRenderer::render`](crate::IconRenderer::render).
    pub fn for_size(size: u32) -> Self {
        let margin = size / 8;
        let disc = BoundingBox::new(margin, margin, size - margin, size - margin);

        let pen_width = size / 20;
        let pen_start = (size / 2 - pen_width.min(size / 2), size / 3);
        let pen_end = ((size / 2 + pen_width).min(size), size * 2 / 3);

        Self {
            size,
            margin,
            disc,
            outline_width: (size / 40).max(1),
            pen_width,
            pen_start,
            pen_end,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_at_192() {
        let geo = IconGeometry::for_size(192);
        assert_eq!(geo.margin, 24);
        assert_eq!(geo.disc, BoundingBox::new(24, 24, 168, 168));
        assert_eq!(geo.outline_width, 4);
        assert_eq!(geo.pen_width, 9);
        assert_eq!(geo.pen_start, (87, 64));
        assert_eq!(geo.pen_end, (105, 128));
    }

    #[test]
    fn geometry_at_512() {
        let geo = IconGeometry::for_size(512);
        assert_eq!(geo.margin, 64);
        assert_eq!(geo.disc, BoundingBox::new(64, 64, 448, 448));
        assert_eq!(geo.outline_width, 12);
        assert_eq!(geo.pen_width, 25);
        assert_eq!(geo.pen_start, (231, 170));
        assert_eq!(geo.pen_end, (281, 341));
    }

    #[test]
    fn disc_is_centered() {
        for size in [48, 192, 500, 512] {
            let geo = IconGeometry::for_size(size);
            let (cx, cy) = geo.disc.center();
            assert_eq!(cx, size as f32 / 2.0);
            assert_eq!(cy, size as f32 / 2.0);
        }
    }

    #[test]
    fn outline_width_clamps_to_one() {
        // Below 40px the floor division would produce 0; the outline is
        // clamped to 1px instead of vanishing.
        let geo = IconGeometry::for_size(32);
        assert_eq!(geo.outline_width, 1);
    }

    #[test]
    fn inscribed_radius_at_192() {
        let geo = IconGeometry::for_size(192);
        assert_eq!(geo.disc.inscribed_radius(), 72.0);
    }

    #[test]
    fn tiny_sizes_do_not_underflow() {
        // Degenerate but valid: geometry stays within the canvas.
        for size in 1..=16 {
            let geo = IconGeometry::for_size(size);
            assert!(geo.disc.x1 <= size);
            assert!(geo.pen_end.0 <= size);
        }
    }
}
