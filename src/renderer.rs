//! Icon rendering engine.
//!
//! [`IconRenderer`] turns a target pixel size into a finished raster: it
//! fills the background, draws the outlined disc, draws the pen stroke, and
//! optionally PNG-encodes the result to disk.
//!
//! # Example
//!
//! ```
//! use quill_icons::IconRenderer;
//!
//! let renderer = IconRenderer::default();
//! let img = renderer.render(192).unwrap();
//! assert_eq!(img.dimensions(), (192, 192));
//! ```

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::canvas::Canvas;
use crate::color::IconPalette;
use crate::error::RenderError;
use crate::geometry::IconGeometry;

// ============================================================================
// IconRenderer
// ============================================================================

/// Renders the application icon at arbitrary sizes.
///
/// The renderer holds only a color palette; each render call owns its canvas
/// exclusively and releases it when the call returns, so a single renderer
/// can produce any number of sizes.
#[derive(Debug, Clone, Default)]
pub struct IconRenderer {
    palette: IconPalette,
}

impl IconRenderer {
    /// Creates a renderer with the given palette.
    pub fn new(palette: IconPalette) -> Self {
        Self { palette }
    }

    /// Returns the palette used for rendering.
    pub fn palette(&self) -> &IconPalette {
        &self.palette
    }

    /// Renders the icon at `size x size` pixels.
    ///
    /// Rendering is deterministic: the same size and palette always produce
    /// a pixel-identical raster. Returns [`RenderError::InvalidSize`] when
    /// `size` is zero.
    pub fn render(&self, size: u32) -> Result<RgbImage, RenderError> {
        if size == 0 {
            return Err(RenderError::InvalidSize);
        }

        let geo = IconGeometry::for_size(size);
        let mut canvas = Canvas::new(size, self.palette.background);

        canvas.fill_disc(
            geo.disc,
            self.palette.fill,
            self.palette.outline,
            geo.outline_width,
        );
        canvas.stroke_line(
            geo.pen_start,
            geo.pen_end,
            self.palette.stroke,
            geo.pen_width,
        );

        Ok(canvas.into_image())
    }

    /// Renders the icon and writes it to `path` as a PNG, overwriting any
    /// existing file.
    ///
    /// The image is encoded in memory first so a failed encode never leaves
    /// a truncated file behind.
    pub fn render_to_file(&self, size: u32, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        let img = self.render(size)?;

        let mut png = Vec::new();
        img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|source| RenderError::Encode {
                path: path.to_owned(),
                source,
            })?;

        fs::write(path, &png).map_err(|source| RenderError::Io {
            path: path.to_owned(),
            source,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_dimensions_match_size() {
        let renderer = IconRenderer::default();
        for size in [1, 16, 192, 512] {
            let img = renderer.render(size).unwrap();
            assert_eq!(img.dimensions(), (size, size));
        }
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = IconRenderer::default().render(0).unwrap_err();
        assert!(matches!(err, RenderError::InvalidSize));
    }

    #[test]
    fn corner_is_background() {
        let img = IconRenderer::default().render(192).unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [0x1a, 0x16, 0x25]);
        assert_eq!(img.get_pixel(191, 191).0, [0x1a, 0x16, 0x25]);
    }

    #[test]
    fn center_is_overdrawn_by_pen_stroke() {
        // The pen segment passes through the canvas center, so the center
        // pixel is white rather than the disc fill.
        let img = IconRenderer::default().render(192).unwrap();
        assert_eq!(img.get_pixel(96, 96).0, [255, 255, 255]);
    }

    #[test]
    fn disc_outline_visible_at_192() {
        let img = IconRenderer::default().render(192).unwrap();
        // Top of the disc bounding box [24,24,168,168].
        assert_eq!(img.get_pixel(96, 24).0, [0xec, 0x48, 0x99]);
        assert_eq!(img.get_pixel(96, 23).0, [0x1a, 0x16, 0x25]);
    }

    #[test]
    fn disc_regions_at_512() {
        let img = IconRenderer::default().render(512).unwrap();
        // Bounding box [64,64,448,448]: outline at the top edge, background
        // just outside, fill inside the ring.
        assert_eq!(img.get_pixel(256, 64).0, [0xec, 0x48, 0x99]);
        assert_eq!(img.get_pixel(256, 63).0, [0x1a, 0x16, 0x25]);
        assert_eq!(img.get_pixel(256, 100).0, [0xa8, 0x55, 0xf7]);
    }

    #[test]
    fn pen_endpoints_at_512() {
        let img = IconRenderer::default().render(512).unwrap();
        // Segment (231,170) -> (281,341), width 25.
        assert_eq!(img.get_pixel(231, 170).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(281, 341).0, [255, 255, 255]);
    }

    #[test]
    fn render_is_deterministic() {
        let renderer = IconRenderer::default();
        let a = renderer.render(192).unwrap();
        let b = renderer.render(192).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn custom_palette_changes_background() {
        let palette = IconPalette::from_hex("#000000", "#ff0000", "#00ff00", "#0000ff").unwrap();
        let img = IconRenderer::new(palette).render(64).unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn render_to_file_writes_decodable_png() {
        let renderer = IconRenderer::default();
        let path = std::env::temp_dir().join(format!("quill-icons-test-{}.png", std::process::id()));

        renderer.render_to_file(192, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (192, 192));
        assert_eq!(decoded.get_pixel(0, 0).0, [0x1a, 0x16, 0x25]);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn render_to_file_unwritable_path_errors() {
        let renderer = IconRenderer::default();
        let err = renderer
            .render_to_file(16, "/nonexistent-dir/icon.png")
            .unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
    }
}
