//! Color handling for icon rendering.
//!
//! Colors are stored as 8-bit sRGB values via [`palette`], parsed from the
//! usual `#rrggbb` hex notation, and converted to [`image`] pixels at the
//! point of drawing.

use palette::Srgb;

use crate::error::RenderError;

// ============================================================================
// Hex parsing
// ============================================================================

/// Parses a `#rrggbb` (or `#rgb`) hex string into an 8-bit sRGB color.
///
/// Wraps [`palette`]'s `FromStr` implementation so that failures carry the
/// offending string in the error.
pub fn parse_hex(value: &str) -> Result<Srgb<u8>, RenderError> {
    value.parse().map_err(|source| RenderError::Color {
        value: value.to_owned(),
        source,
    })
}

/// Formats an 8-bit sRGB color as a `#rrggbb` hex string.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Converts a color to an [`image`] RGB pixel.
pub fn to_pixel(color: Srgb<u8>) -> image::Rgb<u8> {
    image::Rgb([color.red, color.green, color.blue])
}

// ============================================================================
// IconPalette
// ============================================================================

/// The set of colors used to render an icon.
///
/// The defaults reproduce the reference icon: a dark plum background, a
/// purple disc with a pink outline, and a white pen stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconPalette {
    /// Canvas background color.
    pub background: Srgb<u8>,

    /// Disc fill color.
    pub fill: Srgb<u8>,

    /// Disc outline color.
    pub outline: Srgb<u8>,

    /// Pen stroke color.
    pub stroke: Srgb<u8>,
}

impl IconPalette {
    /// Builds a palette from four hex color strings.
    pub fn from_hex(
        background: &str,
        fill: &str,
        outline: &str,
        stroke: &str,
    ) -> Result<Self, RenderError> {
        Ok(Self {
            background: parse_hex(background)?,
            fill: parse_hex(fill)?,
            outline: parse_hex(outline)?,
            stroke: parse_hex(stroke)?,
        })
    }
}

impl Default for IconPalette {
    fn default() -> Self {
        Self {
            background: Srgb::new(0x1a, 0x16, 0x25),
            fill: Srgb::new(0xa8, 0x55, 0xf7),
            outline: Srgb::new(0xec, 0x48, 0x99),
            stroke: Srgb::new(0xff, 0xff, 0xff),
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
    fn parse_default_colors() {
        assert_eq!(parse_hex("#1a1625").unwrap(), Srgb::new(0x1a, 0x16, 0x25));
        assert_eq!(parse_hex("#a855f7").unwrap(), Srgb::new(0xa8, 0x55, 0xf7));
        assert_eq!(parse_hex("#ec4899").unwrap(), Srgb::new(0xec, 0x48, 0x99));
        assert_eq!(parse_hex("#ffffff").unwrap(), Srgb::new(255, 255, 255));
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = parse_hex("#zzz").unwrap_err();
        match err {
            RenderError::Color { value, .. } => assert_eq!(value, "#zzz"),
            other => panic!("expected Color error, got {other:?}"),
        }
    }

    #[test]
    fn hex_roundtrip() {
        let color = Srgb::new(0xa8, 0x55, 0xf7);
        assert_eq!(to_hex(color), "#a855f7");
        assert_eq!(parse_hex(&to_hex(color)).unwrap(), color);
    }

    #[test]
    fn default_palette_matches_reference() {
        let palette = IconPalette::default();
        assert_eq!(to_hex(palette.background), "#1a1625");
        assert_eq!(to_hex(palette.fill), "#a855f7");
        assert_eq!(to_hex(palette.outline), "#ec4899");
        assert_eq!(to_hex(palette.stroke), "#ffffff");
    }

    #[test]
    fn from_hex_builds_palette() {
        let palette = IconPalette::from_hex("#000000", "#ff0000", "#00ff00", "#0000ff").unwrap();
        assert_eq!(palette.background, Srgb::new(0, 0, 0));
        assert_eq!(palette.stroke, Srgb::new(0, 0, 255));
    }

    #[test]
    fn to_pixel_preserves_channels() {
        let pixel = to_pixel(Srgb::new(0x1a, 0x16, 0x25));
        assert_eq!(pixel.0, [0x1a, 0x16, 0x25]);
    }
}
