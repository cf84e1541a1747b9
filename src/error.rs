//! Error types for icon rendering and plan execution.

use std::path::PathBuf;

/// Errors that can occur while rendering or writing icons.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The requested icon size is zero.
    ///
    /// The geometry derivation divides the size down to margins and stroke
    /// widths; a zero-sized canvas has no meaningful geometry, so it is
    /// rejected up front instead of producing a degenerate 0x0 image.
    #[error("icon size must be at least 1 pixel")]
    InvalidSize,

    /// A color string could not be parsed as a hex color.
    #[error("invalid hex color {value:?}")]
    Color {
        /// The string that failed to parse.
        value: String,
        #[source]
        source: palette::rgb::FromHexError,
    },

    /// The rendered image could not be PNG-encoded.
    #[error("failed to encode PNG for {path}")]
    Encode {
        /// Destination the encode was targeting.
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The destination path could not be created or written.
    #[error("failed to write {path}")]
    Io {
        /// Destination path.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
