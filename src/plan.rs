//! Serializable render plans.
//!
//! A [`RenderPlan`] captures everything one generator run needs — the target
//! sizes, the output directory, the file naming stem, and the palette — in a
//! JSON-friendly format, so icon variants can be described in a config file
//! instead of recompiled.
//!
//! # Example
//!
//! ```
//! use quill_icons::RenderPlan;
//!
//! let plan = RenderPlan::new()
//!     .with_sizes(vec![192, 512])
//!     .with_file_stem("icon");
//!
//! assert_eq!(plan.file_name(192), "icon-192.png");
//!
//! let json = plan.to_json().unwrap();
//! let restored = RenderPlan::from_json(&json).unwrap();
//! assert_eq!(restored.sizes, vec![192, 512]);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::{IconPalette, to_hex};
use crate::error::RenderError;
use crate::renderer::IconRenderer;

// ============================================================================
// PaletteSpec
// ============================================================================

/// Serializable palette, with colors as `#rrggbb` hex strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaletteSpec {
    /// Canvas background color.
    #[serde(default = "default_background")]
    pub background: String,

    /// Disc fill color.
    #[serde(default = "default_fill")]
    pub fill: String,

    /// Disc outline color.
    #[serde(default = "default_outline")]
    pub outline: String,

    /// Pen stroke color.
    #[serde(default = "default_stroke")]
    pub stroke: String,
}

impl PaletteSpec {
    /// Parses the hex strings into a concrete [`IconPalette`].
    pub fn resolve(&self) -> Result<IconPalette, RenderError> {
        IconPalette::from_hex(&self.background, &self.fill, &self.outline, &self.stroke)
    }
}

impl Default for PaletteSpec {
    fn default() -> Self {
        Self::from(&IconPalette::default())
    }
}

impl From<&IconPalette> for PaletteSpec {
    fn from(palette: &IconPalette) -> Self {
        Self {
            background: to_hex(palette.background),
            fill: to_hex(palette.fill),
            outline: to_hex(palette.outline),
            stroke: to_hex(palette.stroke),
        }
    }
}

fn default_background() -> String {
    to_hex(IconPalette::default().background)
}

fn default_fill() -> String {
    to_hex(IconPalette::default().fill)
}

fn default_outline() -> String {
    to_hex(IconPalette::default().outline)
}

fn default_stroke() -> String {
    to_hex(IconPalette::default().stroke)
}

// ============================================================================
// RenderPlan
// ============================================================================

/// A complete description of one generator run.
///
/// The default plan reproduces the reference invocation: 192px and 512px
/// icons named `icon-192.png` and `icon-512.png` in the working directory.
///
/// # JSON Format
///
/// ```json
/// {
///   "sizes": [192, 512],
///   "outputDir": ".",
///   "fileStem": "icon",
///   "palette": {
///     "background": "#1a1625",
///     "fill": "#a855f7",
///     "outline": "#ec4899",
///     "stroke": "#ffffff"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    /// Target icon sizes in pixels.
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u32>,

    /// Directory the PNG files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File name stem; a size `s` produces `{stem}-{s}.png`.
    #[serde(default = "default_file_stem")]
    pub file_stem: String,

    /// Colors used for rendering.
    #[serde(default)]
    pub palette: PaletteSpec,
}

impl Default for RenderPlan {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            output_dir: default_output_dir(),
            file_stem: default_file_stem(),
            palette: PaletteSpec::default(),
        }
    }
}

fn default_sizes() -> Vec<u32> {
    vec![192, 512]
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_file_stem() -> String {
    "icon".to_owned()
}

impl RenderPlan {
    /// Creates the default plan (the reference invocation).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target sizes.
    pub fn with_sizes(mut self, sizes: Vec<u32>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the file name stem.
    pub fn with_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = stem.into();
        self
    }

    /// Sets the palette.
    pub fn with_palette(mut self, palette: PaletteSpec) -> Self {
        self.palette = palette;
        self
    }

    /// Returns the file name for a given size, e.g. `icon-192.png`.
    pub fn file_name(&self, size: u32) -> String {
        format!("{}-{}.png", self.file_stem, size)
    }

    /// Returns the full output path for a given size.
    pub fn output_path(&self, size: u32) -> PathBuf {
        self.output_dir.join(self.file_name(size))
    }

    /// Renders every size in the plan sequentially.
    ///
    /// Returns the written paths in plan order. The first failure aborts the
    /// run; files already written stay on disk.
    pub fn execute(&self) -> Result<Vec<PathBuf>, RenderError> {
        let renderer = IconRenderer::new(self.palette.resolve()?);
        let mut written = Vec::with_capacity(self.sizes.len());

        for &size in &self.sizes {
            let path = self.output_path(size);
            renderer.render_to_file(size, &path)?;
            written.push(path);
        }

        Ok(written)
    }

    /// Serializes the plan to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the plan to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a plan from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads a plan from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| RenderError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&data).map_err(|source| RenderError::Io {
            path: path.to_owned(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, source),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
