//! quill-icons: Procedural PWA icon generator
//!
//! This crate renders the application's launcher icons — a purple disc with
//! a pink outline and a white pen stroke on a dark background — entirely in
//! code, at any square pixel size, and writes them out as PNG files.
//!
//! # Example
//!
//! ```no_run
//! use quill_icons::{IconRenderer, RenderPlan};
//!
//! // One-off render of a single size.
//! let renderer = IconRenderer::default();
//! renderer.render_to_file(192, "icon-192.png").unwrap();
//!
//! // Or run a whole plan (the default reproduces the reference
//! // invocation: icon-192.png and icon-512.png).
//! let written = RenderPlan::new().execute().unwrap();
//! assert_eq!(written.len(), 2);
//! ```
//!
//! # Determinism
//!
//! All geometry is derived from the target size with integer floor
//! division, and drawing uses exact per-pixel coverage tests, so the same
//! inputs always produce byte-identical PNG output.

mod canvas;
mod color;
mod error;
mod geometry;
mod plan;
mod renderer;

pub use canvas::Canvas;
pub use color::{IconPalette, parse_hex, to_hex};
pub use error::RenderError;
pub use geometry::{BoundingBox, IconGeometry};
pub use plan::{PaletteSpec, RenderPlan};
pub use renderer::IconRenderer;
