//! Colour analysis of styled images.
//!
//! Clusters pixel colours into a small palette and renders palettes as
//! swatch strips.

mod kmeans;
mod strip;

pub use kmeans::{
    extract_dominant_colors, ClusterOptions, PaletteExtractor, DEFAULT_COLORS, MAX_COLORS,
};
pub use strip::{render_palette_strip, DEFAULT_STRIP_HEIGHT, DEFAULT_STRIP_WIDTH};
