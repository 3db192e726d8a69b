//! decor - Design-style presets and colour palettes
//!
//! A library for restyling room and facade photos with fixed enhancement
//! presets and summarizing the result as a small palette of dominant
//! colours.

pub mod catalog;
pub mod cli;
pub mod colors;
pub mod config;
pub mod enhance;
pub mod error;
pub mod filter;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod transform;
pub mod types;

pub use catalog::StylePresetCatalog;
pub use colors::{extract_dominant_colors, render_palette_strip, ClusterOptions, PaletteExtractor};
pub use config::Config;
pub use enhance::Enhancer;
pub use error::{DecorError, Result};
pub use filter::Kernel;
pub use pipeline::{DesignPipeline, DesignResult, PipelineOptions};
pub use render::{encode_png, write_png};
pub use transform::{normalize, QualityEnhancer, StyleTransform};
pub use types::{Category, Colour, FilterKind, Palette, StylePreset};
