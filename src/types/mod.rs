//! Core domain types for decor.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGB colour swatches
//! - `Palette` - Ordered dominant-colour lists
//! - `StylePreset` - Enhancement factors and post-filter of one style

mod colour;
mod palette;
mod preset;

pub use colour::Colour;
pub use palette::Palette;
pub use preset::{Category, FilterKind, StylePreset};
