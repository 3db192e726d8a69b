//! Rendering module for decor.
//!
//! Encodes pipeline images as PNG, in memory or on disk.

mod png;

pub use png::{encode_png, write_png};
