//! Image transformation stages.
//!
//! Each stage borrows its input and returns a new `RgbImage`:
//! - `normalize` - fit into a bounding box, convert to RGB
//! - `StyleTransform` - apply a style preset
//! - `QualityEnhancer` - fixed sharpen and contrast pass

mod normalize;
mod quality;
mod style;

pub use normalize::{fit_dimensions, normalize, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH};
pub use quality::QualityEnhancer;
pub use style::StyleTransform;
