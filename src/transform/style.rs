//! Style preset application.

use image::RgbImage;

use crate::enhance::Enhancer;
use crate::filter::apply_filter;
use crate::types::StylePreset;

/// Applies a style preset's enhancements to an image.
pub struct StyleTransform;

impl StyleTransform {
    /// Apply saturation, brightness and contrast (in that order), then the
    /// preset's post-filter.
    ///
    /// An absent preset is the identity.
    pub fn apply(img: &RgbImage, preset: Option<&StylePreset>) -> RgbImage {
        let Some(preset) = preset else {
            return img.clone();
        };

        let styled = Enhancer::Color.apply(img, preset.saturation);
        let styled = Enhancer::Brightness.apply(&styled, preset.brightness);
        let styled = Enhancer::Contrast.apply(&styled, preset.contrast);

        apply_filter(&styled, preset.filter)
    }
}
