//! Fixed final quality pass.

use image::RgbImage;

use crate::enhance::Enhancer;

/// Sharpness factor of the quality pass.
pub const SHARPNESS: f32 = 1.2;
/// Contrast factor of the quality pass.
pub const CONTRAST: f32 = 1.1;

/// Applies the fixed sharpen-then-contrast pass run after every styling.
pub struct QualityEnhancer;

impl QualityEnhancer {
    pub fn enhance(img: &RgbImage) -> RgbImage {
        let sharpened = Enhancer::Sharpness.apply(img, SHARPNESS);
        Enhancer::Contrast.apply(&sharpened, CONTRAST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_flat_image_is_unchanged() {
        let img = RgbImage::from_pixel(10, 10, Rgb([128, 128, 128]));
        assert_eq!(QualityEnhancer::enhance(&img), img);
    }

    #[test]
    fn test_sharpen_then_contrast() {
        let img = RgbImage::from_fn(6, 6, |x, y| Rgb([(x * 40) as u8, (y * 40) as u8, 90]));
        let expected = Enhancer::Contrast.apply(&Enhancer::Sharpness.apply(&img, 1.2), 1.1);
        assert_eq!(QualityEnhancer::enhance(&img), expected);
    }

    #[test]
    fn test_stretches_two_tone_image() {
        let img = RgbImage::from_fn(4, 1, |x, _| {
            if x < 2 {
                Rgb([100, 100, 100])
            } else {
                Rgb([200, 200, 200])
            }
        });

        // No interior pixels for the 3x3 smooth, so only contrast acts:
        // 150 + 1.1 * (100 - 150) = 95, 150 + 1.1 * 50 = 205
        let out = QualityEnhancer::enhance(&img);
        assert_eq!(out.get_pixel(0, 0).0, [95, 95, 95]);
        assert_eq!(out.get_pixel(3, 0).0, [205, 205, 205]);
    }
}
