//! Factor-based image enhancers.
//!
//! Every enhancer builds a reference ("degenerate") image and blends the
//! input against it: `out = reference + factor * (input - reference)`.
//! A factor of 0 yields the reference, 1 yields the input unchanged and
//! values above 1 extrapolate away from the reference.

use image::{Rgb, RgbImage};

use crate::filter::Kernel;

/// Reference-image strategy for a blend enhancement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enhancer {
    /// Blend against the greyscale version of the image (saturation).
    Color,
    /// Blend against black.
    Brightness,
    /// Blend against a flat grey at the image's mean luma.
    Contrast,
    /// Blend against a smoothed copy of the image.
    Sharpness,
}

impl Enhancer {
    /// Enhance an image by `factor`, returning a new image.
    pub fn apply(self, img: &RgbImage, factor: f32) -> RgbImage {
        let reference = self.reference(img);
        blend(&reference, img, factor)
    }

    fn reference(self, img: &RgbImage) -> RgbImage {
        let (width, height) = img.dimensions();
        match self {
            Enhancer::Color => {
                let mut grey = img.clone();
                for px in grey.pixels_mut() {
                    let l = luma(px);
                    *px = Rgb([l, l, l]);
                }
                grey
            }
            Enhancer::Brightness => RgbImage::new(width, height),
            Enhancer::Contrast => {
                let mean = mean_luma(img);
                RgbImage::from_pixel(width, height, Rgb([mean, mean, mean]))
            }
            Enhancer::Sharpness => Kernel::SMOOTH.apply(img),
        }
    }
}

/// ITU-R 601-2 luma transform with fixed-point rounding.
pub fn luma(px: &Rgb<u8>) -> u8 {
    let [r, g, b] = px.0;
    let l = (r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16;
    l as u8
}

/// Mean luma of an image, rounded to the nearest integer.
///
/// Returns 0 for an empty image.
pub fn mean_luma(img: &RgbImage) -> u8 {
    let count = img.width() as u64 * img.height() as u64;
    if count == 0 {
        return 0;
    }
    let total: u64 = img.pixels().map(|px| luma(px) as u64).sum();
    (total as f64 / count as f64 + 0.5).floor().min(255.0) as u8
}

/// Linear blend between `reference` and `img`.
///
/// Results are truncated toward zero after clamping to `0..=255`. Both
/// images must share dimensions.
pub fn blend(reference: &RgbImage, img: &RgbImage, factor: f32) -> RgbImage {
    debug_assert_eq!(reference.dimensions(), img.dimensions());

    let mut out = img.clone();
    for (dst, base) in out.pixels_mut().zip(reference.pixels()) {
        for c in 0..3 {
            let from = base.0[c] as f32;
            let to = dst.0[c] as f32;
            let value = from + factor * (to - from);
            dst.0[c] = if value <= 0.0 {
                0
            } else if value >= 255.0 {
                255
            } else {
                value as u8
            };
        }
    }
    out
}
