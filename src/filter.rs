//! Fixed convolution kernels used by the post-filters and the sharpness
//! enhancer.
//!
//! Kernels are applied per channel. Pixels closer to the image border than
//! the kernel radius are copied through unchanged, so the output always has
//! the input's dimensions.

use image::RgbImage;

use crate::types::FilterKind;

/// A square convolution kernel with an integer divisor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: &'static [f32],
    scale: f32,
    offset: f32,
}

impl Kernel {
    /// Mild 3x3 low-pass.
    pub const SMOOTH: Kernel = Kernel {
        size: 3,
        weights: &[
            1.0, 1.0, 1.0, //
            1.0, 5.0, 1.0, //
            1.0, 1.0, 1.0,
        ],
        scale: 13.0,
        offset: 0.0,
    };

    /// Stronger 5x5 low-pass.
    pub const SMOOTH_MORE: Kernel = Kernel {
        size: 5,
        weights: &[
            1.0, 1.0, 1.0, 1.0, 1.0, //
            1.0, 5.0, 5.0, 5.0, 1.0, //
            1.0, 5.0, 44.0, 5.0, 1.0, //
            1.0, 5.0, 5.0, 5.0, 1.0, //
            1.0, 1.0, 1.0, 1.0, 1.0,
        ],
        scale: 100.0,
        offset: 0.0,
    };

    /// 3x3 edge emphasis.
    pub const EDGE_ENHANCE: Kernel = Kernel {
        size: 3,
        weights: &[
            -1.0, -1.0, -1.0, //
            -1.0, 10.0, -1.0, //
            -1.0, -1.0, -1.0,
        ],
        scale: 2.0,
        offset: 0.0,
    };

    /// Kernel for a post-filter kind, if it has one.
    pub fn for_filter(kind: FilterKind) -> Option<Kernel> {
        match kind {
            FilterKind::None => None,
            FilterKind::Smooth => Some(Kernel::SMOOTH),
            FilterKind::SmoothStrong => Some(Kernel::SMOOTH_MORE),
            FilterKind::EdgeEnhance => Some(Kernel::EDGE_ENHANCE),
        }
    }

    /// Kernel edge length in pixels.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Convolve an image with this kernel.
    pub fn apply(&self, img: &RgbImage) -> RgbImage {
        let radius = (self.size / 2) as u32;
        let (width, height) = img.dimensions();

        let mut out = img.clone();
        if width <= 2 * radius || height <= 2 * radius {
            return out;
        }

        for y in radius..height - radius {
            for x in radius..width - radius {
                let mut sum = [0.0f32; 3];

                for ky in 0..self.size {
                    for kx in 0..self.size {
                        let weight = self.weights[ky * self.size + kx];
                        let sx = x + kx as u32 - radius;
                        let sy = y + ky as u32 - radius;
                        let px = img.get_pixel(sx, sy).0;
                        for c in 0..3 {
                            sum[c] += px[c] as f32 * weight;
                        }
                    }
                }

                let out_px = out.get_pixel_mut(x, y);
                for c in 0..3 {
                    let value = sum[c] / self.scale + self.offset;
                    out_px.0[c] = value.round().clamp(0.0, 255.0) as u8;
                }
            }
        }

        out
    }
}

/// Apply a post-filter, returning a new image.
pub fn apply_filter(img: &RgbImage, kind: FilterKind) -> RgbImage {
    match Kernel::for_filter(kind) {
        Some(kernel) => kernel.apply(img),
        None => img.clone(),
    }
}
