//! Size and colour-type normalization.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

/// Default bounding box used by the pipeline.
pub const DEFAULT_MAX_WIDTH: u32 = 800;
pub const DEFAULT_MAX_HEIGHT: u32 = 600;

/// Downsize an image to fit inside `max_width` x `max_height`.
///
/// The aspect ratio is preserved and images are never upscaled. The result
/// is always 8-bit RGB; alpha is dropped and greyscale/indexed/16-bit input
/// is expanded.
pub fn normalize(img: &DynamicImage, max_width: u32, max_height: u32) -> RgbImage {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let (out_w, out_h) = fit_dimensions(width, height, max_width, max_height);

    if (out_w, out_h) == (width, height) {
        return rgb;
    }

    imageops::resize(&rgb, out_w, out_h, FilterType::Lanczos3)
}

/// Compute the output size for [`normalize`].
///
/// The limiting side is fitted exactly; the other side is rounded to
/// whichever of floor/ceil keeps the aspect ratio closest, never below 1.
pub fn fit_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 || max_width == 0 || max_height == 0 {
        return (width, height);
    }
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let aspect = width as f64 / height as f64;
    let (bound_w, bound_h) = (max_width as f64, max_height as f64);

    if bound_w / bound_h >= aspect {
        let w = round_aspect(bound_h * aspect, |n| (aspect - n / bound_h).abs());
        (w, max_height)
    } else {
        let h = round_aspect(bound_w / aspect, |n| (aspect - bound_w / n).abs());
        (max_width, h)
    }
}

/// Pick floor or ceil of `value` by the smaller `error`, preferring floor.
fn round_aspect(value: f64, error: impl Fn(f64) -> f64) -> u32 {
    let floor = value.floor().max(1.0);
    let ceil = value.ceil().max(1.0);
    let best = if error(ceil) < error(floor) { ceil } else { floor };
    best as u32
}
