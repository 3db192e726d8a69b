//! Palette strip rendering.

use image::{Rgb, RgbImage};

use crate::error::{DecorError, Result};
use crate::types::Palette;

pub const DEFAULT_STRIP_WIDTH: u32 = 400;
pub const DEFAULT_STRIP_HEIGHT: u32 = 100;

/// Render a palette as equal-width vertical bands.
///
/// Band width is `width / palette.len()`; the last band absorbs any
/// remainder so the strip is exactly `width` pixels wide.
pub fn render_palette_strip(palette: &Palette, width: u32, height: u32) -> Result<RgbImage> {
    if palette.is_empty() {
        return Err(DecorError::InvalidArgument {
            message: "cannot render an empty palette".to_string(),
            help: None,
        });
    }
    if width == 0 || height == 0 {
        return Err(DecorError::InvalidArgument {
            message: format!("strip size {}x{} has no pixels", width, height),
            help: None,
        });
    }

    let bands = palette.len() as u32;
    if width < bands {
        return Err(DecorError::InvalidArgument {
            message: format!("strip width {} is narrower than {} swatches", width, bands),
            help: Some("Use a wider strip or fewer colours".to_string()),
        });
    }

    let band_width = width / bands;
    let last = palette.len() - 1;

    Ok(RgbImage::from_fn(width, height, |x, _| {
        let idx = ((x / band_width) as usize).min(last);
        Rgb::from(palette[idx])
    }))
}
