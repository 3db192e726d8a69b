//! Design pipeline: normalize, style, enhance, then summarize colours.
//!
//! Every invocation is independent. The pipeline only holds its options, so
//! a single instance can be shared across threads.

use image::{DynamicImage, RgbImage};

use crate::catalog::StylePresetCatalog;
use crate::colors::{
    render_palette_strip, ClusterOptions, PaletteExtractor, DEFAULT_COLORS, DEFAULT_STRIP_HEIGHT,
    DEFAULT_STRIP_WIDTH,
};
use crate::error::{DecorError, Result};
use crate::transform::{
    normalize, QualityEnhancer, StyleTransform, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH,
};
use crate::types::{Category, Palette, StylePreset};

/// Tunable parameters of a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOptions {
    pub max_width: u32,
    pub max_height: u32,
    /// Requested palette size.
    pub colors: usize,
    pub strip_width: u32,
    pub strip_height: u32,
    pub cluster: ClusterOptions,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            colors: DEFAULT_COLORS,
            strip_width: DEFAULT_STRIP_WIDTH,
            strip_height: DEFAULT_STRIP_HEIGHT,
            cluster: ClusterOptions::default(),
        }
    }
}

/// Everything produced by one pipeline run.
#[derive(Debug, Clone)]
pub struct DesignResult {
    /// Input after size and colour normalization.
    pub normalized: RgbImage,
    /// Styled and quality-enhanced image.
    pub styled: RgbImage,
    /// Dominant colours of the styled image.
    pub palette: Palette,
    /// Palette rendered as swatch bands.
    pub strip: RgbImage,
    /// The preset that was applied, if the style was known.
    pub preset: Option<StylePreset>,
}

/// Orchestrates the design stages.
#[derive(Debug, Clone, Default)]
pub struct DesignPipeline {
    options: PipelineOptions,
}

impl DesignPipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Decode image bytes (PNG, JPEG, ...) and run the pipeline.
    pub fn run_bytes(&self, bytes: &[u8], style: &str, category: Category) -> Result<DesignResult> {
        let img = image::load_from_memory(bytes).map_err(|e| DecorError::Decode {
            message: e.to_string(),
        })?;
        self.run(&img, style, category)
    }

    /// Run the pipeline on a decoded image.
    ///
    /// An unknown style is not an error; the styling step is skipped.
    pub fn run(&self, raw: &DynamicImage, style: &str, category: Category) -> Result<DesignResult> {
        if raw.width() == 0 || raw.height() == 0 {
            return Err(DecorError::InvalidInput {
                message: "image has no pixels".to_string(),
                help: Some("Supply an image at least 1x1 in size".to_string()),
            });
        }

        let opts = &self.options;

        let normalized = normalize(raw, opts.max_width, opts.max_height);
        let preset = StylePresetCatalog::lookup(category, style);
        let styled = StyleTransform::apply(&normalized, preset);
        let styled = QualityEnhancer::enhance(&styled);

        let palette = PaletteExtractor::new(opts.colors)
            .with_options(opts.cluster.clone())
            .extract(&styled)?;
        let strip = render_palette_strip(&palette, opts.strip_width, opts.strip_height)?;

        Ok(DesignResult {
            normalized,
            styled,
            palette,
            strip,
            preset: preset.copied(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn fast() -> DesignPipeline {
        DesignPipeline::new(PipelineOptions {
            max_width: 100,
            max_height: 100,
            cluster: ClusterOptions {
                runs: 2,
                max_iter: 50,
                ..ClusterOptions::default()
            },
            ..PipelineOptions::default()
        })
    }

    #[test]
    fn test_default_options() {
        let opts = PipelineOptions::default();
        assert_eq!((opts.max_width, opts.max_height), (800, 600));
        assert_eq!(opts.colors, 5);
        assert_eq!((opts.strip_width, opts.strip_height), (400, 100));
    }

    #[test]
    fn test_run_produces_all_outputs() {
        let raw = DynamicImage::ImageRgb8(RgbImage::from_fn(1000, 500, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        }));

        let result = fast().run(&raw, "Modern", Category::Exterior).unwrap();

        assert_eq!(result.normalized.dimensions(), (100, 50));
        assert_eq!(result.styled.dimensions(), (100, 50));
        assert_eq!(result.palette.len(), 5);
        assert_eq!(result.strip.dimensions(), (400, 100));
        assert_eq!(result.preset.map(|p| p.name), Some("Modern"));
    }

    #[test]
    fn test_unknown_style_is_not_an_error() {
        let raw = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([10, 20, 30])));
        let result = fast().run(&raw, "Foo", Category::Interior).unwrap();
        assert!(result.preset.is_none());
        assert_eq!(result.palette.len(), 1);
    }

    #[test]
    fn test_empty_image_rejected() {
        let raw = DynamicImage::ImageRgb8(RgbImage::new(0, 0));
        let err = fast().run(&raw, "Modern", Category::Exterior).unwrap_err();
        assert!(matches!(err, DecorError::InvalidInput { .. }));
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        let err = fast()
            .run_bytes(b"definitely not an image", "Modern", Category::Exterior)
            .unwrap_err();
        assert!(matches!(err, DecorError::Decode { .. }));
    }

    #[test]
    fn test_zero_colours_rejected() {
        let pipeline = DesignPipeline::new(PipelineOptions {
            colors: 0,
            ..PipelineOptions::default()
        });
        let raw = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])));
        let err = pipeline.run(&raw, "Glam", Category::Interior).unwrap_err();
        assert!(matches!(err, DecorError::InvalidArgument { .. }));
    }
}
