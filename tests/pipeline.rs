//! End-to-end behaviour of the design pipeline.

use std::io::Cursor;

use decor::colors::{render_palette_strip, ClusterOptions};
use decor::enhance::luma;
use decor::transform::{normalize, QualityEnhancer, StyleTransform};
use decor::{
    encode_png, extract_dominant_colors, Category, Colour, DecorError, DesignPipeline,
    PipelineOptions, StylePreset, StylePresetCatalog,
};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use pretty_assertions::assert_eq;

fn quick_pipeline() -> DesignPipeline {
    DesignPipeline::new(PipelineOptions {
        cluster: ClusterOptions {
            runs: 3,
            max_iter: 50,
            ..ClusterOptions::default()
        },
        ..PipelineOptions::default()
    })
}

/// Mid-grey field with a faint tint and texture.
fn mid_grey(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            118 + (x % 5) as u8 * 5,
            128,
            138 - (y % 5) as u8 * 5,
        ])
    })
}

fn luma_std_dev(img: &RgbImage) -> f64 {
    let values: Vec<f64> = img.pixels().map(|px| luma(px) as f64).collect();
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

fn mean_chroma(img: &RgbImage) -> f64 {
    let total: u64 = img
        .pixels()
        .map(|px| {
            let [r, g, b] = px.0;
            (r.max(g).max(b) - r.min(g).min(b)) as u64
        })
        .sum();
    total as f64 / (img.width() * img.height()) as f64
}

#[test]
fn identity_preset_leaves_pixels_untouched() {
    let img = RgbImage::from_fn(31, 17, |x, y| Rgb([(x * 8) as u8, (y * 15) as u8, ((x * y) % 256) as u8]));
    let preset = StylePreset::identity(Category::Interior, "Identity");
    assert_eq!(StyleTransform::apply(&img, Some(&preset)), img);
}

#[test]
fn solid_red_gives_single_red_swatch() {
    let img = RgbImage::from_pixel(10, 10, Rgb([255, 0, 0]));
    let palette = extract_dominant_colors(&img, 5).unwrap();
    assert_eq!(palette.colours(), &[Colour::rgb(255, 0, 0)]);
}

#[test]
fn modern_exterior_raises_contrast_and_saturation() {
    let normalized = normalize(&DynamicImage::ImageRgb8(mid_grey(100, 100)), 800, 600);
    let baseline = QualityEnhancer::enhance(&normalized);

    let preset = StylePresetCatalog::lookup(Category::Exterior, "Modern");
    let styled = QualityEnhancer::enhance(&StyleTransform::apply(&normalized, preset));

    assert!(
        luma_std_dev(&styled) > luma_std_dev(&baseline),
        "contrast {} <= {}",
        luma_std_dev(&styled),
        luma_std_dev(&baseline)
    );
    assert!(
        mean_chroma(&styled) > mean_chroma(&baseline),
        "saturation {} <= {}",
        mean_chroma(&styled),
        mean_chroma(&baseline)
    );
}

#[test]
fn unknown_style_skips_styling() {
    let raw = DynamicImage::ImageRgb8(mid_grey(40, 30));
    let result = quick_pipeline().run(&raw, "Foo", Category::Interior).unwrap();

    assert!(result.preset.is_none());
    let unstyled = StyleTransform::apply(
        &result.normalized,
        StylePresetCatalog::lookup(Category::Interior, "Foo"),
    );
    assert_eq!(unstyled, result.normalized);
    assert_eq!(result.styled, QualityEnhancer::enhance(&result.normalized));
}

#[test]
fn pipeline_is_deterministic() {
    let raw = DynamicImage::ImageRgb8(RgbImage::from_fn(60, 40, |x, y| {
        Rgb([(x * 4) as u8, (y * 6) as u8, ((x + y) * 3) as u8])
    }));
    let pipeline = quick_pipeline();

    let a = pipeline.run(&raw, "Scandinavian", Category::Interior).unwrap();
    let b = pipeline.run(&raw, "Scandinavian", Category::Interior).unwrap();

    assert_eq!(a.palette, b.palette);
    assert_eq!(a.styled, b.styled);
    assert_eq!(a.strip, b.strip);
}

#[test]
fn strip_bands_follow_palette() {
    let raw = DynamicImage::ImageRgb8(RgbImage::from_fn(30, 10, |x, _| match x / 10 {
        0 => Rgb([250, 250, 250]),
        1 => Rgb([5, 5, 5]),
        _ => Rgb([200, 20, 20]),
    }));
    let result = quick_pipeline().run(&raw, "Nope", Category::Exterior).unwrap();

    let strip = &result.strip;
    assert_eq!(strip.width(), 400);
    let band = 400 / result.palette.len() as u32;
    for (i, colour) in result.palette.iter().enumerate() {
        let x = i as u32 * band;
        assert_eq!(Colour::from(*strip.get_pixel(x, 50)), *colour);
    }

    let rerendered = render_palette_strip(&result.palette, 400, 100).unwrap();
    assert_eq!(&rerendered, strip);
}

#[test]
fn run_bytes_accepts_png_and_jpeg() {
    let img = mid_grey(32, 24);
    let png = encode_png(&img).unwrap();

    let mut jpeg = Vec::new();
    DynamicImage::ImageRgb8(img.clone())
        .write_to(&mut Cursor::new(&mut jpeg), ImageFormat::Jpeg)
        .unwrap();

    let pipeline = quick_pipeline();
    for bytes in [png, jpeg] {
        let result = pipeline.run_bytes(&bytes, "Coastal", Category::Interior).unwrap();
        assert_eq!(result.normalized.dimensions(), (32, 24));
        assert!(!result.palette.is_empty() && result.palette.len() <= 5);
    }
}

#[test]
fn large_input_is_normalized_to_bounds() {
    let raw = DynamicImage::ImageRgb8(RgbImage::from_pixel(1600, 900, Rgb([90, 120, 150])));
    let pipeline = DesignPipeline::new(PipelineOptions {
        cluster: ClusterOptions {
            runs: 1,
            max_iter: 10,
            ..ClusterOptions::default()
        },
        ..PipelineOptions::default()
    });

    let result = pipeline.run(&raw, "Modern", Category::Exterior).unwrap();
    assert_eq!(result.normalized.dimensions(), (800, 450));
    assert_eq!(result.styled.dimensions(), (800, 450));
}

#[test]
fn corrupt_bytes_fail_to_decode() {
    let err = quick_pipeline()
        .run_bytes(&[0x89, b'P', b'N', b'G', 0, 0], "Modern", Category::Exterior)
        .unwrap_err();
    assert!(matches!(err, DecorError::Decode { .. }));
}
