//! Style command implementation.
//!
//! Runs the design pipeline over each input file and writes the normalized,
//! styled and palette strip images as PNG.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::catalog::StylePresetCatalog;
use crate::config::Config;
use crate::error::{DecorError, Result};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{DesignPipeline, DesignResult};
use crate::render::write_png;
use crate::types::{Category, Palette};

/// Apply a design style to images and extract their palettes
#[derive(Args, Debug)]
pub struct StyleArgs {
    /// Input images (PNG, JPEG, ...)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Style name, e.g. "Modern" or "Mid-Century Modern" (case-sensitive)
    #[arg(long, short)]
    pub style: String,

    /// Design category: exterior or interior
    #[arg(long, short)]
    pub category: Category,

    /// Output directory (default from config, else "dist")
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Number of palette colours
    #[arg(long, short = 'k')]
    pub colors: Option<usize>,

    /// Print results as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Per-file result written to stdout with `--json`.
#[derive(Debug, Serialize)]
struct StyleReport {
    input: String,
    style: String,
    category: Category,
    applied: bool,
    palette: Palette,
    normalized: String,
    styled: String,
    strip: String,
}

pub fn run(args: StyleArgs, config: &Config, printer: &Printer) -> Result<()> {
    let output_dir = args.output.clone().unwrap_or_else(|| config.output.clone());
    if !output_dir.exists() {
        fs::create_dir_all(&output_dir).map_err(|e| DecorError::Io {
            path: output_dir.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut options = config.pipeline_options();
    if let Some(colors) = args.colors {
        options.colors = colors;
    }
    let pipeline = DesignPipeline::new(options);

    if StylePresetCatalog::lookup(args.category, &args.style).is_none() {
        let known: Vec<&str> = StylePresetCatalog::names(args.category).collect();
        printer.warning(
            "Unknown",
            &format!(
                "{} style '{}', images will not be styled {}",
                args.category,
                args.style,
                printer.dim(&format!("(known: {})", known.join(", ")))
            ),
        );
    }

    let mut reports = Vec::new();

    for file in &args.files {
        printer.status(
            "Styling",
            &format!("{} ({} {})", display_path(file), args.style, args.category),
        );

        let bytes = fs::read(file).map_err(|e| DecorError::Io {
            path: file.clone(),
            message: format!("Failed to read image: {}", e),
        })?;
        let result = pipeline.run_bytes(&bytes, &args.style, args.category)?;

        let report = write_outputs(file, &output_dir, &args, &result)?;
        let (width, height) = result.styled.dimensions();
        printer.status(
            "Wrote",
            &format!("{} {}", report.styled, printer.dim(&format!("({}x{})", width, height))),
        );

        if !args.json {
            for colour in result.palette.iter() {
                println!("{}", colour);
            }
        }
        reports.push(report);
    }

    if args.json {
        super::print_json(&reports)?;
    }

    printer.status(
        "Finished",
        &format!("{} to {}", plural(reports.len(), "image", "images"), display_path(&output_dir)),
    );

    Ok(())
}

/// Write the three images of a result next to each other.
fn write_outputs(
    input: &Path,
    output_dir: &Path,
    args: &StyleArgs,
    result: &DesignResult,
) -> Result<StyleReport> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");

    let normalized = output_dir.join(format!("{}-normalized.png", stem));
    let styled = output_dir.join(format!("{}-styled.png", stem));
    let strip = output_dir.join(format!("{}-palette.png", stem));

    write_png(&result.normalized, &normalized)?;
    write_png(&result.styled, &styled)?;
    write_png(&result.strip, &strip)?;

    Ok(StyleReport {
        input: display_path(input),
        style: args.style.clone(),
        category: args.category,
        applied: result.preset.is_some(),
        palette: result.palette.clone(),
        normalized: display_path(&normalized),
        styled: display_path(&styled),
        strip: display_path(&strip),
    })
}
