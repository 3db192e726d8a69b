//! List command implementation.
//!
//! Prints the builtin style catalog.

use clap::Args;

use crate::catalog::StylePresetCatalog;
use crate::error::Result;
use crate::output::Printer;
use crate::types::{Category, FilterKind, StylePreset};

/// List the builtin design styles
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list styles of this category
    #[arg(long, short)]
    pub category: Option<Category>,

    /// Show each style's factors and filter
    #[arg(long)]
    pub detail: bool,

    /// Print the presets as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let categories: Vec<Category> = match args.category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    if args.json {
        let presets: Vec<&StylePreset> = categories
            .iter()
            .flat_map(|&c| StylePresetCatalog::styles(c))
            .collect();
        return super::print_json(&presets);
    }

    for category in categories {
        if args.detail {
            for preset in StylePresetCatalog::styles(category) {
                printer.info(category.name(), &describe(preset, printer));
            }
        } else {
            let names: Vec<&str> = StylePresetCatalog::names(category).collect();
            printer.info(category.name(), &names.join(", "));
        }
    }

    Ok(())
}

fn describe(preset: &StylePreset, printer: &Printer) -> String {
    let filter = match preset.filter {
        FilterKind::None => String::new(),
        FilterKind::Smooth => " + smooth".to_string(),
        FilterKind::SmoothStrong => " + smooth-strong".to_string(),
        FilterKind::EdgeEnhance => " + edge-enhance".to_string(),
    };
    format!(
        "{} {}{}",
        preset.name,
        printer.dim(&format!(
            "saturation {} brightness {} contrast {}",
            preset.saturation, preset.brightness, preset.contrast
        )),
        filter
    )
}
