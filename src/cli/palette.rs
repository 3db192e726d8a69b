use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::colors::{render_palette_strip, PaletteExtractor};
use crate::config::Config;
use crate::error::{DecorError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::write_png;
use crate::transform::normalize;

/// Extract a colour palette from an image without styling it
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Image file to extract colours from
    #[arg(required = true)]
    pub file: PathBuf,

    /// Number of colours
    #[arg(long, short = 'k')]
    pub colors: Option<usize>,

    /// Also write the palette as a swatch strip PNG
    #[arg(long)]
    pub strip: Option<PathBuf>,

    /// Print the palette as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PaletteArgs, config: &Config, printer: &Printer) -> Result<()> {
    let path = &args.file;
    let display = display_path(path);

    let bytes = fs::read(path).map_err(|e| DecorError::Io {
        path: path.clone(),
        message: e.to_string(),
    })?;
    let img = image::load_from_memory(&bytes).map_err(|e| DecorError::Decode {
        message: format!("{}: {}", display, e),
    })?;

    let options = config.pipeline_options();
    let normalized = normalize(&img, options.max_width, options.max_height);

    let palette = PaletteExtractor::new(args.colors.unwrap_or(options.colors))
        .with_options(options.cluster.clone())
        .extract(&normalized)?;

    printer.status(
        "Sampled",
        &format!("{} from {}", plural(palette.len(), "colour", "colours"), display),
    );

    if let Some(strip_path) = &args.strip {
        let strip = render_palette_strip(&palette, options.strip_width, options.strip_height)?;
        write_png(&strip, strip_path)?;
        printer.status("Wrote", &display_path(strip_path));
    }

    if args.json {
        super::print_json(&palette)?;
    } else {
        for colour in palette.iter() {
            println!("{}", colour);
        }
    }

    Ok(())
}
