pub mod completions;
pub mod list;
pub mod palette;
pub mod style;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::error::{DecorError, Result};

/// decor - Design-style presets and colour palettes for room and facade photos
#[derive(Parser, Debug)]
#[command(name = "decor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./decor.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress status output on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply a design style to images and extract their palettes
    Style(style::StyleArgs),

    /// Extract a colour palette from an image without styling it
    Palette(palette::PaletteArgs),

    /// List the builtin design styles
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| DecorError::Encode {
        message: format!("JSON encode error: {}", e),
    })?;
    println!("{}", json);
    Ok(())
}
