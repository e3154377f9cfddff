//! CLI definitions for ansi2svg
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Parser};

use crate::config::RenderConfig;
use crate::terminal::ColorDepth;

/// Build clap styles for help and error output.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Debug, Parser)]
#[command(name = "ansi2svg")]
#[command(about = "Render ANSI-colored terminal text as an SVG image")]
#[command(
    long_about = "ansi2svg - Render ANSI-colored terminal text as an SVG image.

Reads a text file containing ANSI escape sequences (SGR colors, bold,
italic, 24-bit true color) and writes an SVG that shows the text in a
monospace font on a dark background, one <text> element per line.

Rendering defaults can be changed in ~/.config/ansi2svg/config.toml:

    [render]
    font_size = 16
    background = \"#1E1E1E\"
    color_depth = \"truecolor\"

EXAMPLES:
    ansi2svg session.log session.svg
    ansi2svg --color-depth ansi16 build.log build.svg"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Text file with ANSI escape sequences
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// SVG file to write
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Extended color support (overrides the config file)
    #[arg(long, value_enum, value_name = "DEPTH")]
    pub color_depth: Option<ColorDepth>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded render config.
    pub fn apply_overrides(&self, render: &mut RenderConfig) {
        if let Some(depth) = self.color_depth {
            render.color_depth = depth;
        }
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
