//! ansi2svg Library
//!
//! Converts text containing ANSI/VT escape sequences into a static SVG
//! image that reproduces the colored, styled terminal output.

pub mod cli;
pub mod config;
pub mod convert;
pub mod document;
pub mod error;
pub mod svg;
pub mod terminal;

pub use config::{Config, RenderConfig};
pub use convert::{convert, render_text, ConvertSummary};
pub use document::Document;
pub use error::ConvertError;
pub use svg::SvgRenderer;
pub use terminal::{Color, ColorDepth, LineInterpreter, Span, Style, StyledLine};
