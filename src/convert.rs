//! One-shot conversion of an ANSI text file into an SVG file.
//!
//! The input is read completely and the SVG is rendered in memory before
//! the output path is opened, so a failed read never touches the output.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::document::Document;
use crate::error::ConvertError;
use crate::svg::SvgRenderer;

/// What a successful conversion produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    pub lines: usize,
    pub width: u64,
    pub height: u64,
}

/// Render ANSI text to an SVG string.
pub fn render_text(text: &str, config: &RenderConfig) -> String {
    let doc = Document::from_text(text, config.color_depth);
    SvgRenderer::new(config.clone()).render(&doc)
}

/// Convert the file at `input` and write the SVG to `output`.
///
/// Invalid UTF-8 in the input is replaced rather than rejected.
pub fn convert(
    input: &Path,
    output: &Path,
    config: &RenderConfig,
) -> Result<ConvertSummary, ConvertError> {
    let bytes = fs::read(input).map_err(|source| ConvertError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    debug!(path = %input.display(), bytes = bytes.len(), "Read input");

    let doc = Document::from_text(&text, config.color_depth);
    let renderer = SvgRenderer::new(config.clone());
    let (width, height) = renderer.canvas_size(&doc);
    let svg = renderer.render(&doc);

    fs::write(output, svg).map_err(|source| ConvertError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;
    info!(
        input = %input.display(),
        output = %output.display(),
        lines = doc.line_count(),
        "Converted"
    );

    Ok(ConvertSummary {
        lines: doc.line_count(),
        width,
        height,
    })
}
