//! SVG renderer for styled documents.
//!
//! Produces one `<text>` element per line and one `<tspan>` per span.
//! Spans carry only presentation attributes; their position follows from
//! the enclosing line, and `xml:space="preserve"` keeps whitespace intact.

use std::fmt::{self, Write};

use crate::config::RenderConfig;
use crate::document::Document;
use crate::terminal::Span;

/// Renders a [`Document`] with fixed monospace metrics.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    config: RenderConfig,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl SvgRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Canvas width and height for a document.
    ///
    /// Width is the widest line times the character width, height the line
    /// count times the line height; both get the margin added. An empty
    /// document is just the margin.
    pub fn canvas_size(&self, doc: &Document) -> (u64, u64) {
        let margin = u64::from(self.config.margin);
        let text_width = doc.max_line_chars() as f64 * self.config.char_width();
        let width = text_width as u64 + margin;
        let height = doc.line_count() as u64 * u64::from(self.config.line_height()) + margin;
        (width, height)
    }

    /// Render the whole document to an SVG string.
    pub fn render(&self, doc: &Document) -> String {
        let mut out = String::with_capacity(256 + doc.lines.len() * 128);
        self.write_document(&mut out, doc)
            .expect("fmt::Write for String does not fail");
        out
    }

    /// Write the whole document into any `fmt::Write` sink.
    pub fn write_document(&self, out: &mut impl Write, doc: &Document) -> fmt::Result {
        let (width, height) = self.canvas_size(doc);
        let line_height = u64::from(self.config.line_height());

        writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" version=\"1.1\">"
        )?;
        writeln!(
            out,
            "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            self.config.background
        )?;

        let mut y = line_height;
        for line in &doc.lines {
            write!(
                out,
                "  <text x=\"{}\" y=\"{y}\" font-family=\"{}\" font-size=\"{}px\" xml:space=\"preserve\">",
                self.config.text_x, self.config.font_family, self.config.font_size
            )?;
            for span in &line.spans {
                write_span(out, span)?;
            }
            out.write_str("</text>\n")?;
            y += line_height;
        }

        out.write_str("</svg>\n")
    }
}

fn write_span(out: &mut impl Write, span: &Span) -> fmt::Result {
    write!(
        out,
        "<tspan fill=\"{}\" font-weight=\"{}\" font-style=\"{}\">",
        span.style.fg.to_hex(),
        span.style.weight.as_str(),
        span.style.slant.as_str()
    )?;
    let mut escaped = String::with_capacity(span.text.len());
    escape_xml_into(&mut escaped, &span.text);
    out.write_str(&escaped)?;
    out.write_str("</tspan>")
}

/// XML-escape a string into the output buffer.
pub fn escape_xml_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
}
