//! ANSI escape sequence interpreter.
//!
//! Turns raw terminal text into styled spans. Each line is split by the
//! tokenizer into literal text and CSI sequences; SGR sequences update a
//! running [`Style`] that carries over from one line to the next.
//!
//! Nothing in this module fails: malformed sequences and parameters are
//! either left as literal text or ignored.

mod handlers;
mod palette;
mod tokenizer;
mod types;

pub use handlers::style::{apply_sgr, parse_params};
pub use palette::{indexed_rgb, ANSI_COLORS, DEFAULT_FOREGROUND};
pub use tokenizer::{tokenize_line, EscapeSequence, Segment};
pub use types::{Color, ColorDepth, Slant, Span, Style, StyledLine, Weight};

/// Interprets lines one after another, threading the current style.
#[derive(Debug, Clone, Default)]
pub struct LineInterpreter {
    /// Style in effect for the next literal text
    current_style: Style,
    /// Which extended-color forms SGR sequences may use
    depth: ColorDepth,
}

impl LineInterpreter {
    /// Create an interpreter starting from the default style.
    pub fn new(depth: ColorDepth) -> Self {
        Self {
            current_style: Style::default(),
            depth,
        }
    }

    /// The style that will apply to the next text.
    pub fn current_style(&self) -> Style {
        self.current_style
    }

    /// Interpret one line (without its line terminator).
    ///
    /// Text before a sequence gets the style in effect before that sequence;
    /// trailing text gets the final style. Empty text produces no span.
    pub fn interpret_line(&mut self, line: &str) -> StyledLine {
        let mut spans = Vec::new();

        for segment in tokenize_line(line) {
            if !segment.literal.is_empty() {
                spans.push(Span {
                    text: segment.literal.to_string(),
                    style: self.current_style,
                });
            }

            match segment.sequence {
                Some(seq) if seq.is_sgr() => {
                    self.current_style = apply_sgr(self.current_style, seq.params, self.depth);
                }
                Some(seq) => handlers::log_discarded_csi(seq.action, seq.params),
                None => {}
            }
        }

        StyledLine { spans }
    }
}
