//! Styled document built from a whole input text.

use tracing::debug;

use crate::terminal::{ColorDepth, LineInterpreter, StyledLine};

/// All styled lines of one input, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub lines: Vec<StyledLine>,
}

impl Document {
    /// Interpret `text` line by line.
    ///
    /// Lines end at `\n` or `\r\n`. A final line terminator does not
    /// start another line.
    pub fn from_text(text: &str, depth: ColorDepth) -> Self {
        let mut interpreter = LineInterpreter::new(depth);
        let lines: Vec<StyledLine> = text
            .lines()
            .map(|line| interpreter.interpret_line(line))
            .collect();

        debug!(lines = lines.len(), depth = ?depth, "Built document");
        Self { lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Widest line, counted in characters.
    pub fn max_line_chars(&self) -> usize {
        self.lines
            .iter()
            .map(StyledLine::char_count)
            .max()
            .unwrap_or(0)
    }
}
