//! Escape-sequence line tokenizer.
//!
//! Splits one line into literal text and the CSI sequences between it.
//! A sequence is `ESC [`, then any run of digits, `;` or `?`, then one
//! ASCII letter. An `ESC` that does not start such a sequence stays in
//! the literal text.

const ESC: char = '\x1b';

/// A recognized CSI sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeSequence<'a> {
    /// Everything between `ESC [` and the final byte.
    pub params: &'a str,
    /// The final byte, e.g. `m` for SGR.
    pub action: char,
}

impl EscapeSequence<'_> {
    /// Whether this is a Select Graphic Rendition sequence.
    pub fn is_sgr(&self) -> bool {
        self.action == 'm'
    }
}

/// Literal text followed by the sequence that ended it.
///
/// The last segment of a line carries the trailing text and no sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub literal: &'a str,
    pub sequence: Option<EscapeSequence<'a>>,
}

/// Split a line into segments.
///
/// The concatenated literals reproduce the line with every recognized
/// sequence removed. Segments are returned in order and always cover the
/// whole line; the final segment may have an empty literal.
pub fn tokenize_line(line: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut search_from = 0;

    while let Some(offset) = line[search_from..].find(ESC) {
        let esc_pos = search_from + offset;
        match match_sequence(&line[esc_pos..]) {
            Some((sequence, len)) => {
                segments.push(Segment {
                    literal: &line[literal_start..esc_pos],
                    sequence: Some(sequence),
                });
                literal_start = esc_pos + len;
                search_from = literal_start;
            }
            None => {
                // Not a sequence: keep the ESC as literal text
                search_from = esc_pos + ESC.len_utf8();
            }
        }
    }

    segments.push(Segment {
        literal: &line[literal_start..],
        sequence: None,
    });
    segments
}

/// Try to match a sequence at the start of `text` (which begins with ESC).
///
/// Returns the sequence and its length in bytes.
fn match_sequence(text: &str) -> Option<(EscapeSequence<'_>, usize)> {
    let body = text.strip_prefix(ESC)?.strip_prefix('[')?;
    let params_len = body
        .bytes()
        .take_while(|b| b.is_ascii_digit() || *b == b';' || *b == b'?')
        .count();

    let action = body[params_len..].chars().next()?;
    if !action.is_ascii_alphabetic() {
        return None;
    }

    let sequence = EscapeSequence {
        params: &body[..params_len],
        action,
    };
    // ESC + '[' + params + final byte, all single-byte
    Some((sequence, 2 + params_len + 1))
}
