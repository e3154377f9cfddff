//! SGR (Select Graphic Rendition) handler.
//!
//! Handles CSI m sequences for text styling:
//! - Reset, bold and italic on/off
//! - Standard and bright foreground colors
//! - 256-color and RGB foreground (true-color depth only)
//!
//! Malformed or unknown parameters are skipped; nothing here can fail.

use tracing::trace;

use super::super::types::{Color, ColorDepth, Slant, Style, Weight};

/// Split a raw SGR parameter string into numeric parameters.
///
/// An empty slot is `0`. A token that is not a non-negative integer in
/// range becomes `None` and is ignored by [`apply_sgr`].
pub fn parse_params(raw: &str) -> Vec<Option<u32>> {
    raw.split(';').map(parse_param).collect()
}

fn parse_param(token: &str) -> Option<u32> {
    if token.is_empty() {
        return Some(0);
    }
    token.parse().ok()
}

/// Apply the parameters of one SGR sequence to `style` and return the result.
///
/// Parameters are processed left to right; a later parameter overrides an
/// earlier one on the same attribute, and `0` resets everything collected
/// so far before the remaining parameters apply.
pub fn apply_sgr(mut style: Style, raw_params: &str, depth: ColorDepth) -> Style {
    let params = parse_params(raw_params);
    let mut rest = params.as_slice();

    while let Some((&param, tail)) = rest.split_first() {
        rest = tail;
        let Some(code) = param else {
            trace!(params = raw_params, "Skipping malformed SGR parameter");
            continue;
        };

        match code {
            0 => style = Style::default(),
            1 => style.weight = Weight::Bold,
            3 => style.slant = Slant::Italic,
            22 => style.weight = Weight::Normal,
            23 => style.slant = Slant::Normal,
            30..=37 | 90..=97 => {
                if let Some(color) = Color::from_sgr_code(code) {
                    style.fg = color;
                }
            }
            38 if depth.supports_extended() => {
                // Extended foreground color
                if let Some((color, consumed)) = parse_extended_color(rest) {
                    style.fg = color;
                    rest = &rest[consumed..];
                } else {
                    trace!(params = raw_params, "Ignoring incomplete extended color");
                }
            }
            _ => {}
        }
    }

    style
}

/// Parse the parameters following a `38`.
///
/// Returns the color and how many parameters it used, or `None` when the
/// sub-mode is unknown or its arguments are missing or malformed. In that
/// case the caller leaves the following parameters in place.
fn parse_extended_color(params: &[Option<u32>]) -> Option<(Color, usize)> {
    match params {
        // RGB mode
        [Some(2), Some(r), Some(g), Some(b), ..] => Some((Color::Rgb(*r, *g, *b), 4)),
        // 256-color mode
        [Some(5), Some(idx), ..] => u8::try_from(*idx)
            .ok()
            .map(|idx| (Color::Indexed(idx), 2)),
        _ => None,
    }
}
