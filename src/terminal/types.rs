//! Terminal style types.
//!
//! Contains the value types threaded through the SGR interpreter:
//! - Color: ANSI color codes (16 colors, 256-color palette, RGB)
//! - Weight / Slant: the two font attributes that are rendered
//! - Style: the full style snapshot attached to each span
//! - ColorDepth: which extended-color forms the interpreter accepts

use serde::{Deserialize, Serialize};

/// ANSI color codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Terminal default foreground (rendered as white)
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// 256-color palette index
    Indexed(u8),
    /// 24-bit color. Components are kept as given, without clamping.
    Rgb(u32, u32, u32),
}

/// Font weight of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weight {
    #[default]
    Normal,
    Bold,
}

impl Weight {
    /// Value of the SVG `font-weight` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Weight::Normal => "normal",
            Weight::Bold => "bold",
        }
    }
}

/// Font slant of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slant {
    #[default]
    Normal,
    Italic,
}

impl Slant {
    /// Value of the SVG `font-style` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Slant::Normal => "normal",
            Slant::Italic => "italic",
        }
    }
}

/// Style attributes carried by a span.
///
/// Always fully defined: it starts at the default (white, normal, normal)
/// and is only ever reset wholesale or updated one attribute at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Color,
    pub weight: Weight,
    pub slant: Slant,
}

impl Style {
    pub fn is_bold(&self) -> bool {
        self.weight == Weight::Bold
    }

    pub fn is_italic(&self) -> bool {
        self.slant == Slant::Italic
    }
}

/// Extended-color support of the SGR interpreter.
///
/// `Ansi16` only knows the sixteen standard foreground codes; `TrueColor`
/// additionally decodes `38;2;R;G;B` and `38;5;N`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorDepth {
    Ansi16,
    #[default]
    #[value(name = "truecolor")]
    TrueColor,
}

impl ColorDepth {
    pub fn supports_extended(self) -> bool {
        matches!(self, ColorDepth::TrueColor)
    }
}

/// A run of literal text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

/// A styled line for rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    pub spans: Vec<Span>,
}

impl StyledLine {
    /// Number of characters across all spans.
    pub fn char_count(&self) -> usize {
        self.spans.iter().map(|s| s.text.chars().count()).sum()
    }

    /// The line's text without any styling.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}
