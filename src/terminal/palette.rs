//! Color table and palette resolution.
//!
//! The sixteen standard ANSI colors live in a constant table; the
//! 256-color palette is derived from it plus the xterm color cube and
//! grayscale ramp.

use super::types::Color;

/// RGB of the sixteen standard colors, normal range (30-37) followed by
/// the bright range (90-97).
pub const ANSI_COLORS: [[u8; 3]; 16] = [
    [0x00, 0x00, 0x00], // 30 black
    [0xCD, 0x31, 0x31], // 31 red
    [0x0D, 0xBC, 0x79], // 32 green
    [0xE5, 0xE5, 0x10], // 33 yellow
    [0x24, 0x72, 0xC8], // 34 blue
    [0xBC, 0x3F, 0x99], // 35 magenta
    [0x11, 0xA8, 0xCD], // 36 cyan
    [0xE5, 0xE5, 0xE5], // 37 white
    [0x66, 0x66, 0x66], // 90 bright black
    [0xF1, 0x4C, 0x4C], // 91 bright red
    [0x23, 0xD1, 0x8B], // 92 bright green
    [0xF5, 0xF5, 0x43], // 93 bright yellow
    [0x3B, 0x8E, 0xEA], // 94 bright blue
    [0xD6, 0x70, 0xB2], // 95 bright magenta
    [0x29, 0xB8, 0xDB], // 96 bright cyan
    [0xFF, 0xFF, 0xFF], // 97 bright white
];

/// Foreground used for `Color::Default`.
pub const DEFAULT_FOREGROUND: [u8; 3] = [0xFF, 0xFF, 0xFF];

/// Levels of the 6x6x6 color cube (palette indices 16-231).
const CUBE_LEVELS: [u8; 6] = [0x00, 0x5F, 0x87, 0xAF, 0xD7, 0xFF];

impl Color {
    /// Map an SGR foreground code (30-37, 90-97) to its named color.
    pub fn from_sgr_code(code: u32) -> Option<Color> {
        let color = match code {
            30 => Color::Black,
            31 => Color::Red,
            32 => Color::Green,
            33 => Color::Yellow,
            34 => Color::Blue,
            35 => Color::Magenta,
            36 => Color::Cyan,
            37 => Color::White,
            90 => Color::BrightBlack,
            91 => Color::BrightRed,
            92 => Color::BrightGreen,
            93 => Color::BrightYellow,
            94 => Color::BrightBlue,
            95 => Color::BrightMagenta,
            96 => Color::BrightCyan,
            97 => Color::BrightWhite,
            _ => return None,
        };
        Some(color)
    }

    /// Position of a named color in [`ANSI_COLORS`].
    fn table_index(self) -> Option<usize> {
        let idx = match self {
            Color::Black => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::White => 7,
            Color::BrightBlack => 8,
            Color::BrightRed => 9,
            Color::BrightGreen => 10,
            Color::BrightYellow => 11,
            Color::BrightBlue => 12,
            Color::BrightMagenta => 13,
            Color::BrightCyan => 14,
            Color::BrightWhite => 15,
            Color::Default | Color::Indexed(_) | Color::Rgb(..) => return None,
        };
        Some(idx)
    }

    /// Resolve to RGB components.
    pub fn rgb(self) -> (u32, u32, u32) {
        let [r, g, b] = match self {
            Color::Default => DEFAULT_FOREGROUND,
            Color::Indexed(idx) => indexed_rgb(idx),
            Color::Rgb(r, g, b) => return (r, g, b),
            named => named
                .table_index()
                .map(|i| ANSI_COLORS[i])
                .unwrap_or(DEFAULT_FOREGROUND),
        };
        (u32::from(r), u32::from(g), u32::from(b))
    }

    /// Hex notation used for the SVG `fill` attribute, e.g. `#CD3131`.
    ///
    /// True-color components above 255 are printed as given and
    /// therefore widen the hex string.
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

/// RGB of an xterm 256-color palette entry.
pub fn indexed_rgb(idx: u8) -> [u8; 3] {
    match idx {
        0..=15 => ANSI_COLORS[usize::from(idx)],
        16..=231 => {
            let i = idx - 16;
            [
                CUBE_LEVELS[usize::from(i / 36)],
                CUBE_LEVELS[usize::from((i / 6) % 6)],
                CUBE_LEVELS[usize::from(i % 6)],
            ]
        }
        232..=255 => {
            let level = 8 + (idx - 232) * 10;
            [level, level, level]
        }
    }
}
