//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::terminal::ColorDepth;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
}

/// SVG rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Font size in SVG units; also drives character width and line height
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    /// Extra space added to both canvas dimensions
    #[serde(default = "default_margin")]
    pub margin: u32,
    /// Left x coordinate of every line
    #[serde(default = "default_text_x")]
    pub text_x: u32,
    /// Canvas background as `#RRGGBB`
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Which extended SGR color forms are decoded
    #[serde(default)]
    pub color_depth: ColorDepth,
}

pub fn default_font_size() -> u32 {
    16
}

pub fn default_margin() -> u32 {
    20
}

pub fn default_text_x() -> u32 {
    10
}

pub fn default_background() -> String {
    "#1E1E1E".to_string()
}

pub fn default_font_family() -> String {
    "monospace".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            margin: default_margin(),
            text_x: default_text_x(),
            background: default_background(),
            font_family: default_font_family(),
            color_depth: ColorDepth::default(),
        }
    }
}

impl RenderConfig {
    /// Approximate advance of one monospace character.
    pub fn char_width(&self) -> f64 {
        f64::from(self.font_size) * 0.6
    }

    /// Distance between consecutive baselines.
    pub fn line_height(&self) -> u32 {
        self.font_size + 4
    }

    /// Check values that would produce a broken document.
    pub fn validate(&self) -> Result<(), String> {
        if self.font_size == 0 {
            return Err("render.font_size must be > 0".to_string());
        }
        if !is_hex_color(&self.background) {
            return Err(format!(
                "render.background '{}' is not a #RRGGBB color",
                self.background
            ));
        }
        if self.font_family.is_empty() || self.font_family.contains(['"', '<', '>', '&']) {
            return Err(format!(
                "render.font_family '{}' is empty or contains markup characters",
                self.font_family
            ));
        }
        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .map(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false)
}
