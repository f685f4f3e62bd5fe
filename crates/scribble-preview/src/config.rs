//! Preview Configuration

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tiny_skia::Color;

use crate::cli::RenderArgs;

/// Render options; command-line flags override the defaults
#[derive(Debug, Clone)]
pub struct Config {
    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    /// Pen start X
    pub origin_x: i32,

    /// Baseline of the first line
    pub origin_y: i32,

    /// Canvas fill before drawing
    pub background: Color,

    /// Fixed glyph-alternate seed
    pub seed: Option<u64>,

    /// Where the PNG is written
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            origin_x: 10,
            origin_y: 40,
            background: Color::WHITE,
            seed: None,
            output: PathBuf::from("scribble.png"),
        }
    }
}

impl Config {
    /// Apply command-line overrides on top of the defaults
    pub fn from_args(args: &RenderArgs) -> Result<Self> {
        let mut config = Self::default();
        if let Some(width) = args.width {
            config.width = width;
        }
        if let Some(height) = args.height {
            config.height = height;
        }
        if let Some(x) = args.x {
            config.origin_x = x;
        }
        if let Some(y) = args.y {
            config.origin_y = y;
        }
        if let Some(hex) = &args.background {
            config.background =
                parse_color(hex).with_context(|| format!("invalid background {hex:?}"))?;
        }
        if let Some(output) = &args.output {
            config.output = output.clone();
        }
        config.seed = args.seed;

        if config.width == 0 || config.height == 0 {
            bail!("canvas must be at least 1x1, got {}x{}", config.width, config.height);
        }
        Ok(config)
    }
}

/// Parse `RRGGBB` or `RRGGBBAA`, with an optional leading `#`
pub fn parse_color(hex: &str) -> Result<Color> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
        bail!("expected 6 or 8 hex digits");
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
    Ok(Color::from_rgba8(channel(0)?, channel(2)?, channel(4)?, alpha))
}
