//! Ligature and glyph records

use tiny_skia::Pixmap;

/// One visual variant of a ligature
#[derive(Debug, Clone)]
pub struct Glyph {
    /// Horizontal offset from the pen position, in pixels
    pub x_offset: u8,
    /// Glyph bitmap. `None` marks a zero-width glyph with nothing to draw.
    pub image: Option<Pixmap>,
}

impl Glyph {
    /// Create a glyph without an image
    pub fn new(x_offset: u8) -> Self {
        Self { x_offset, image: None }
    }

    /// Create a glyph with an image
    pub fn with_image(x_offset: u8, image: Pixmap) -> Self {
        Self { x_offset, image: Some(image) }
    }
}

/// A run of text drawn as a single hand-written shape
#[derive(Debug, Clone)]
pub struct Ligature {
    /// Text this ligature replaces
    pub key: String,
    /// Pen advance after drawing, in pixels
    pub advance: u8,
    /// Alternate appearances; one is picked at random per draw
    pub glyphs: Vec<Glyph>,
}

impl Ligature {
    /// Create a ligature drawn with `glyphs`, one picked per draw
    pub fn new(key: impl Into<String>, advance: u8, glyphs: Vec<Glyph>) -> Self {
        Self {
            key: key.into(),
            advance,
            glyphs,
        }
    }
}
