//! Scribble Font - Handwriting Ligature Fonts
//!
//! A scribble font is a PNG image whose pixels hold hand-drawn glyphs and
//! whose custom `foNt` chunk describes how those glyphs map onto text:
//! - Chunk location inside the PNG chunk stream
//! - Forward-only payload parsing
//! - Ligature storage in a prefix trie with longest-match lookup
//! - Async loading with concurrent glyph cropping (smol)
//! - Greedy text rendering with random glyph alternates
//!
//! # Example
//! ```rust,ignore
//! use scribble_font::Font;
//!
//! let font = smol::block_on(Font::load(std::fs::read("hand.png")?))?;
//! let mut pixmap = tiny_skia::Pixmap::new(640, 480).unwrap();
//! font.draw_text(&mut pixmap, "hello\nworld", 10, 40);
//! ```

pub mod chunk;
pub mod font;
pub mod image;
pub mod ligature;
mod loader;
pub mod reader;
pub mod render;
pub mod trie;

pub use chunk::{find_chunk, CHUNK_NAME, PNG_SIGNATURE};
pub use font::Font;
pub use image::ImageFormat;
pub use ligature::{Glyph, Ligature};
pub use reader::FontReader;
pub use render::{
    Diagnostics, GlyphPicker, Surface, TextRenderer, TracingDiagnostics, XorShiftPicker,
};
pub use trie::{LigatureTrie, Ligatures};

/// Font loading and editing error types
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("Provided font image is not image/png, but {0}")]
    UnsupportedFormat(&'static str),

    #[error("PNG did not contain a foNt chunk")]
    MissingChunk,

    #[error("Chunk at offset {offset} claims {length} bytes past the end of the file")]
    MalformedChunk { offset: usize, length: usize },

    #[error("Font data ended unexpectedly at byte {pos} (wanted {wanted} more)")]
    UnexpectedEnd { pos: usize, wanted: usize },

    #[error("Ligature key is not valid UTF-8: {0}")]
    InvalidText(#[from] std::str::Utf8Error),

    #[error("Attempted to add duplicate ligature for {0:?}")]
    DuplicateKey(String),

    #[error("Ligature key must contain at least one character")]
    EmptyKey,

    #[error("Failed to decode font image: {0}")]
    Decode(String),

    #[error("Failed to crop glyph at ({x}, {y}) size {width}x{height}")]
    CropFailure {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

pub type Result<T> = std::result::Result<T, FontError>;
