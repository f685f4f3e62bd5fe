//! Font image handling
//!
//! Format sniffing, PNG decoding and glyph cropping on top of tiny-skia.

use tiny_skia::{BlendMode, Pixmap, PixmapPaint, Transform};

use crate::{FontError, Result};

/// Image container formats recognised by their magic bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
    Unknown,
}

impl ImageFormat {
    /// Detect format from magic bytes
    pub fn from_bytes(data: &[u8]) -> Self {
        match data {
            [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Self::Png,
            [0xFF, 0xD8, 0xFF, ..] => Self::Jpeg,
            [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => Self::Gif,
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Self::WebP,
            _ => Self::Unknown,
        }
    }

    /// MIME type, as reported in format errors
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::WebP => "image/webp",
            Self::Unknown => "an unknown format",
        }
    }
}

/// Decode a whole PNG file
pub fn decode_png(data: &[u8]) -> Result<Pixmap> {
    Pixmap::decode_png(data).map_err(|e| FontError::Decode(e.to_string()))
}

/// Copy a `width` x `height` region of `image` starting at (`x`, `y`).
///
/// The result always has the requested size; any part of the region
/// outside `image` is left transparent.
pub fn crop(image: &Pixmap, x: u32, y: u32, width: u32, height: u32) -> Result<Pixmap> {
    let failure = FontError::CropFailure { x, y, width, height };
    let (Ok(dx), Ok(dy)) = (i32::try_from(x), i32::try_from(y)) else {
        return Err(failure);
    };
    let Some(mut out) = Pixmap::new(width, height) else {
        return Err(failure);
    };

    let paint = PixmapPaint {
        blend_mode: BlendMode::Source,
        ..PixmapPaint::default()
    };
    out.draw_pixmap(-dx, -dy, image.as_ref(), &paint, Transform::identity(), None);
    Ok(out)
}
