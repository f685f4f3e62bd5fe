//! Font loading from PNG files
//!
//! Chunk payload layout, all fields u8:
//!
//! ```text
//! row height
//! line height
//! baseline offset
//! <LIGATURE>*
//! 0
//!
//! LIGATURE: key length (nonzero), key (UTF-8), advance, glyph count, <GLYPH>*
//! GLYPH:    x offset, width (0 = no image)
//! ```
//!
//! Glyph images are packed left to right, top to bottom, in rows of
//! `row height` pixels, ignoring ligature boundaries.

use std::sync::Arc;

use smol::Task;
use tiny_skia::Pixmap;

use crate::{
    chunk::{find_chunk, CHUNK_NAME, PNG_SIGNATURE},
    image::{self, ImageFormat},
    Font, FontError, FontReader, Glyph, Ligature, Result,
};

/// Where a glyph's image lives in the font image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GlyphSlot {
    /// Index into the ligature's glyph list
    glyph: usize,
    x: u32,
    y: u32,
    width: u32,
}

/// Streaming parser over a `foNt` payload
struct ChunkParser<'a> {
    reader: FontReader<'a>,
    row_height: u8,
    line_height: u8,
    baseline: u8,
    image_width: u32,
    in_x: u32,
    in_y: u32,
}

impl<'a> ChunkParser<'a> {
    /// Read the font header
    fn new(payload: &'a [u8], image_width: u32) -> Result<Self> {
        let mut reader = FontReader::new(payload);
        let row_height = reader.next_byte()?;
        let line_height = reader.next_byte()?;
        let baseline = reader.next_byte()?;
        Ok(Self {
            reader,
            row_height,
            line_height,
            baseline,
            image_width,
            in_x: 0,
            in_y: 0,
        })
    }

    /// Read the next ligature, or `None` at the terminator
    fn next_ligature(&mut self) -> Result<Option<(Ligature, Vec<GlyphSlot>)>> {
        let key_len = self.reader.next_byte()?;
        if key_len == 0 {
            return Ok(None);
        }
        let key = std::str::from_utf8(self.reader.next_slice(key_len as usize)?)?;
        let advance = self.reader.next_byte()?;
        let num_glyphs = self.reader.next_byte()?;

        let mut glyphs = Vec::with_capacity(num_glyphs as usize);
        let mut slots = Vec::new();
        for glyph in 0..num_glyphs as usize {
            glyphs.push(Glyph::new(self.reader.next_byte()?));
            let width = self.reader.next_byte()?;
            if width != 0 {
                slots.push(self.place(glyph, width as u32)?);
            }
        }

        Ok(Some((Ligature::new(key, advance, glyphs), slots)))
    }

    /// Claim the next `width` pixels of the packed glyph rows
    fn place(&mut self, glyph: usize, width: u32) -> Result<GlyphSlot> {
        let slot = GlyphSlot {
            glyph,
            x: self.in_x,
            y: self.in_y,
            width,
        };
        self.in_x = self.in_x.saturating_add(width);
        if self.in_x >= self.image_width {
            self.in_x = 0;
            self.in_y = self
                .in_y
                .checked_add(self.row_height as u32)
                .ok_or(FontError::CropFailure {
                    x: slot.x,
                    y: slot.y,
                    width,
                    height: self.row_height as u32,
                })?;
        }
        Ok(slot)
    }
}

/// A glyph crop in flight
struct PendingGlyph {
    key: String,
    glyph: usize,
    task: Task<Result<Pixmap>>,
}

impl Font {
    /// Load a font from the bytes of a PNG file.
    ///
    /// Glyph crops run concurrently; the first failure aborts the load and
    /// the partly built font is dropped.
    pub async fn load(data: Vec<u8>) -> Result<Font> {
        let format = ImageFormat::from_bytes(&data);
        if format != ImageFormat::Png {
            return Err(FontError::UnsupportedFormat(format.mime_type()));
        }

        let data: Arc<[u8]> = data.into();
        let decoding = smol::unblock({
            let data = Arc::clone(&data);
            move || image::decode_png(&data)
        });

        let payload = find_chunk(&data[PNG_SIGNATURE.len()..], CHUNK_NAME)?;
        let sheet = Arc::new(decoding.await?);
        tracing::debug!(
            "Decoded font image {}x{}, {} byte font chunk",
            sheet.width(),
            sheet.height(),
            payload.len()
        );

        let mut parser = ChunkParser::new(payload, sheet.width())?;
        let mut font = Font::with_metrics(parser.line_height, parser.baseline);
        let row_height = parser.row_height as u32;

        let mut pending = Vec::new();
        while let Some((ligature, slots)) = parser.next_ligature()? {
            for slot in slots {
                let sheet = Arc::clone(&sheet);
                pending.push(PendingGlyph {
                    key: ligature.key.clone(),
                    glyph: slot.glyph,
                    task: smol::unblock(move || {
                        image::crop(&sheet, slot.x, slot.y, slot.width, row_height)
                    }),
                });
            }
            font.add_ligature(ligature)?;
        }

        let num_images = pending.len();
        for PendingGlyph { key, glyph, task } in pending {
            let bitmap = task.await?;
            if let Some(slot) = font
                .ligatures
                .get_mut(&key)
                .and_then(|ligature| ligature.glyphs.get_mut(glyph))
            {
                slot.image = Some(bitmap);
            }
        }

        tracing::info!(
            "Loaded font: {} ligatures, {} glyph images",
            font.num_ligatures(),
            num_images
        );
        Ok(font)
    }
}
