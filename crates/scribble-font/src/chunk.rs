//! PNG chunk stream scanning
//!
//! Each chunk is framed as `[u32 length][4-byte tag][payload][u32 crc]`.
//! The CRC is not checked; the image decoder already does that.

use crate::{FontError, Result};

/// PNG file signature: 89 50 4E 47 0D 0A 1A 0A
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Tag of the chunk holding ligature data
pub const CHUNK_NAME: [u8; 4] = *b"foNt";

/// Length, tag and CRC
const CHUNK_OVERHEAD: usize = 12;

/// Find the payload of the first chunk tagged `tag`.
///
/// `stream` starts right after the PNG signature.
pub fn find_chunk(stream: &[u8], tag: [u8; 4]) -> Result<&[u8]> {
    let mut offset = 0;
    while offset < stream.len() {
        let Some(header) = stream.get(offset..offset + 8) else {
            return Err(FontError::MalformedChunk {
                offset,
                length: stream.len() - offset,
            });
        };
        let length = u32::from_be_bytes([header[0], header[1], header[2], header[3]]) as usize;
        let start = offset + 8;
        let end = start.saturating_add(length);
        if end > stream.len() {
            return Err(FontError::MalformedChunk { offset, length });
        }

        if header[4..8] == tag {
            tracing::debug!("Found {} chunk: {} bytes at {}", tag_name(&tag), length, offset);
            return Ok(&stream[start..end]);
        }
        offset = end.saturating_add(CHUNK_OVERHEAD - 8);
    }
    Err(FontError::MissingChunk)
}

fn tag_name(tag: &[u8; 4]) -> String {
    String::from_utf8_lossy(tag).into_owned()
}
