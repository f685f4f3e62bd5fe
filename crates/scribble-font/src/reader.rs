//! Binary reader for font chunk data

use crate::{FontError, Result};

/// Forward-only byte reader with bounds checking
pub struct FontReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> FontReader<'a> {
    /// Create a new reader positioned at the first byte
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Get current position
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Read one byte
    pub fn next_byte(&mut self) -> Result<u8> {
        let Some(&v) = self.data.get(self.pos) else {
            return Err(FontError::UnexpectedEnd { pos: self.pos, wanted: 1 });
        };
        self.pos += 1;
        Ok(v)
    }

    /// Read the next `n` bytes as a borrowed slice
    pub fn next_slice(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(FontError::UnexpectedEnd { pos: self.pos, wanted: n });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Remaining bytes
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }
}
