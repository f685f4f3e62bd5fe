//! Text rendering
//!
//! Greedy left-to-right layout: at each position the longest matching
//! ligature is drawn with one of its glyphs picked at random.

use std::time::{SystemTime, UNIX_EPOCH};

use tiny_skia::{Pixmap, PixmapPaint, Transform};

use crate::Font;

/// Something glyph bitmaps can be drawn onto
pub trait Surface {
    /// Draw `image` with its top-left corner at (`x`, `y`)
    fn draw_image(&mut self, image: &Pixmap, x: i32, y: i32);
}

impl Surface for Pixmap {
    fn draw_image(&mut self, image: &Pixmap, x: i32, y: i32) {
        self.draw_pixmap(
            x,
            y,
            image.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }
}

/// Chooses which alternate glyph of a ligature to draw
pub trait GlyphPicker {
    /// Return an index in `0..len`; `len` is never zero
    fn pick(&mut self, len: usize) -> usize;
}

impl<F: FnMut(usize) -> usize> GlyphPicker for F {
    fn pick(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// XorShift random number generator for glyph alternates
#[derive(Debug, Clone)]
pub struct XorShiftPicker {
    state: u64,
}

impl XorShiftPicker {
    /// Deterministic sequence for a given seed
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    /// Seed from the system clock
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x2545_F491_4F6C_DD1D);
        Self::new(seed)
    }

    fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl GlyphPicker for XorShiftPicker {
    fn pick(&mut self, len: usize) -> usize {
        (self.next() % len as u64) as usize
    }
}

/// Receives non-fatal problems found while drawing
pub trait Diagnostics {
    /// `ch` has no ligature and was skipped
    fn missing_ligature(&mut self, ch: char);
}

/// Reports diagnostics as tracing warnings
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn missing_ligature(&mut self, ch: char) {
        tracing::warn!("Missing ligature: {:?}", ch);
    }
}

/// Draws text with a font onto a [`Surface`]
pub struct TextRenderer<P = XorShiftPicker, D = TracingDiagnostics> {
    picker: P,
    diagnostics: D,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(XorShiftPicker::from_time(), TracingDiagnostics)
    }
}

impl<P: GlyphPicker, D: Diagnostics> TextRenderer<P, D> {
    /// Create a renderer with the given glyph picker and diagnostics sink
    pub fn new(picker: P, diagnostics: D) -> Self {
        Self { picker, diagnostics }
    }

    /// Diagnostics sink, for inspecting what was reported
    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Draw `text` with its first line's baseline at `start_y`.
    ///
    /// `'\n'` starts a new line `line_height` below at `start_x`.
    /// Characters without a ligature are reported and skipped.
    /// Pen coordinates saturate at the `i32` range.
    pub fn draw_text<S: Surface + ?Sized>(
        &mut self,
        font: &Font,
        surface: &mut S,
        text: &str,
        start_x: i32,
        start_y: i32,
    ) {
        let mut x = start_x;
        let mut y = start_y;
        let mut rest = text;

        while let Some(c) = rest.chars().next() {
            if c == '\n' {
                y = y.saturating_add(font.line_height() as i32);
                x = start_x;
                rest = &rest[1..];
                continue;
            }

            let Some(ligature) = font.next_ligature(rest) else {
                self.diagnostics.missing_ligature(c);
                rest = &rest[c.len_utf8()..];
                continue;
            };
            rest = &rest[ligature.key.len()..];

            if !ligature.glyphs.is_empty() {
                let index = self.picker.pick(ligature.glyphs.len());
                if let Some(glyph) = ligature.glyphs.get(index) {
                    if let Some(image) = &glyph.image {
                        surface.draw_image(
                            image,
                            x.saturating_add(glyph.x_offset as i32),
                            y.saturating_sub(image.height() as i32)
                                .saturating_add(font.baseline() as i32),
                        );
                    }
                }
            }
            x = x.saturating_add(ligature.advance as i32);
        }
    }
}

impl Font {
    /// Draw `text` with random glyph alternates, logging missing ligatures
    pub fn draw_text<S: Surface + ?Sized>(&self, surface: &mut S, text: &str, x: i32, y: i32) {
        let mut renderer: TextRenderer = TextRenderer::default();
        renderer.draw_text(self, surface, text, x, y);
    }
}
