//! End-to-end tests for scribble-font
//!
//! Fonts are built as real PNG files: tiny-skia encodes the glyph sheet and
//! a `foNt` chunk is spliced in right after IHDR.

use scribble_font::*;
use tiny_skia::{Color, Paint, Pixmap, Rect, Transform};

// ============================================================================
// PNG BUILDING HELPERS
// ============================================================================

fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &b in bytes {
        crc ^= b as u32;
        for _ in 0..8 {
            crc = if crc & 1 != 0 { (crc >> 1) ^ 0xEDB8_8320 } else { crc >> 1 };
        }
    }
    !crc
}

fn chunk(tag: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = (payload.len() as u32).to_be_bytes().to_vec();
    out.extend_from_slice(tag);
    out.extend_from_slice(payload);
    let mut covered = tag.to_vec();
    covered.extend_from_slice(payload);
    out.extend_from_slice(&crc32(&covered).to_be_bytes());
    out
}

/// Insert a chunk after the signature and IHDR (8 + 25 bytes)
fn with_chunk(png: &[u8], tag: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = png[..33].to_vec();
    out.extend(chunk(tag, payload));
    out.extend_from_slice(&png[33..]);
    out
}

/// 8x4 sheet: columns 0..3 red, 3..8 blue
fn glyph_sheet() -> Pixmap {
    let mut pixmap = Pixmap::new(8, 4).unwrap();
    let mut paint = Paint::default();
    paint.set_color(Color::from_rgba8(255, 0, 0, 255));
    pixmap.fill_rect(
        Rect::from_xywh(0.0, 0.0, 3.0, 4.0).unwrap(),
        &paint,
        Transform::identity(),
        None,
    );
    paint.set_color(Color::from_rgba8(0, 0, 255, 255));
    pixmap.fill_rect(
        Rect::from_xywh(3.0, 0.0, 5.0, 4.0).unwrap(),
        &paint,
        Transform::identity(),
        None,
    );
    pixmap
}

fn font_png(payload: &[u8]) -> Vec<u8> {
    let png = glyph_sheet().encode_png().unwrap();
    with_chunk(&png, b"foNt", payload)
}

fn load(data: Vec<u8>) -> Result<Font> {
    smol::block_on(Font::load(data))
}

/// row 4, line 10, baseline 1
/// "a"  advance 3: glyph (x 0, width 3)
/// "ab" advance 6: glyphs (x 1, width 5), (x 0, no image)
const PAYLOAD: [u8; 19] = [
    4, 10, 1,
    1, b'a', 3, 1, 0, 3,
    2, b'a', b'b', 6, 2, 1, 5, 0, 0,
    0,
];

// ============================================================================
// LOADING
// ============================================================================

#[test]
fn test_load_font() {
    let font = load(font_png(&PAYLOAD)).unwrap();

    assert_eq!(font.num_ligatures(), 2);
    assert_eq!(font.line_height(), 10);
    assert_eq!(font.baseline(), 1);

    let mut keys: Vec<&str> = font.ligatures().map(|l| l.key.as_str()).collect();
    keys.sort();
    assert_eq!(keys, vec!["a", "ab"]);
}

#[test]
fn test_load_crops_glyphs_in_order() {
    let font = load(font_png(&PAYLOAD)).unwrap();

    let a = font.next_ligature("a").unwrap();
    assert_eq!(a.advance, 3);
    let image = a.glyphs[0].image.as_ref().unwrap();
    assert_eq!((image.width(), image.height()), (3, 4));
    assert_eq!(image.pixel(0, 0).unwrap().red(), 255);
    assert_eq!(image.pixel(2, 3).unwrap().red(), 255);

    let ab = font.next_ligature("abc").unwrap();
    assert_eq!(ab.key, "ab");
    assert_eq!(ab.glyphs.len(), 2);
    assert_eq!(ab.glyphs[0].x_offset, 1);
    let image = ab.glyphs[0].image.as_ref().unwrap();
    assert_eq!((image.width(), image.height()), (5, 4));
    assert_eq!(image.pixel(0, 0).unwrap().blue(), 255);
    assert_eq!(image.pixel(4, 3).unwrap().blue(), 255);
    assert!(ab.glyphs[1].image.is_none());
}

#[test]
fn test_load_imageless_ligature() {
    let font = load(font_png(&[10, 12, 2, 1, 0x41, 5, 1, 3, 0, 0])).unwrap();

    assert_eq!(font.num_ligatures(), 1);
    let lig = font.next_ligature("A").unwrap();
    assert_eq!(lig.advance, 5);
    assert_eq!(lig.glyphs.len(), 1);
    assert_eq!(lig.glyphs[0].x_offset, 3);
    assert!(lig.glyphs[0].image.is_none());
}

#[test]
fn test_load_empty_ligature_list() {
    let font = load(font_png(&[4, 10, 1, 0])).unwrap();
    assert_eq!(font.num_ligatures(), 0);
    assert_eq!(font.line_height(), 10);
}

#[test]
fn test_load_skips_chunks_before_font() {
    let png = glyph_sheet().encode_png().unwrap();
    let png = with_chunk(&png, b"foNt", &PAYLOAD);
    let png = with_chunk(&png, b"tEXt", b"Comment\0scribbles");
    let font = load(png).unwrap();
    assert_eq!(font.num_ligatures(), 2);
}

// ============================================================================
// LOAD ERRORS
// ============================================================================

#[test]
fn test_load_not_png() {
    let err = load(b"GIF89a\x01\x00\x01\x00".to_vec()).unwrap_err();
    assert!(matches!(err, FontError::UnsupportedFormat("image/gif")));
}

#[test]
fn test_load_missing_chunk() {
    let png = glyph_sheet().encode_png().unwrap();
    assert!(matches!(load(png), Err(FontError::MissingChunk)));
}

#[test]
fn test_load_truncated_payload() {
    // Key says 2 bytes but the payload ends after one
    let err = load(font_png(&[4, 10, 1, 2, b'a'])).unwrap_err();
    assert!(matches!(err, FontError::UnexpectedEnd { .. }));

    // Glyph list cut short
    let err = load(font_png(&[4, 10, 1, 1, b'a', 3, 2, 0, 3, 0])).unwrap_err();
    assert!(matches!(err, FontError::UnexpectedEnd { .. }));
}

#[test]
fn test_load_invalid_key() {
    let err = load(font_png(&[4, 10, 1, 1, 0xFF, 3, 0, 0])).unwrap_err();
    assert!(matches!(err, FontError::InvalidText(_)));
}

#[test]
fn test_load_duplicate_key() {
    let payload = [4, 10, 1, 1, b'a', 3, 1, 0, 3, 1, b'a', 4, 1, 0, 2, 0];
    let err = load(font_png(&payload)).unwrap_err();
    assert!(matches!(err, FontError::DuplicateKey(ref key) if key == "a"));
}

#[test]
fn test_load_crop_failure() {
    // Row height 0 cannot produce a glyph bitmap
    let err = load(font_png(&[0, 10, 1, 1, b'a', 3, 1, 0, 3, 0])).unwrap_err();
    assert!(matches!(
        err,
        FontError::CropFailure { x: 0, y: 0, width: 3, height: 0 }
    ));
}

#[test]
fn test_load_undecodable_image() {
    let mut data = PNG_SIGNATURE.to_vec();
    data.extend(chunk(b"foNt", &PAYLOAD));
    data.extend(chunk(b"IEND", &[]));
    assert!(matches!(load(data), Err(FontError::Decode(_))));
}

#[test]
fn test_load_corrupt_chunk_length() {
    let mut data = PNG_SIGNATURE.to_vec();
    data.extend_from_slice(&u32::MAX.to_be_bytes());
    data.extend_from_slice(b"IHDR");
    data.extend_from_slice(&[0; 4]);
    assert!(matches!(load(data), Err(FontError::MalformedChunk { offset: 0, .. })));
}

// ============================================================================
// RENDERING A LOADED FONT
// ============================================================================

#[derive(Default)]
struct RecordingSurface {
    draws: Vec<(i32, i32, u32, u32)>,
}

impl Surface for RecordingSurface {
    fn draw_image(&mut self, image: &Pixmap, x: i32, y: i32) {
        self.draws.push((x, y, image.width(), image.height()));
    }
}

#[derive(Default)]
struct Missing(Vec<char>);

impl Diagnostics for Missing {
    fn missing_ligature(&mut self, ch: char) {
        self.0.push(ch);
    }
}

#[test]
fn test_render_loaded_font() {
    let font = load(font_png(&PAYLOAD)).unwrap();
    let mut renderer = TextRenderer::new(|_: usize| 0, Missing::default());
    let mut surface = RecordingSurface::default();

    renderer.draw_text(&font, &mut surface, "ab?a\na", 0, 20);

    // "ab" at x 0 (+1), "?" skipped, "a" at x 6, then next line
    assert_eq!(
        surface.draws,
        vec![(1, 17, 5, 4), (6, 17, 3, 4), (0, 27, 3, 4)]
    );
    assert_eq!(renderer.diagnostics().0, vec!['?']);
}

#[test]
fn test_render_to_pixmap() {
    let font = load(font_png(&PAYLOAD)).unwrap();
    let mut page = Pixmap::new(32, 32).unwrap();
    let mut renderer = TextRenderer::new(XorShiftPicker::new(7), TracingDiagnostics);

    renderer.draw_text(&font, &mut page, "a", 4, 10);

    // 3x4 red glyph at (4, 7)
    assert_eq!(page.pixel(4, 7).unwrap().red(), 255);
    assert_eq!(page.pixel(6, 10).unwrap().red(), 255);
    assert_eq!(page.pixel(7, 7).unwrap().alpha(), 0);
}

#[test]
fn test_edit_loaded_font() {
    let mut font = load(font_png(&PAYLOAD)).unwrap();

    let removed = font.remove_ligature("ab").unwrap();
    assert_eq!(removed.advance, 6);
    assert_eq!(font.num_ligatures(), 1);
    assert_eq!(font.next_ligature("ab").unwrap().key, "a");

    font.add_ligature(removed).unwrap();
    assert_eq!(font.num_ligatures(), 2);
    assert_eq!(font.next_ligature("ab").unwrap().key, "ab");
}
