//! Built-in 5x7 glyph strip for frame overlay labels.
//!
//! The placeholder frames only ever carry uppercase type labels and
//! `minutes:seconds` timestamps, so a fixed bitmap strip covering A-Z,
//! 0-9, colon, hyphen and space is all the text support the renderer
//! needs. Glyph rows are 5-bit patterns, most significant bit leftmost.

use image::{Rgb, RgbImage};

/// Glyph cell width in pixels (before scaling).
pub const GLYPH_WIDTH: u32 = 5;

/// Glyph cell height in pixels (before scaling).
pub const GLYPH_HEIGHT: u32 = 7;

/// Horizontal gap between glyph cells (before scaling).
const GLYPH_GAP: u32 = 1;

/// Row patterns for a character, or `None` for unsupported input
/// (rendered as a blank cell).
fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c.to_ascii_uppercase() {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        ':' => [0x00, 0x04, 0x04, 0x00, 0x04, 0x04, 0x00],
        '-' => [0x00, 0x00, 0x00, 0x0E, 0x00, 0x00, 0x00],
        ' ' => [0x00; 7],
        _ => return None,
    };
    Some(rows)
}

/// Horizontal advance per character at the given scale.
pub fn advance(scale: u32) -> u32 {
    (GLYPH_WIDTH + GLYPH_GAP) * scale
}

/// Pixel width of a rendered label at the given scale.
pub fn label_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * advance(scale)
}

/// Draw a label onto the canvas with the glyph strip.
///
/// Characters outside the strip advance the cursor without drawing.
/// Pixels falling outside the canvas are skipped.
pub fn draw_label(canvas: &mut RgbImage, text: &str, x: u32, y: u32, scale: u32, color: Rgb<u8>) {
    let scale = scale.max(1);
    let mut cursor_x = x;

    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for (row, pattern) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if pattern & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                        continue;
                    }
                    // One glyph bit becomes a scale x scale block
                    for dy in 0..scale {
                        for dx in 0..scale {
                            let px = cursor_x + col * scale + dx;
                            let py = y + row as u32 * scale + dy;
                            if px < canvas.width() && py < canvas.height() {
                                canvas.put_pixel(px, py, color);
                            }
                        }
                    }
                }
            }
        }
        cursor_x += advance(scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_glyphs_present() {
        for c in "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789:- ".chars() {
            assert!(glyph(c).is_some(), "missing glyph for {:?}", c);
        }
    }

    #[test]
    fn test_unknown_glyph_blank() {
        assert!(glyph('?').is_none());
    }

    #[test]
    fn test_draw_label_marks_pixels() {
        let mut canvas = RgbImage::new(64, 16);
        draw_label(&mut canvas, "A", 0, 0, 1, Rgb([255, 255, 255]));

        let lit = canvas.pixels().filter(|p| p.0 == [255, 255, 255]).count();
        assert!(lit > 0);
    }

    #[test]
    fn test_draw_label_clips_at_edges() {
        let mut canvas = RgbImage::new(4, 4);
        // Must not panic even though the glyph extends past the canvas
        draw_label(&mut canvas, "W", 2, 2, 2, Rgb([255, 255, 255]));
    }

    #[test]
    fn test_label_width() {
        assert_eq!(label_width("2:05", 2), 4 * 12);
    }
}
