// The visual vocabulary of the rain: a fixed alphabet of halfwidth katakana,
// digits and punctuation, each drawn from a 5x7 row bitmap and blitted at an
// integer scale. One glyph cell is GLYPH_ADVANCE pixels wide (see rain.rs);
// a 5x7 bitmap at scale 2 fills 10x14 of it.

use crate::types::FrameBuffer;

/// Ordered glyph set, fixed for the process lifetime. Every entry has a
/// bitmap in `rows5x7`; the space renders as an empty cell on purpose.
pub const ALPHABET: &[char] = &[
    '日', 'ﾊ', 'ﾐ', 'ﾋ', 'ｰ', 'ｳ', 'ｼ', 'ﾅ', 'ﾓ', 'ﾆ', 'ｻ', 'ﾜ', 'ﾂ', 'ｵ', 'ﾘ', 'ｱ', 'ﾎ',
    'ﾃ', 'ﾏ', 'ｹ', 'ﾒ', 'ｴ', 'ｶ', 'ｷ', 'ﾑ', 'ﾕ', 'ﾗ', 'ｾ', 'ﾈ', 'ｽ', 'ﾀ', 'ﾇ', 'ﾍ', '0',
    '1', '2', '3', '4', '5', '7', '8', '9', 'Z', ':', '・', '.', '"', '=', '*', '+', '-',
    '<', '>', '¦', '｜', '╌', ' ', 'ｸ',
];

/// 5x7 bitmap for one glyph. Each u8 is a row; the low 5 bits are the
/// pixels, bit 4 leftmost. Shapes are stylized, not calligraphy: at rain
/// size they only have to read as the right character family.
fn rows5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Katakana (halfwidth forms, as in the classic rain)
        'ｱ' => g!(0b11111,0b00001,0b00010,0b00100,0b01100,0b00100,0b01000),
        'ｳ' => g!(0b00100,0b00000,0b11111,0b10001,0b00001,0b00010,0b01100),
        'ｴ' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b11111),
        'ｵ' => g!(0b00010,0b00010,0b11111,0b00110,0b01010,0b10010,0b00110),
        'ｶ' => g!(0b00100,0b00100,0b11111,0b00101,0b00101,0b01001,0b10010),
        'ｷ' => g!(0b00100,0b00110,0b11111,0b00100,0b11111,0b00100,0b00100),
        'ｸ' => g!(0b00111,0b01001,0b10001,0b00010,0b00010,0b00100,0b01000),
        'ｹ' => g!(0b01000,0b01111,0b10010,0b00010,0b00100,0b00100,0b01000),
        'ｻ' => g!(0b01010,0b01010,0b11111,0b01010,0b01010,0b00010,0b00100),
        'ｼ' => g!(0b01000,0b00101,0b10001,0b00001,0b00010,0b01100,0b10000),
        'ｽ' => g!(0b11111,0b00001,0b00010,0b00100,0b00100,0b01010,0b10001),
        'ｾ' => g!(0b00100,0b00101,0b00110,0b11100,0b00100,0b00100,0b00111),
        'ﾀ' => g!(0b00111,0b01001,0b10101,0b00010,0b00110,0b00100,0b01000),
        'ﾂ' => g!(0b10101,0b10101,0b00001,0b00001,0b00010,0b00100,0b11000),
        'ﾃ' => g!(0b01110,0b00000,0b11111,0b00100,0b00100,0b00100,0b01000),
        'ﾅ' => g!(0b00100,0b00100,0b11111,0b00010,0b00010,0b00100,0b01000),
        'ﾆ' => g!(0b00000,0b01110,0b00000,0b00000,0b00000,0b11111,0b00000),
        'ﾇ' => g!(0b11111,0b00001,0b10010,0b01010,0b00100,0b01010,0b10001),
        'ﾈ' => g!(0b00100,0b11111,0b00010,0b00100,0b01110,0b10101,0b00100),
        'ﾊ' => g!(0b00000,0b01010,0b01010,0b01010,0b10001,0b10001,0b10001),
        'ﾋ' => g!(0b10000,0b10001,0b10110,0b11000,0b10000,0b10000,0b01111),
        'ﾍ' => g!(0b00000,0b01000,0b10100,0b00010,0b00001,0b00000,0b00000),
        'ﾎ' => g!(0b00100,0b11111,0b00100,0b10101,0b10101,0b00100,0b00100),
        'ﾏ' => g!(0b11111,0b00001,0b00010,0b00100,0b01010,0b00100,0b00000),
        'ﾐ' => g!(0b01111,0b00000,0b00111,0b00000,0b01111,0b00000,0b00000),
        'ﾑ' => g!(0b00100,0b00100,0b01000,0b01000,0b10001,0b11111,0b00001),
        'ﾒ' => g!(0b00010,0b10010,0b01010,0b00100,0b01100,0b10100,0b00100),
        'ﾓ' => g!(0b01111,0b00100,0b11111,0b00100,0b00100,0b00101,0b00011),
        'ﾕ' => g!(0b01110,0b00010,0b00010,0b00010,0b00010,0b11111,0b00000),
        'ﾗ' => g!(0b01110,0b00000,0b11111,0b00001,0b00010,0b00100,0b01000),
        'ﾘ' => g!(0b01010,0b01010,0b01010,0b01010,0b00010,0b00100,0b01000),
        'ﾜ' => g!(0b11111,0b10001,0b00001,0b00001,0b00010,0b00100,0b01000),
        '日' => g!(0b11111,0b10001,0b10001,0b11111,0b10001,0b10001,0b11111),

        // Digits (no 6 in the classic rain set)
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        // Punctuation
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '・' => g!(0b00000,0b00000,0b01100,0b01100,0b00000,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '"' => g!(0b01010,0b01010,0b00000,0b00000,0b00000,0b00000,0b00000),
        '=' => g!(0b00000,0b11111,0b00000,0b11111,0b00000,0b00000,0b00000),
        '*' => g!(0b00100,0b10101,0b01110,0b10101,0b00100,0b00000,0b00000),
        '+' => g!(0b00000,0b00100,0b00100,0b11111,0b00100,0b00100,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '<' => g!(0b00010,0b00100,0b01000,0b10000,0b01000,0b00100,0b00010),
        '>' => g!(0b01000,0b00100,0b00010,0b00001,0b00010,0b00100,0b01000),
        '¦' => g!(0b00100,0b00100,0b00100,0b00000,0b00100,0b00100,0b00100),
        '｜' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'ｰ' => g!(0b00000,0b00000,0b00000,0b01111,0b00000,0b00000,0b00000),
        '╌' => g!(0b00000,0b00000,0b00000,0b11011,0b00000,0b00000,0b00000),
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),

        _ => None,
    }
}

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    fb.pixels[y * fb.width + x] = color;
}

/// Blit one glyph with its top-left corner at (x,y), each bitmap pixel drawn
/// as a `scale` x `scale` block. Off-surface parts are clipped.
pub fn draw_glyph(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32, scale: usize) {
    let Some(rows) = rows5x7(ch) else { return };
    let s = scale as i32;
    for (ry, rowbits) in rows.iter().enumerate() {
        for rx in 0..5 {
            if (rowbits & (1 << (4 - rx))) == 0 {
                continue;
            }
            let bx = x + rx as i32 * s;
            let by = y + ry as i32 * s;
            for dy in 0..s {
                for dx in 0..s {
                    put_pixel(fb, bx + dx, by + dy, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_alphabet_entry_has_a_bitmap() {
        for &ch in ALPHABET {
            assert!(rows5x7(ch).is_some(), "missing bitmap for {ch:?}");
        }
    }

    #[test]
    fn blit_is_clipped_at_every_edge() {
        let mut fb = FrameBuffer::new(8, 8);
        // None of these may panic; partially visible glyphs just clip.
        draw_glyph(&mut fb, -6, -6, '8', 0x00_00FF00, 2);
        draw_glyph(&mut fb, 7, 7, '8', 0x00_00FF00, 2);
        draw_glyph(&mut fb, 100, 100, '8', 0x00_00FF00, 2);
    }

    #[test]
    fn blit_writes_only_the_requested_color() {
        let mut fb = FrameBuffer::new(16, 16);
        draw_glyph(&mut fb, 1, 1, '日', 0x00_00FF00, 2);
        assert!(fb.pixels.iter().any(|&p| p == 0x00_00FF00));
        assert!(fb.pixels.iter().all(|&p| p == 0 || p == 0x00_00FF00));
    }

    #[test]
    fn space_renders_nothing() {
        let mut fb = FrameBuffer::new(16, 16);
        draw_glyph(&mut fb, 2, 2, ' ', 0x00_00FF00, 2);
        assert!(fb.pixels.iter().all(|&p| p == 0));
    }
}
