// The rain itself: one fall position per 20px column, advanced every tick.
// A tick darkens the previous frame slightly instead of clearing it (the
// trailing-fade look), blits one random glyph per column, then lets the
// silhouette's green show through wherever the rain already drew green ink.

use crate::glyphs::{self, ALPHABET};
use crate::silhouette::SilhouetteExtractor;
use crate::types::{FrameBuffer, SilhouetteMask, green, with_green};
use image::RgbaImage;

/// Width of one glyph cell in pixels; also the per-tick fall speed.
pub const GLYPH_ADVANCE: usize = 20;
/// A column resets once its position exceeds RESET_FLOOR + U(0,1)*RESET_SPREAD,
/// redrawn every tick so the columns stagger on their own.
pub const RESET_FLOOR: f32 = 100.0;
pub const RESET_SPREAD: f32 = 10_000.0;
/// Alpha of the black veil painted over the whole frame each tick ('#0001').
pub const VEIL_ALPHA: u32 = 0x11;
/// Rain ink.
pub const INK: u32 = 0x00_00FF00;
/// Integer scale for the 5x7 glyph bitmaps (10x14 drawn in a 20px cell).
pub const GLYPH_SCALE: usize = 2;
/// External clock cadence, frames per second (50ms ticks).
pub const FRAME_RATE: usize = 20;

pub struct Rain {
    width: usize,
    height: usize,
    /// One fall position per column, pixels from the top.
    ypos: Vec<f32>,
    rng: fastrand::Rng,
    extractor: SilhouetteExtractor,
}

impl Rain {
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            ypos: Vec::new(),
            rng: fastrand::Rng::new(),
            extractor: SilhouetteExtractor::new(),
        }
    }

    /// Surface reset: recompute the column count for the new width, drop all
    /// fall state back to the top, and re-fit the silhouette. Idempotent;
    /// the host calls this on every resize notification.
    pub fn configure(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        // Zero width means no surface at all, so no columns either (the
        // floor(w/advance)+1 formula would still hand out one).
        let cols = if width == 0 { 0 } else { width / GLYPH_ADVANCE + 1 };
        self.ypos = vec![0.0; cols];
        self.extractor.retarget(width, height);
    }

    /// A decoded image arrived (or was replaced); the mask is rebuilt for
    /// the current surface size before the next tick reads it.
    pub fn set_image(&mut self, image: RgbaImage) {
        self.extractor.set_source(image);
    }

    pub fn column_count(&self) -> usize {
        self.ypos.len()
    }

    /// Advance the animation by one frame. Never fails: a missing mask means
    /// plain rain, a zero-sized surface means nothing to do.
    pub fn tick(&mut self, fb: &mut FrameBuffer) {
        if self.width == 0 || self.height == 0 || fb.width == 0 || fb.height == 0 {
            return;
        }

        // 1) Veil, not clear: every channel decays toward black so the
        //    previous glyphs linger as a fading trail.
        fade(fb, VEIL_ALPHA);

        // 2+3) One random glyph per column at its current position, then the
        //      fall-state update against a freshly drawn threshold.
        for col in 0..self.ypos.len() {
            let ch = ALPHABET[self.rng.usize(..ALPHABET.len())];
            let y = self.ypos[col];
            glyphs::draw_glyph(fb, (col * GLYPH_ADVANCE) as i32, y as i32, ch, INK, GLYPH_SCALE);
            self.ypos[col] = if y > reset_threshold(&mut self.rng) {
                0.0
            } else {
                y + GLYPH_ADVANCE as f32
            };
        }

        // 4) Weave the silhouette in: where this frame has green ink AND the
        //    mask has green, the mask's green wins. The image is only ever
        //    legible through glyphs the rain actually drew; keep it that way.
        if let Some(mask) = self.extractor.mask() {
            composite_mask(fb, mask);
        }
    }
}

#[inline]
fn reset_threshold(rng: &mut fastrand::Rng) -> f32 {
    RESET_FLOOR + rng.f32() * RESET_SPREAD
}

/// Multiply every channel by (255 - alpha)/255, i.e. paint translucent black
/// over the whole frame.
fn fade(fb: &mut FrameBuffer, alpha: u32) {
    let keep = 255 - alpha;
    for px in fb.pixels.iter_mut() {
        let r = ((*px >> 16) & 0xFF) * keep / 255;
        let g = ((*px >> 8) & 0xFF) * keep / 255;
        let b = (*px & 0xFF) * keep / 255;
        *px = (r << 16) | (g << 8) | b;
    }
}

/// The channel-intersection overwrite. Single pass; a stale mask from before
/// a resize is skipped until re-extraction catches up.
fn composite_mask(fb: &mut FrameBuffer, mask: &SilhouetteMask) {
    if mask.width != fb.width || mask.height != fb.height {
        return;
    }
    for (px, &m) in fb.pixels.iter_mut().zip(mask.pixels.iter()) {
        let frame_g = green(*px);
        let mask_g = green(m);
        if frame_g > 0 && mask_g > 0 {
            *px = with_green(*px, mask_g);
        }
    }
}
