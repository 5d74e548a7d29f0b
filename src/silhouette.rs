// Turns an arbitrary decoded image into the green silhouette woven into the
// rain: fit the image into the surface with its aspect ratio intact, then
// keep only the green channel and force transparency wherever that channel
// is zero. "No green signal" counts as background; that heuristic is the
// whole segmentation.

use crate::types::SilhouetteMask;
use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Where a source image lands inside a target rectangle: the largest
/// centered rectangle with the source's aspect ratio. Coordinates may be
/// fractional; rounding happens only at draw time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRect {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
}

/// Aspect-preserving letterbox fit. The relatively taller side fills its
/// target axis exactly; the other axis scales along and gets centered.
pub fn fit(image_w: f32, image_h: f32, target_w: f32, target_h: f32) -> FitRect {
    let image_ar = image_w / image_h;
    let target_ar = target_w / target_h;
    if image_ar < target_ar {
        // Image is taller relative to the target: height fills.
        let height = target_h;
        let width = image_w * (height / image_h);
        FitRect { width, height, x: (target_w - width) / 2.0, y: 0.0 }
    } else if image_ar > target_ar {
        // Image is wider: width fills.
        let width = target_w;
        let height = image_h * (width / image_w);
        FitRect { width, height, x: 0.0, y: (target_h - height) / 2.0 }
    } else {
        FitRect { width: target_w, height: target_h, x: 0.0, y: 0.0 }
    }
}

/// Owns the source bitmap (if one ever arrives) and the mask derived from it
/// for the current surface size. The mask is replaced whole on every
/// re-extraction, never patched in place.
pub struct SilhouetteExtractor {
    source: Option<RgbaImage>,
    mask: Option<SilhouetteMask>,
    target_w: usize,
    target_h: usize,
}

impl SilhouetteExtractor {
    pub fn new() -> Self {
        Self { source: None, mask: None, target_w: 0, target_h: 0 }
    }

    /// Publish a freshly decoded image and extract against the current
    /// target size. Replaces any earlier source and mask.
    pub fn set_source(&mut self, image: RgbaImage) {
        self.source = Some(image);
        self.extract();
    }

    /// Point the extractor at new surface dimensions (surface reset/resize)
    /// and re-extract if a source is loaded. A zero dimension is a no-op:
    /// the prior mask stays as it was.
    pub fn retarget(&mut self, width: usize, height: usize) {
        if width == 0 || height == 0 {
            return;
        }
        self.target_w = width;
        self.target_h = height;
        self.extract();
    }

    /// The cached mask; `None` until an image has loaded and a positive
    /// target size is known.
    pub fn mask(&self) -> Option<&SilhouetteMask> {
        self.mask.as_ref()
    }

    fn extract(&mut self) {
        let Some(src) = &self.source else { return };
        let (tw, th) = (self.target_w, self.target_h);
        if tw == 0 || th == 0 {
            return;
        }

        let rect = fit(src.width() as f32, src.height() as f32, tw as f32, th as f32);
        let rw = (rect.width.round() as u32).max(1);
        let rh = (rect.height.round() as u32).max(1);

        // Stage the fitted image on a fully transparent surface-sized canvas.
        let scaled;
        let fitted: &RgbaImage = if (rw, rh) == src.dimensions() {
            src
        } else {
            scaled = imageops::resize(src, rw, rh, FilterType::Triangle);
            &scaled
        };
        let mut staged = RgbaImage::new(tw as u32, th as u32);
        imageops::overlay(&mut staged, fitted, rect.x.round() as i64, rect.y.round() as i64);

        // Channel isolation: green survives, red/blue die, and pixels with
        // no green signal go fully transparent.
        let mut pixels = Vec::with_capacity(tw * th);
        for p in staged.pixels() {
            let g = p[1] as u32;
            let a = if g == 0 { 0 } else { p[3] as u32 };
            pixels.push((a << 24) | (g << 8));
        }
        self.mask = Some(SilhouetteMask { width: tw, height: th, pixels });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::green;
    use image::Rgba;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn equal_aspect_fills_exactly() {
        let r = fit(400.0, 300.0, 800.0, 600.0);
        assert_eq!(r, FitRect { width: 800.0, height: 600.0, x: 0.0, y: 0.0 });
    }

    #[test]
    fn taller_image_letterboxes_horizontally() {
        let r = fit(100.0, 200.0, 800.0, 600.0);
        assert!(approx(r.height, 600.0));
        assert!(approx(r.width, 300.0));
        assert!(approx(r.x, 250.0));
        assert!(approx(r.y, 0.0));
    }

    #[test]
    fn wider_image_letterboxes_vertically() {
        let r = fit(400.0, 100.0, 800.0, 600.0);
        assert!(approx(r.width, 800.0));
        assert!(approx(r.height, 200.0));
        assert!(approx(r.x, 0.0));
        assert!(approx(r.y, 200.0));
    }

    #[test]
    fn fit_preserves_aspect_and_bounds_across_sizes() {
        let cases = [
            (640.0, 480.0, 800.0, 600.0),
            (1.0, 1000.0, 300.0, 300.0),
            (1920.0, 1080.0, 100.0, 400.0),
            (33.0, 7.0, 7.0, 33.0),
            (5.0, 5.0, 1024.0, 768.0),
        ];
        for (iw, ih, tw, th) in cases {
            let r = fit(iw, ih, tw, th);
            assert!(r.width <= tw + 1e-3 && r.height <= th + 1e-3);
            // One axis matches its target exactly.
            assert!(approx(r.width, tw) || approx(r.height, th));
            // Aspect ratio survives within rounding.
            assert!((r.width / r.height - iw / ih).abs() < 1e-3, "{iw}x{ih} into {tw}x{th}");
            // Centered letterbox.
            assert!(approx(r.x * 2.0 + r.width, tw));
            assert!(approx(r.y * 2.0 + r.height, th));
        }
    }

    #[test]
    fn mask_isolates_green_and_forces_transparency() {
        let mut src = RgbaImage::new(2, 2);
        src.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
        src.put_pixel(1, 0, Rgba([200, 0, 200, 255])); // no green signal
        src.put_pixel(0, 1, Rgba([0, 77, 0, 128]));
        src.put_pixel(1, 1, Rgba([0, 200, 0, 0])); // fully transparent

        let mut ex = SilhouetteExtractor::new();
        ex.retarget(2, 2); // equal aspect: identity fit, no resampling
        ex.set_source(src);

        let mask = ex.mask().expect("mask after load");
        assert_eq!((mask.width, mask.height), (2, 2));
        for &px in &mask.pixels {
            assert_eq!((px >> 16) & 0xFF, 0, "red must be zero");
            assert_eq!(px & 0xFF, 0, "blue must be zero");
            if green(px) == 0 {
                assert_eq!(px >> 24, 0, "no green implies transparent");
            }
        }
        assert_eq!(mask.pixels[0], 0xFF_00_14_00);
        assert_eq!(mask.pixels[1], 0); // green == 0 kills alpha
        assert_eq!(mask.pixels[2], 0x80_00_4D_00);
        // A zero-alpha source pixel contributes nothing when staged (the
        // overlay composites "over" transparent black), so its green reads
        // back as 0 and the whole mask pixel collapses to 0.
        assert_eq!(mask.pixels[3], 0);
    }

    #[test]
    fn letterboxed_region_is_transparent() {
        // 1x2 all-green into 4x2: height fills, column offset 1.5 -> 2.
        let mut src = RgbaImage::new(1, 2);
        src.put_pixel(0, 0, Rgba([0, 255, 0, 255]));
        src.put_pixel(0, 1, Rgba([0, 255, 0, 255]));

        let mut ex = SilhouetteExtractor::new();
        ex.retarget(4, 2);
        ex.set_source(src);

        let mask = ex.mask().unwrap();
        for y in 0..2usize {
            for x in 0..4usize {
                let px = mask.pixels[y * 4 + x];
                if x == 2 {
                    assert_eq!(px, 0xFF_00_FF_00);
                } else {
                    assert_eq!(px, 0, "letterbox at ({x},{y}) must stay empty");
                }
            }
        }
    }

    #[test]
    fn no_source_means_no_mask() {
        let mut ex = SilhouetteExtractor::new();
        ex.retarget(800, 600);
        assert!(ex.mask().is_none());
    }

    #[test]
    fn degenerate_retarget_keeps_prior_mask() {
        let mut src = RgbaImage::new(2, 2);
        for y in 0..2 {
            for x in 0..2 {
                src.put_pixel(x, y, Rgba([0, 9, 0, 255]));
            }
        }
        let mut ex = SilhouetteExtractor::new();
        ex.retarget(2, 2);
        ex.set_source(src);
        let before: Vec<u32> = ex.mask().unwrap().pixels.clone();

        ex.retarget(0, 600);
        ex.retarget(800, 0);

        let after = ex.mask().expect("mask survives degenerate retargets");
        assert_eq!((after.width, after.height), (2, 2));
        assert_eq!(after.pixels, before);
    }
}
