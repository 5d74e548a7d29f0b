// Core pixel-buffer types shared by the animator and the extractor.

/// The drawing surface as the window sees it.
/// Each entry is 0x00RRGGBB for minifb (the top byte is ignored on present).
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl FrameBuffer {
    /// A black (all-zero) buffer of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}

/// The processed silhouette: the source image fitted to the surface, reduced
/// to its green channel, transparent outside the detected subject.
/// Each entry is 0xAARRGGBB; red and blue are always zero.
pub struct SilhouetteMask {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

/// Extract the green channel (0..255) from a packed pixel.
#[inline]
pub fn green(px: u32) -> u32 {
    (px >> 8) & 0xFF
}

/// Replace only the green channel of a packed pixel.
#[inline]
pub fn with_green(px: u32, g: u32) -> u32 {
    (px & !0x00_00FF00) | ((g & 0xFF) << 8)
}
