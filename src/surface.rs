// Window wrapper: the host drawing surface the animator renders into.
// The core never creates pixels on its own; it borrows the FrameBuffer and
// this type pushes that buffer to the screen once per tick.

use crate::error::Error;
use crate::types::FrameBuffer;
use minifb::{Key, Window, WindowOptions};

pub struct Surface {
    window: Window,
}

impl Surface {
    /// Open the window. With `resizable` set, the host may change the surface
    /// dimensions at any time and `size()` reports the current ones.
    pub fn new(title: &str, width: usize, height: usize, resizable: bool) -> Result<Self, Error> {
        let opts = WindowOptions { resize: resizable, ..WindowOptions::default() };
        let window = Window::new(title, width, height, opts)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Cap the present rate; this is the external clock driving `tick()`.
    pub fn set_target_fps(&mut self, fps: usize) {
        self.window.set_target_fps(fps);
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, fb: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&fb.pixels, fb.width, fb.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Current surface dimensions in pixels (tracks live resizes).
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    /// False once the user closes the window.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }
}
