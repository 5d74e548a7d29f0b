// Background image provider. Decoding happens off the animation thread; the
// result is handed over once through a channel, so a tick either sees no
// image yet or the whole decoded bitmap — never anything in between. A file
// that fails to decode is logged and forgotten: the rain runs without it.

use image::RgbaImage;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;

pub struct ImageLoader {
    rx: Receiver<RgbaImage>,
}

impl ImageLoader {
    /// Start decoding `path` on its own thread.
    pub fn spawn(path: PathBuf) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || match image::open(&path) {
            Ok(img) => {
                // Receiver gone means the window already closed; fine.
                let _ = tx.send(img.to_rgba8());
            }
            Err(e) => log::warn!("could not load {}: {e}", path.display()),
        });
        Self { rx }
    }

    /// Non-blocking poll; yields the decoded image exactly once, then
    /// `None` forever (as it does when the load silently failed).
    pub fn try_take(&self) -> Option<RgbaImage> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_never_delivers() {
        let loader = ImageLoader::spawn(PathBuf::from("/no/such/image.png"));
        // Give the decode thread time to fail and drop its sender.
        thread::sleep(std::time::Duration::from_millis(200));
        assert!(loader.try_take().is_none());
        assert!(loader.try_take().is_none());
    }
}
