// Digital rain in a window, with an optional image woven into the stream.
// • Green glyphs fall in 20px columns, fading trails behind them.
// • Give it an image and its green silhouette emerges through the rain
//   once the file finishes decoding.
// • --fullscreen makes the rain track the window size. ESC quits.

mod error;
mod glyphs;
mod loader;
mod rain;
mod silhouette;
mod surface;
mod types;

use clap::Parser;
use error::Error;
use loader::ImageLoader;
use rain::Rain;
use surface::Surface;
use types::FrameBuffer;

#[derive(Parser)]
#[command(about = "Matrix-style digital rain with an optional image silhouette")]
struct Args {
    /// Image whose green silhouette appears in the rain.
    image: Option<std::path::PathBuf>,
    /// Surface width in pixels (ignored once --fullscreen resizes).
    #[arg(long, default_value_t = 800)]
    width: usize,
    /// Surface height in pixels.
    #[arg(long, default_value_t = 600)]
    height: usize,
    /// Track the live window size instead of staying fixed.
    #[arg(long)]
    fullscreen: bool,
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Args::parse();

    let mut surface = Surface::new("Matrix Rain", args.width, args.height, args.fullscreen)?;
    surface.set_target_fps(rain::FRAME_RATE); // the external clock: ~50ms ticks

    let mut screen = FrameBuffer::new(args.width, args.height);
    let mut rain = Rain::new();
    rain.configure(args.width, args.height);
    log::debug!("{} columns over {}x{}", rain.column_count(), args.width, args.height);

    // Decoding runs in the background; until (unless) it finishes, every
    // frame is pure rain.
    let loader = args.image.map(ImageLoader::spawn);

    while surface.is_open() && !surface.esc_pressed() {
        // Resize notification: rebuild the surface-derived state before the
        // tick reads any of it.
        if args.fullscreen {
            let (w, h) = surface.size();
            if (w, h) != (screen.width, screen.height) {
                log::debug!("surface resized to {w}x{h}");
                screen = FrameBuffer::new(w, h);
                rain.configure(w, h);
            }
        }

        // Image delivery is a one-shot state swap between ticks.
        if let Some(loader) = &loader {
            if let Some(img) = loader.try_take() {
                log::info!("silhouette source loaded ({}x{})", img.width(), img.height());
                rain.set_image(img);
            }
        }

        rain.tick(&mut screen);
        surface.present(&screen)?;
    }

    Ok(())
}
