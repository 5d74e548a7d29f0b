// The only fatal conditions this program has are window ones; everything the
// animation core can run into (missing image, degenerate sizes) degrades to
// "render less" instead of erroring.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("window init error: {0}")]
    WindowInit(String),
    #[error("window update error: {0}")]
    WindowUpdate(String),
}
