//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, decode, resize and HTTP errors, and provides semantic variants
//! for argument validation and per-entry failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Resize buffer error: {0}")]
    ResizeBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[cfg(feature = "remote")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to download {url}: HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("{} not found", path.display())]
    MissingSource { path: PathBuf },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Size must be greater than 0, got: {width}x{height}")]
    ZeroSize { width: u32, height: u32 },

    #[error("Processing error: {0}")]
    Processing(String),
}
