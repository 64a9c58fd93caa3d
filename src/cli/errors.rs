use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid size parameter: {size}. Must be WIDTHxHEIGHT, e.g. 300x200")]
    InvalidSize { size: String },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: String },

    #[error("Download support is not compiled in. Rebuild with --features remote")]
    #[cfg_attr(feature = "remote", allow(dead_code))]
    RemoteDisabled,

    #[error(transparent)]
    Library(#[from] gamethumbs::Error),
}
