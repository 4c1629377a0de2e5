//! Error types for the slack-icon-merger crate.

use std::path::PathBuf;

/// Errors that can occur while loading, merging, or writing icons.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An input image file could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        /// Path of the file that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An input image could not be decoded (unknown format or corrupt data).
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        /// Path of the file that failed to decode.
        path: PathBuf,
        /// Underlying decoder error.
        source: image::ImageError,
    },

    /// The merged raster could not be encoded as PNG.
    #[error("failed to encode PNG: {0}")]
    Encode(image::ImageError),

    /// An I/O error occurred while writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
