//! Custom error types for hologram-cross.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the hologram-cross library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to decode the input image.
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode or write an output image.
    #[error("failed to encode image {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl Error {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for hologram-cross operations.
pub type Result<T> = std::result::Result<T, Error>;
