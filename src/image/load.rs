//! Subject loading and fitting.

use std::path::Path;

use image::{imageops::FilterType, ImageError, ImageReader, RgbaImage};

use crate::error::{Error, Result};

/// Load an image from disk as RGBA.
///
/// The format is detected from the file contents, so a misleading or
/// missing extension is fine. Sources without an alpha channel come back
/// fully opaque.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the file is missing, unreadable, or not a
/// recognised image format.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();

    let decode_err = |source| Error::Decode {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;

    tracing::debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img.into_rgba8())
}

/// Shrink `subject` so that it fits inside a `size`×`size` box.
///
/// The aspect ratio is kept and nothing is cropped. Subjects that already
/// fit are returned unchanged; this never upscales.
#[must_use]
pub fn fit_within(subject: &RgbaImage, size: u32) -> RgbaImage {
    let (width, height) = subject.dimensions();
    let (new_width, new_height) = fit_dimensions(width, height, size);

    if (new_width, new_height) == (width, height) {
        return subject.clone();
    }

    // Lanczos3 for quality when downscaling
    image::imageops::resize(subject, new_width, new_height, FilterType::Lanczos3)
}

/// Target dimensions for [`fit_within`].
#[allow(clippy::cast_possible_truncation)]
fn fit_dimensions(width: u32, height: u32, size: u32) -> (u32, u32) {
    if width <= size && height <= size {
        return (width, height);
    }

    let scale = |short: u32, long: u32| {
        // Safe: short <= long, so the result is <= size which fits in u32
        let scaled = (u64::from(short) * u64::from(size) + u64::from(long) / 2) / u64::from(long);
        (scaled as u32).clamp(1, size)
    };

    if width >= height {
        (size, scale(height, width))
    } else {
        (scale(width, height), size)
    }
}
