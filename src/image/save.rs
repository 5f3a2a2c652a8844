//! Image saving utilities.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::{DynamicImage, ImageError, RgbaImage};

use crate::error::{Error, Result};

/// Save an RGBA image, inferring the format from the file extension.
///
/// JPEG has no alpha channel, so `jpg`/`jpeg` outputs are flattened to RGB
/// and encoded with `quality` (1-100). Other formats keep the alpha channel.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the extension is unsupported or the file
/// cannot be written.
pub fn save_image<P: AsRef<Path>>(img: &RgbaImage, path: P, quality: u8) -> Result<()> {
    let path = path.as_ref();
    let encode_err = |source| Error::Encode {
        path: path.to_path_buf(),
        source,
    };

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();

    match extension.as_str() {
        "jpg" | "jpeg" => {
            let file = File::create(path).map_err(|e| encode_err(ImageError::IoError(e)))?;
            let mut output = BufWriter::new(file);
            let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut output, quality);
            DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(img.clone()).to_rgb8())
                .write_with_encoder(encoder)
                .map_err(encode_err)?;
        }
        _ => {
            img.save(path).map_err(encode_err)?;
        }
    }

    tracing::debug!("Wrote {}", path.display());
    Ok(())
}
