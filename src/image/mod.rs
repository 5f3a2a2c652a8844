//! Image loading, fitting, and saving utilities.

mod load;
mod save;

pub use load::{fit_within, load_rgba};
pub use save::save_image;

use image::Rgb;

use crate::error::{Error, Result};

/// Parse a `#rrggbb` (or bare `rrggbb`) hex colour.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the string is not six hex digits.
pub fn parse_hex_color(value: &str) -> Result<Rgb<u8>> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::invalid(
            "color",
            format!("expected #rrggbb, got {value:?}"),
        ));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|e| Error::invalid("color", format!("{value:?}: {e}")))
    };

    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}
