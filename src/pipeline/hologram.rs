//! Blue "hologram" rendering: luminance remapped onto a dark-to-cyan
//! gradient with darkened horizontal scan lines.

use image::{Rgb, Rgba, RgbaImage};

/// Parameters of the hologram look.
#[derive(Debug, Clone, PartialEq)]
pub struct HologramStyle {
    /// Colour for luminance 0.
    pub dark: Rgb<u8>,
    /// Colour for luminance 255.
    pub light: Rgb<u8>,
    /// Every `scan_step`-th row gets a scan line.
    pub scan_step: u32,
    /// Opacity of the black scan lines (0.0-1.0).
    pub scan_strength: f32,
}

impl Default for HologramStyle {
    fn default() -> Self {
        Self {
            dark: Rgb([0x00, 0x10, 0x18]),
            light: Rgb([0x58, 0xc6, 0xff]),
            scan_step: 4,
            scan_strength: 0.5,
        }
    }
}

/// Render `img` in the hologram style.
///
/// Colour is replaced, alpha is copied through unchanged.
#[must_use]
pub fn stylize(img: &RgbaImage, style: &HologramStyle) -> RgbaImage {
    let mut out = RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let pixel = img.get_pixel(x, y);
        let Rgb([r, g, b]) = gradient(style.dark, style.light, luminance(*pixel));
        Rgba([r, g, b, pixel[3]])
    });

    draw_scan_lines(&mut out, style.scan_step, style.scan_strength);
    out
}

/// Perceptual luminance (ITU-R BT.601 weights), alpha ignored.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn luminance(pixel: Rgba<u8>) -> u8 {
    let [r, g, b, _] = pixel.0;
    // Standard luminosity formula: 0.299*R + 0.587*G + 0.114*B
    // Safe: clamped to [0, 255] before casting
    0.299_f32
        .mul_add(f32::from(r), 0.587_f32.mul_add(f32::from(g), 0.114 * f32::from(b)))
        .round()
        .clamp(0.0, 255.0) as u8
}

/// Linear interpolation between `dark` (level 0) and `light` (level 255).
fn gradient(dark: Rgb<u8>, light: Rgb<u8>, level: u8) -> Rgb<u8> {
    let t = i32::from(level);
    Rgb(std::array::from_fn(|c| {
        let (lo, hi) = (i32::from(dark[c]), i32::from(light[c]));
        // Rounded division; the result always lies between lo and hi
        let value = lo + ((hi - lo) * t + (hi - lo).signum() * 127) / 255;
        u8::try_from(value).unwrap_or(u8::MAX)
    }))
}

/// Scan line opacity for a strength in 0.0-1.0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scan_alpha(strength: f32) -> u8 {
    // Safe: clamped to [0, 255] before casting
    (255.0 * strength).round().clamp(0.0, 255.0) as u8
}

/// Blend a black line over every `step`-th row, starting at row 0.
///
/// Only colour channels darken; alpha is left as is.
#[allow(clippy::cast_possible_truncation)]
pub fn draw_scan_lines(img: &mut RgbaImage, step: u32, strength: f32) {
    let alpha = u16::from(scan_alpha(strength));
    if alpha == 0 {
        return;
    }
    let keep = 255 - alpha;

    for y in (0..img.height()).step_by(step.max(1) as usize) {
        for x in 0..img.width() {
            let pixel = img.get_pixel_mut(x, y);
            for c in 0..3 {
                // Safe: (c * keep + 127) / 255 <= c
                pixel[c] = ((u16::from(pixel[c]) * keep + 127) / 255) as u8;
            }
        }
    }
}
