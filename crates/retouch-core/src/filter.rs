//! Whole-image filters: grayscale, gaussian blur and sharpen.

use image::imageops;

use crate::luminance::calculate_luma_u8;
use crate::EditImage;

/// 3x3 sharpen kernel in row-major order, normalized (sums to 1).
///
/// A strong center weight minus the eight neighbours:
/// `[-2 -2 -2; -2 32 -2; -2 -2 -2] / 16`.
const SHARPEN_KERNEL: [f32; 9] = [
    -2.0 / 16.0,
    -2.0 / 16.0,
    -2.0 / 16.0,
    -2.0 / 16.0,
    32.0 / 16.0,
    -2.0 / 16.0,
    -2.0 / 16.0,
    -2.0 / 16.0,
    -2.0 / 16.0,
];

/// Convert to grayscale.
///
/// Each pixel's RGB channels are replaced by its BT.601 luma. The result is
/// fully opaque: the single grey channel carries no transparency.
pub fn to_grayscale(image: &EditImage) -> EditImage {
    let mut rgba = image.to_rgba_image();
    for px in rgba.pixels_mut() {
        let [r, g, b, _] = px.0;
        let luma = calculate_luma_u8(r, g, b);
        px.0 = [luma, luma, luma, 255];
    }
    EditImage::from_rgba_image(rgba)
}

/// Gaussian blur with the given radius (used as the standard deviation).
///
/// A non-positive radius returns an unchanged copy.
pub fn gaussian_blur(image: &EditImage, radius: f32) -> EditImage {
    if radius <= 0.0 || !radius.is_finite() {
        return image.clone();
    }
    EditImage::from_rgba_image(imageops::blur(&image.to_rgba_image(), radius))
}

/// Sharpen with a fixed 3x3 kernel.
///
/// Only RGB is filtered; alpha is kept. Border pixels, which lack a full
/// neighbourhood, are copied unchanged.
pub fn sharpen(image: &EditImage) -> EditImage {
    let src = image.to_rgba_image();
    let (w, h) = src.dimensions();
    if w < 3 || h < 3 {
        return EditImage::from_rgba_image(src);
    }

    let mut out = src.clone();
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let mut acc = [0.0f32; 3];
            for (i, weight) in SHARPEN_KERNEL.iter().enumerate() {
                let sx = x + (i as u32 % 3) - 1;
                let sy = y + (i as u32 / 3) - 1;
                let px = src.get_pixel(sx, sy).0;
                for (a, &channel) in acc.iter_mut().zip(&px[..3]) {
                    *a += f32::from(channel) * weight;
                }
            }
            let dst = out.get_pixel_mut(x, y);
            for (channel, value) in dst.0[..3].iter_mut().zip(acc) {
                *channel = value.clamp(0.0, 255.0).round() as u8;
            }
        }
    }

    EditImage::from_rgba_image(out)
}
