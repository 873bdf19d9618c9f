//! Luma calculation using ITU-R BT.601 coefficients.
//!
//! These are the weights used when an RGB image is collapsed to a single
//! grey channel, both by the grayscale filter and by contrast adjustment
//! when it measures the mean brightness of an image.

/// ITU-R BT.601 coefficient for red channel in luma calculation.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for green channel in luma calculation.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for blue channel in luma calculation.
pub const LUMA_B: f32 = 0.114;

/// Calculate luma from u8 RGB values (0 to 255).
///
/// # Returns
/// Luma value (0-255), rounded to nearest
#[inline]
pub fn calculate_luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let luma = LUMA_R * f32::from(r) + LUMA_G * f32::from(g) + LUMA_B * f32::from(b);
    luma.clamp(0.0, 255.0).round() as u8
}

/// Mean luma of an RGBA8 pixel buffer, rounded to nearest.
///
/// Alpha is ignored. Returns 0 for an empty buffer.
pub fn mean_luma_rgba(pixels: &[u8]) -> u8 {
    let mut total: u64 = 0;
    let mut count: u64 = 0;
    for px in pixels.chunks_exact(4) {
        total += u64::from(calculate_luma_u8(px[0], px[1], px[2]));
        count += 1;
    }
    if count == 0 {
        return 0;
    }
    ((total as f64 / count as f64) + 0.5) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_sum_to_one() {
        let sum = LUMA_R + LUMA_G + LUMA_B;
        assert!((sum - 1.0).abs() < 1e-6, "Coefficients should sum to 1.0");
    }

    #[test]
    fn test_luma_extremes() {
        assert_eq!(calculate_luma_u8(255, 255, 255), 255);
        assert_eq!(calculate_luma_u8(0, 0, 0), 0);
    }

    #[test]
    fn test_luma_primaries() {
        assert_eq!(calculate_luma_u8(255, 0, 0), 76);
        assert_eq!(calculate_luma_u8(0, 255, 0), 150);
        assert_eq!(calculate_luma_u8(0, 0, 255), 29);
    }

    #[test]
    fn test_mean_luma() {
        let pixels = [0, 0, 0, 255, 255, 255, 255, 0];
        assert_eq!(mean_luma_rgba(&pixels), 128);
        assert_eq!(mean_luma_rgba(&[]), 0);
    }
}
