//! Brightness and contrast adjustments.
//!
//! Both operate on RGB and leave alpha untouched. A factor of 1.0 is the
//! identity; UI controls in the range -50..=50 map linearly onto 0.0..=2.0
//! via [`control_to_factor`].

use crate::luminance::mean_luma_rgba;
use crate::EditImage;

/// Lowest and highest value accepted from a brightness/contrast control.
pub const CONTROL_RANGE: (i32, i32) = (-50, 50);

/// Map a control value (-50 to 50) to an enhancement factor (0.0 to 2.0).
///
/// Values outside the control range are clamped.
///
/// # Example
/// ```ignore
/// assert_eq!(control_to_factor(0), 1.0);
/// assert_eq!(control_to_factor(-50), 0.0);
/// assert_eq!(control_to_factor(25), 1.5);
/// ```
pub fn control_to_factor(value: i32) -> f32 {
    let value = value.clamp(CONTROL_RANGE.0, CONTROL_RANGE.1);
    1.0 + value as f32 / 50.0
}

/// Scale brightness.
///
/// Formula: `output = input * factor`
pub fn adjust_brightness(image: &EditImage, factor: f32) -> EditImage {
    let mut rgba = image.to_rgba_image();
    if factor == 1.0 {
        return EditImage::from_rgba_image(rgba);
    }

    for chunk in rgba.chunks_exact_mut(4) {
        for channel in &mut chunk[..3] {
            *channel = to_u8(f32::from(*channel) * factor);
        }
    }
    EditImage::from_rgba_image(rgba)
}

/// Scale contrast around the image's mean luma.
///
/// Formula: `output = mean + (input - mean) * factor`
///
/// A factor of 0.0 produces a flat image of the mean grey level.
pub fn adjust_contrast(image: &EditImage, factor: f32) -> EditImage {
    let mut rgba = image.to_rgba_image();
    if factor == 1.0 {
        return EditImage::from_rgba_image(rgba);
    }

    let mean = f32::from(mean_luma_rgba(&rgba));
    for chunk in rgba.chunks_exact_mut(4) {
        for channel in &mut chunk[..3] {
            *channel = to_u8(mean + (f32::from(*channel) - mean) * factor);
        }
    }
    EditImage::from_rgba_image(rgba)
}

#[inline]
fn to_u8(value: f32) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tone() -> EditImage {
        // One dark and one bright pixel, mean luma 128
        let rgba = image::RgbaImage::from_raw(2, 1, vec![64, 64, 64, 255, 192, 192, 192, 128])
            .unwrap();
        EditImage::from_rgba_image(rgba)
    }

    #[test]
    fn test_control_to_factor() {
        assert_eq!(control_to_factor(0), 1.0);
        assert_eq!(control_to_factor(-50), 0.0);
        assert_eq!(control_to_factor(50), 2.0);
        assert_eq!(control_to_factor(25), 1.5);
        assert_eq!(control_to_factor(-500), 0.0);
        assert_eq!(control_to_factor(90), 2.0);
    }

    #[test]
    fn test_brightness_identity() {
        let img = two_tone();
        assert_eq!(adjust_brightness(&img, 1.0), img);
    }

    #[test]
    fn test_brightness_scales_and_clamps() {
        let img = two_tone();
        let brighter = adjust_brightness(&img, 1.5);

        assert_eq!(&brighter.pixels()[0..4], &[96, 96, 96, 255]);
        assert_eq!(&brighter.pixels()[4..8], &[255, 255, 255, 128]);
    }

    #[test]
    fn test_brightness_zero_is_black_with_alpha_kept() {
        let black = adjust_brightness(&two_tone(), 0.0);
        assert_eq!(black.pixels(), &[0, 0, 0, 255, 0, 0, 0, 128]);
    }

    #[test]
    fn test_contrast_increase() {
        let img = two_tone();
        let result = adjust_contrast(&img, 1.5);

        // 128 + (64 - 128) * 1.5 = 32, 128 + (192 - 128) * 1.5 = 224
        assert_eq!(&result.pixels()[0..4], &[32, 32, 32, 255]);
        assert_eq!(&result.pixels()[4..8], &[224, 224, 224, 128]);
    }

    #[test]
    fn test_contrast_zero_flattens_to_mean() {
        let result = adjust_contrast(&two_tone(), 0.0);
        assert_eq!(result.pixels(), &[128, 128, 128, 255, 128, 128, 128, 128]);
    }
}
