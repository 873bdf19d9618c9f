//! Image rotation on an expanded canvas.
//!
//! Quarter turns are exact pixel permutations. Any other angle uses
//! inverse mapping: for each output pixel we find the source position and
//! interpolate it with one of two filters:
//! - **Bilinear**: Fast, 2x2 neighborhood
//! - **Lanczos3**: Sharper, 6x6 neighborhood
//!
//! Angles are in degrees, positive = clockwise. For a clockwise angle θ in
//! a y-down coordinate system the inverse transform is:
//! ```text
//! src_x =  (dst_x - cx) * cos(θ) + (dst_y - cy) * sin(θ) + src_cx
//! src_y = -(dst_x - cx) * sin(θ) + (dst_y - cy) * cos(θ) + src_cy
//! ```
//! Output pixels that map outside the source are fully transparent.

use image::{imageops, RgbaImage};
use serde::{Deserialize, Serialize};

use super::TransformError;
use crate::EditImage;

/// Angles closer than this to a multiple of 90° are treated as exact.
const ANGLE_EPSILON: f64 = 0.001;

/// Interpolation filter for rotation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationFilter {
    /// Fast bilinear interpolation.
    #[default]
    Bilinear,
    /// High-quality Lanczos3 interpolation.
    Lanczos3,
}

/// Number of clockwise quarter turns if `angle_degrees` is a multiple of 90°.
fn quarter_turns(angle_degrees: f64) -> Option<u8> {
    let normalized = angle_degrees.rem_euclid(360.0);
    let turns = (normalized / 90.0).round();
    if (normalized - turns * 90.0).abs() < ANGLE_EPSILON {
        Some((turns as u8) % 4)
    } else {
        None
    }
}

/// Compute the dimensions of the bounding box for a rotated image.
///
/// # Example
///
/// ```ignore
/// // 90-degree rotation swaps dimensions
/// assert_eq!(compute_rotated_bounds(100, 50, 90.0), (50, 100));
/// ```
pub fn compute_rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    match quarter_turns(angle_degrees) {
        Some(0) | Some(2) => return (width, height),
        Some(_) => return (height, width),
        None => {}
    }

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos().abs();
    let sin = angle_rad.sin().abs();

    let w = f64::from(width);
    let h = f64::from(height);

    // new_w = |w*cos| + |h*sin|, new_h = |w*sin| + |h*cos|
    let new_w = (w * cos + h * sin).ceil() as u32;
    let new_h = (w * sin + h * cos).ceil() as u32;

    (new_w.max(1), new_h.max(1))
}

/// Rotate an image around its center.
///
/// The output canvas is expanded to the rotated bounding box so no content
/// is clipped.
///
/// # Arguments
///
/// * `image` - Source image to rotate
/// * `angle_degrees` - Rotation angle in degrees (positive = clockwise)
/// * `filter` - Interpolation used for angles that are not quarter turns
///
/// # Errors
///
/// Returns [`TransformError::InvalidAngle`] if the angle is NaN or infinite.
pub fn apply_rotation(
    image: &EditImage,
    angle_degrees: f64,
    filter: InterpolationFilter,
) -> Result<EditImage, TransformError> {
    if !angle_degrees.is_finite() {
        return Err(TransformError::InvalidAngle(angle_degrees));
    }
    if image.is_empty() {
        return Ok(image.clone());
    }

    let src = image.to_rgba_image();

    let rotated = match quarter_turns(angle_degrees) {
        Some(0) => src,
        Some(1) => imageops::rotate90(&src),
        Some(2) => imageops::rotate180(&src),
        Some(_) => imageops::rotate270(&src),
        None => rotate_arbitrary(&src, angle_degrees, filter),
    };

    Ok(EditImage::from_rgba_image(rotated))
}

fn rotate_arbitrary(src: &RgbaImage, angle_degrees: f64, filter: InterpolationFilter) -> RgbaImage {
    let (src_w, src_h) = src.dimensions();
    let (dst_w, dst_h) = compute_rotated_bounds(src_w, src_h, angle_degrees);

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos();
    let sin = angle_rad.sin();

    let src_cx = f64::from(src_w) / 2.0;
    let src_cy = f64::from(src_h) / 2.0;
    let dst_cx = f64::from(dst_w) / 2.0;
    let dst_cy = f64::from(dst_h) / 2.0;

    RgbaImage::from_fn(dst_w, dst_h, |dst_x, dst_y| {
        // Sample at pixel centers
        let dx = f64::from(dst_x) + 0.5 - dst_cx;
        let dy = f64::from(dst_y) + 0.5 - dst_cy;

        let src_x = dx * cos + dy * sin + src_cx - 0.5;
        let src_y = -dx * sin + dy * cos + src_cy - 0.5;

        let pixel = match filter {
            InterpolationFilter::Bilinear => sample_bilinear(src, src_x, src_y),
            InterpolationFilter::Lanczos3 => sample_lanczos3(src, src_x, src_y),
        };
        image::Rgba(pixel)
    })
}

/// Get a pixel as [f64; 4] from an image at the given coordinates.
#[inline]
fn get_pixel_f64(image: &RgbaImage, px: u32, py: u32) -> [f64; 4] {
    image.get_pixel(px, py).0.map(f64::from)
}

/// Sample a pixel using bilinear interpolation.
///
/// Positions more than half a pixel outside the source are transparent.
fn sample_bilinear(image: &RgbaImage, x: f64, y: f64) -> [u8; 4] {
    let (w, h) = image.dimensions();
    let (max_x, max_y) = (f64::from(w) - 1.0, f64::from(h) - 1.0);

    if x < -0.5 || x > max_x + 0.5 || y < -0.5 || y > max_y + 0.5 {
        return [0, 0, 0, 0];
    }

    let x = x.clamp(0.0, max_x);
    let y = y.clamp(0.0, max_y);

    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);

    // Fractional distances
    let fx = x - f64::from(x0);
    let fy = y - f64::from(y0);

    let p00 = get_pixel_f64(image, x0, y0);
    let p10 = get_pixel_f64(image, x1, y0);
    let p01 = get_pixel_f64(image, x0, y1);
    let p11 = get_pixel_f64(image, x1, y1);

    let mut result = [0u8; 4];
    for i in 0..4 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}

/// Sample a pixel using Lanczos3 interpolation.
///
/// Falls back to bilinear near the edges where the 6x6 kernel would
/// leave the image.
fn sample_lanczos3(image: &RgbaImage, x: f64, y: f64) -> [u8; 4] {
    let (w, h) = image.dimensions();

    if x < 2.0 || x >= f64::from(w) - 3.0 || y < 2.0 || y >= f64::from(h) - 3.0 {
        return sample_bilinear(image, x, y);
    }

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;

    let mut sum = [0.0f64; 4];
    let mut weight_sum = 0.0;

    for ky in -2..=3 {
        for kx in -2..=3 {
            let px = x0 + kx;
            let py = y0 + ky;

            let weight = lanczos_weight(x - px as f64, 3.0) * lanczos_weight(y - py as f64, 3.0);
            let pixel = get_pixel_f64(image, px as u32, py as u32);
            for (acc, value) in sum.iter_mut().zip(pixel) {
                *acc += value * weight;
            }
            weight_sum += weight;
        }
    }

    let mut result = [0u8; 4];
    if weight_sum > 0.0 {
        for (out, acc) in result.iter_mut().zip(sum) {
            *out = (acc / weight_sum).clamp(0.0, 255.0).round() as u8;
        }
    }

    result
}

/// Lanczos kernel weight: `sinc(x) * sinc(x/a)` for `|x| < a`, else 0.
fn lanczos_weight(x: f64, a: f64) -> f64 {
    if x.abs() < f64::EPSILON {
        return 1.0;
    }
    if x.abs() >= a {
        return 0.0;
    }

    let pi_x = std::f64::consts::PI * x;
    let pi_x_a = pi_x / a;

    (a * pi_x.sin() * pi_x_a.sin()) / (pi_x * pi_x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PixelFormat;

    /// 2x1 image: red on the left, green on the right.
    fn red_green() -> EditImage {
        EditImage::new(
            2,
            1,
            PixelFormat::Rgba8,
            vec![255, 0, 0, 255, 0, 255, 0, 255],
        )
        .unwrap()
    }

    fn pixel(image: &EditImage, x: u32, y: u32) -> [u8; 4] {
        image.to_rgba_image().get_pixel(x, y).0
    }

    #[test]
    fn test_no_rotation() {
        let img = EditImage::filled(100, 50, [9, 9, 9, 255]);
        let result = apply_rotation(&img, 0.0, InterpolationFilter::Bilinear).unwrap();

        assert_eq!(result, img);
    }

    #[test]
    fn test_rotate_90_clockwise() {
        let result = apply_rotation(&red_green(), 90.0, InterpolationFilter::Bilinear).unwrap();

        // Left edge moves to the top
        assert_eq!((result.width(), result.height()), (1, 2));
        assert_eq!(pixel(&result, 0, 0), [255, 0, 0, 255]);
        assert_eq!(pixel(&result, 0, 1), [0, 255, 0, 255]);
    }

    #[test]
    fn test_rotate_minus_90() {
        let result = apply_rotation(&red_green(), -90.0, InterpolationFilter::Bilinear).unwrap();

        // Left edge moves to the bottom
        assert_eq!((result.width(), result.height()), (1, 2));
        assert_eq!(pixel(&result, 0, 0), [0, 255, 0, 255]);
        assert_eq!(pixel(&result, 0, 1), [255, 0, 0, 255]);
    }

    #[test]
    fn test_rotate_180_and_full_turn() {
        let half = apply_rotation(&red_green(), 180.0, InterpolationFilter::Bilinear).unwrap();
        assert_eq!(pixel(&half, 0, 0), [0, 255, 0, 255]);

        let full = apply_rotation(&red_green(), 360.0, InterpolationFilter::Bilinear).unwrap();
        assert_eq!(full, red_green());
    }

    #[test]
    fn test_non_finite_angle_rejected() {
        let img = EditImage::filled(10, 10, [9, 9, 9, 255]);

        for angle in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = apply_rotation(&img, angle, InterpolationFilter::Bilinear).unwrap_err();
            assert!(matches!(err, TransformError::InvalidAngle(_)));
        }
    }

    #[test]
    fn test_rotated_bounds() {
        assert_eq!(compute_rotated_bounds(100, 50, 90.0), (50, 100));
        assert_eq!(compute_rotated_bounds(100, 50, -270.0), (50, 100));
        assert_eq!(compute_rotated_bounds(100, 50, 180.0), (100, 50));
        assert_eq!(compute_rotated_bounds(100, 100, 45.0), (142, 142));
    }

    #[test]
    fn test_arbitrary_angle_expands_canvas() {
        let img = EditImage::filled(40, 20, [200, 100, 50, 255]);

        for filter in [InterpolationFilter::Bilinear, InterpolationFilter::Lanczos3] {
            let result = apply_rotation(&img, 30.0, filter).unwrap();
            let (w, h) = compute_rotated_bounds(40, 20, 30.0);

            assert_eq!((result.width(), result.height()), (w, h));
            // Center keeps the content, corners are empty canvas
            assert_eq!(pixel(&result, w / 2, h / 2), [200, 100, 50, 255]);
            assert_eq!(pixel(&result, 0, 0)[3], 0);
        }
    }

    #[test]
    fn test_lanczos_weight() {
        assert!((lanczos_weight(0.0, 3.0) - 1.0).abs() < f64::EPSILON);
        assert_eq!(lanczos_weight(3.0, 3.0), 0.0);
        assert!(lanczos_weight(1.0, 3.0).abs() < 1e-10);
    }
}
