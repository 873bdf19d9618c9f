//! Image resizing using the `image` crate's resampling filters.

use image::imageops;
use serde::{Deserialize, Serialize};

use super::TransformError;
use crate::EditImage;

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    #[default]
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> imageops::FilterType {
        match self {
            FilterType::Nearest => imageops::FilterType::Nearest,
            FilterType::Bilinear => imageops::FilterType::Triangle,
            FilterType::Lanczos3 => imageops::FilterType::Lanczos3,
        }
    }
}

/// Resize an image to exact dimensions, ignoring aspect ratio.
///
/// # Errors
///
/// Returns `TransformError::InvalidDimensions` if either target dimension is zero.
pub fn resize(
    image: &EditImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<EditImage, TransformError> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidDimensions { width, height });
    }

    // Fast path: if dimensions match, just clone
    if image.width() == width && image.height() == height {
        return Ok(image.clone());
    }

    let resized = imageops::resize(
        &image.to_rgba_image(),
        width,
        height,
        filter.to_image_filter(),
    );

    Ok(EditImage::from_rgba_image(resized))
}
