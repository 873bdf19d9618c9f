//! Pixel-rectangle cropping.
//!
//! # Example
//!
//! ```ignore
//! // Keep the 100x50 region starting at (50, 50)
//! let cropped = apply_crop(&image, CropBox::new(50, 50, 150, 100))?;
//! ```

use super::TransformError;
use crate::{CropBox, EditImage};

/// Crop an image to a pixel rectangle.
///
/// # Arguments
///
/// * `image` - Source image to crop
/// * `rect` - Region to keep, `right`/`bottom` exclusive
///
/// # Returns
///
/// A new `EditImage` of `rect.width() x rect.height()` in the source format.
///
/// # Errors
///
/// Returns `TransformError::CropOutOfBounds` if the rectangle is empty or
/// extends past the image edges.
pub fn apply_crop(image: &EditImage, rect: CropBox) -> Result<EditImage, TransformError> {
    if rect.is_empty() || !rect.fits_within(image.size()) {
        return Err(TransformError::CropOutOfBounds {
            rect,
            width: image.width(),
            height: image.height(),
        });
    }

    // Fast path: full crop returns a clone
    if rect == CropBox::new(0, 0, image.width(), image.height()) {
        return Ok(image.clone());
    }

    let bpp = image.format().bytes_per_pixel();
    let src_stride = image.width() as usize * bpp;
    let row_len = rect.width() as usize * bpp;
    let mut output = Vec::with_capacity(row_len * rect.height() as usize);

    // Copy pixel data row by row
    for y in rect.top..rect.bottom {
        let start = y as usize * src_stride + rect.left as usize * bpp;
        output.extend_from_slice(&image.pixels()[start..start + row_len]);
    }

    EditImage::new(rect.width(), rect.height(), image.format(), output).ok_or(
        TransformError::InvalidDimensions {
            width: rect.width(),
            height: rect.height(),
        },
    )
}


// ============================================================================
// Property-Based Tests
// ============================================================================
