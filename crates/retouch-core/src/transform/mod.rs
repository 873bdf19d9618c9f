//! Geometric transforms: crop, resize and rotate.
//!
//! Every function takes the source image by reference and returns a new
//! `EditImage`, so the source stays valid for the edit history.
//!
//! # Coordinate System
//!
//! - Crop rectangles are in image pixels, right/bottom exclusive
//! - Rotation angles are in degrees, positive = clockwise
//! - Origin is top-left corner

mod crop;
mod resize;
mod rotation;

use thiserror::Error;

use crate::CropBox;

pub use crop::apply_crop;
pub use resize::{resize, FilterType};
pub use rotation::{apply_rotation, compute_rotated_bounds, InterpolationFilter};

/// Errors raised by transforms when given unusable parameters.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Requested output size has a zero dimension.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Requested output size is larger than the configured limit.
    #[error("Invalid dimensions: {width}x{height} exceeds the maximum of {max} pixels per side")]
    DimensionsTooLarge { width: u32, height: u32, max: u32 },

    /// Crop rectangle is empty or leaves the image.
    #[error("Crop {rect:?} does not fit inside a {width}x{height} image")]
    CropOutOfBounds { rect: CropBox, width: u32, height: u32 },

    /// Rotation angle is NaN or infinite.
    #[error("Invalid rotation angle: {0}")]
    InvalidAngle(f64),
}
