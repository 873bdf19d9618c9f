//! The image-processing capability the edit session delegates to.
//!
//! [`ImageProcessor`] is the seam between the session and pixel work. The
//! session never touches pixels itself; it hands the current snapshot to a
//! processor and records whatever comes back. [`StandardProcessor`] is the
//! implementation backed by the `image` crate and the modules of this crate.

use std::path::Path;

use crate::adjustments;
use crate::config::EditorConfig;
use crate::decode::{decode_image, DecodeError};
use crate::encode::{encode_image, EncodeError, ExportFormat};
use crate::error::Result;
use crate::filter;
use crate::transform::{self, FilterType, InterpolationFilter, TransformError};
use crate::{CropBox, EditImage};

/// Operations the edit session needs from an image backend.
///
/// Every method takes the source by reference and returns a new image, so
/// a failed call leaves the caller's snapshot untouched.
pub trait ImageProcessor {
    /// Cut `rect` out of `image`.
    fn crop(&self, image: &EditImage, rect: CropBox) -> Result<EditImage>;

    /// Resample to exactly `width` x `height`.
    fn resize(&self, image: &EditImage, width: u32, height: u32) -> Result<EditImage>;

    /// Rotate by `degrees`, positive = clockwise, expanding the canvas to
    /// the rotated bounding box.
    fn rotate(&self, image: &EditImage, degrees: f64) -> Result<EditImage>;

    fn to_grayscale(&self, image: &EditImage) -> Result<EditImage>;

    fn gaussian_blur(&self, image: &EditImage, radius: f32) -> Result<EditImage>;

    fn sharpen(&self, image: &EditImage) -> Result<EditImage>;

    /// Scale brightness, 1.0 = unchanged.
    fn adjust_brightness(&self, image: &EditImage, factor: f32) -> Result<EditImage>;

    /// Scale contrast, 1.0 = unchanged.
    fn adjust_contrast(&self, image: &EditImage, factor: f32) -> Result<EditImage>;

    /// Decode an encoded file held in memory.
    fn decode(&self, bytes: &[u8]) -> Result<EditImage>;

    /// Encode to `format`, flattening first if the format has no alpha.
    fn encode(&self, image: &EditImage, format: ExportFormat) -> Result<Vec<u8>>;

    /// Read and decode the file at `path`.
    fn load(&self, path: &Path) -> Result<EditImage> {
        let bytes = std::fs::read(path)
            .map_err(|e| DecodeError::IoError(format!("{}: {e}", path.display())))?;
        self.decode(&bytes)
    }

    /// Encode `image` in the format named by the extension of `path` and
    /// write it there. Returns the format used.
    fn save(&self, image: &EditImage, path: &Path) -> Result<ExportFormat> {
        let format = ExportFormat::from_path(path);
        let bytes = self.encode(image, format)?;
        std::fs::write(path, bytes)
            .map_err(|e| EncodeError::IoError(format!("{}: {e}", path.display())))?;
        Ok(format)
    }
}

/// [`ImageProcessor`] built on the `image` crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardProcessor {
    pub resize_filter: FilterType,
    /// Resize requests above this on either side are rejected.
    pub max_dimension: u32,
    pub rotation_filter: InterpolationFilter,
    pub jpeg_quality: u8,
    pub apply_exif_orientation: bool,
}

impl Default for StandardProcessor {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl StandardProcessor {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            resize_filter: config.resize_filter,
            max_dimension: config.max_dimension,
            rotation_filter: config.rotation_filter,
            jpeg_quality: config.jpeg_quality,
            apply_exif_orientation: config.apply_exif_orientation,
        }
    }
}

impl ImageProcessor for StandardProcessor {
    fn crop(&self, image: &EditImage, rect: CropBox) -> Result<EditImage> {
        Ok(transform::apply_crop(image, rect)?)
    }

    fn resize(&self, image: &EditImage, width: u32, height: u32) -> Result<EditImage> {
        if width > self.max_dimension || height > self.max_dimension {
            return Err(TransformError::DimensionsTooLarge {
                width,
                height,
                max: self.max_dimension,
            }
            .into());
        }
        Ok(transform::resize(image, width, height, self.resize_filter)?)
    }

    fn rotate(&self, image: &EditImage, degrees: f64) -> Result<EditImage> {
        Ok(transform::apply_rotation(
            image,
            degrees,
            self.rotation_filter,
        )?)
    }

    fn to_grayscale(&self, image: &EditImage) -> Result<EditImage> {
        Ok(filter::to_grayscale(image))
    }

    fn gaussian_blur(&self, image: &EditImage, radius: f32) -> Result<EditImage> {
        Ok(filter::gaussian_blur(image, radius))
    }

    fn sharpen(&self, image: &EditImage) -> Result<EditImage> {
        Ok(filter::sharpen(image))
    }

    fn adjust_brightness(&self, image: &EditImage, factor: f32) -> Result<EditImage> {
        Ok(adjustments::adjust_brightness(image, factor))
    }

    fn adjust_contrast(&self, image: &EditImage, factor: f32) -> Result<EditImage> {
        Ok(adjustments::adjust_contrast(image, factor))
    }

    fn decode(&self, bytes: &[u8]) -> Result<EditImage> {
        Ok(decode_image(bytes, self.apply_exif_orientation)?)
    }

    fn encode(&self, image: &EditImage, format: ExportFormat) -> Result<Vec<u8>> {
        Ok(encode_image(image, format, self.jpeg_quality)?)
    }
}
