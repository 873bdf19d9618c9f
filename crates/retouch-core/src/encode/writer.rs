//! Encoders for the supported export formats.
//!
//! PNG and BMP store the image as-is (alpha included). JPEG has no
//! transparency, so RGBA images are flattened to RGB before encoding.

use std::io::Cursor;
use std::path::Path;

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{EditImage, PixelFormat};

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying encoder failed
    #[error("{format:?} encoding failed: {reason}")]
    EncodingFailed { format: ExportFormat, reason: String },

    /// Writing the encoded bytes failed
    #[error("I/O error: {0}")]
    IoError(String),
}

/// File format used when saving an edited image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
    Bmp,
}

impl ExportFormat {
    /// Pick a format from a file extension (case-insensitive).
    ///
    /// Unknown or missing extensions fall back to PNG.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => ExportFormat::Jpeg,
            "bmp" => ExportFormat::Bmp,
            _ => ExportFormat::Png,
        }
    }

    /// Pick a format from the extension of `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or_default()
    }

    /// Returns true if the format cannot store an alpha channel.
    pub fn requires_opaque(self) -> bool {
        matches!(self, ExportFormat::Jpeg)
    }
}

/// Encode an image to bytes in the given format.
///
/// # Arguments
///
/// * `image` - Image to encode
/// * `format` - Target format
/// * `quality` - JPEG quality (1-100), ignored by the lossless formats
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for empty images and
/// `EncodeError::EncodingFailed` if the codec rejects the data.
pub fn encode_image(
    image: &EditImage,
    format: ExportFormat,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if image.is_empty() {
        return Err(EncodeError::InvalidDimensions {
            width: image.width(),
            height: image.height(),
        });
    }

    let flattened;
    let image = if format.requires_opaque() && image.format().has_alpha() {
        flattened = image.flatten();
        &flattened
    } else {
        image
    };

    let color = match image.format() {
        PixelFormat::Rgb8 => ExtendedColorType::Rgb8,
        PixelFormat::Rgba8 => ExtendedColorType::Rgba8,
    };
    let (width, height) = (image.width(), image.height());

    let mut buffer = Cursor::new(Vec::new());
    let result = match format {
        ExportFormat::Png => {
            PngEncoder::new(&mut buffer).write_image(image.pixels(), width, height, color)
        }
        ExportFormat::Bmp => {
            BmpEncoder::new(&mut buffer).write_image(image.pixels(), width, height, color)
        }
        ExportFormat::Jpeg => JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
            .write_image(image.pixels(), width, height, color),
    };

    result.map_err(|e| EncodeError::EncodingFailed {
        format,
        reason: e.to_string(),
    })?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ExportFormat::from_extension("png"), ExportFormat::Png);
        assert_eq!(ExportFormat::from_extension("JPG"), ExportFormat::Jpeg);
        assert_eq!(ExportFormat::from_extension("jpeg"), ExportFormat::Jpeg);
        assert_eq!(ExportFormat::from_extension("bmp"), ExportFormat::Bmp);
        assert_eq!(ExportFormat::from_extension("webp"), ExportFormat::Png);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path("out/edited.Jpeg"), ExportFormat::Jpeg);
        assert_eq!(ExportFormat::from_path("edited"), ExportFormat::Png);
    }

    #[test]
    fn test_encode_jpeg_basic() {
        let image = EditImage::filled(100, 100, [128, 128, 128, 255]);
        let jpeg_bytes = encode_image(&image, ExportFormat::Jpeg, 90).unwrap();

        // SOI and EOI markers
        assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8]);
        let len = jpeg_bytes.len();
        assert_eq!(&jpeg_bytes[len - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_flattens_transparent_image() {
        let image = EditImage::filled(10, 10, [255, 0, 0, 0]);
        assert!(encode_image(&image, ExportFormat::Jpeg, 75).is_ok());
    }

    #[test]
    fn test_encode_jpeg_quality_clamping() {
        let image = EditImage::filled(10, 10, [128, 128, 128, 255]);

        assert!(encode_image(&image, ExportFormat::Jpeg, 0).is_ok());
        assert!(encode_image(&image, ExportFormat::Jpeg, 255).is_ok());
    }

    #[test]
    fn test_encode_png_signature() {
        let image = EditImage::filled(4, 4, [1, 2, 3, 4]);
        let png = encode_image(&image, ExportFormat::Png, 90).unwrap();

        assert_eq!(&png[0..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_bmp_signature() {
        let image = EditImage::filled(4, 4, [1, 2, 3, 255]);
        let bmp = encode_image(&image, ExportFormat::Bmp, 90).unwrap();

        assert_eq!(&bmp[0..2], b"BM");
    }

    #[test]
    fn test_encode_zero_dimensions() {
        let image = EditImage::new(0, 10, PixelFormat::Rgba8, vec![]).unwrap();

        let result = encode_image(&image, ExportFormat::Png, 90);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
