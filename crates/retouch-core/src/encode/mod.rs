//! Image encoding for export.
//!
//! This module provides functionality for:
//! - Choosing an export format from a file extension
//! - Encoding images to PNG, BMP or JPEG (flattened, configurable quality)
//!
//! # Examples
//!
//! ```ignore
//! use retouch_core::encode::{encode_image, ExportFormat};
//!
//! let format = ExportFormat::from_path("edited.jpg");
//! let bytes = encode_image(&image, format, 90).unwrap();
//! println!("Encoded {} bytes", bytes.len());
//! ```

mod writer;

pub use writer::{encode_image, EncodeError, ExportFormat};
