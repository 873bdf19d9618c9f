//! Image decoding for the editor.
//!
//! Every decoded image is normalized to RGBA8 so that transforms and the
//! edit history only ever deal with a single layout. EXIF orientation
//! correction is available but off by default.
//!
//! # Examples
//!
//! ```ignore
//! use retouch_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes, false).unwrap();
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```

mod reader;
mod types;

pub use reader::{decode_image, get_orientation};
pub use types::{DecodeError, EditImage, Orientation, PixelFormat};
