//! WASM-compatible wrapper types for image data.
//!
//! These types wrap the core Retouch types and handle the conversion
//! between Rust and JavaScript data representations.

use retouch_core::{CropBox, EditImage, PixelFormat};
use wasm_bindgen::prelude::*;

/// An RGBA image for JavaScript.
///
/// Pixels are always RGBA8, row-major, ready for `ImageData`.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. `pixels()` copies it to
/// JavaScript as a `Uint8Array`.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsEditImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsEditImage {
    /// Create an image from dimensions and RGBA pixel data.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsEditImage {
        JsEditImage {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsEditImage {
    pub(crate) fn from_core(image: &EditImage) -> Self {
        let rgba = image.to_rgba_image();
        Self {
            width: rgba.width(),
            height: rgba.height(),
            pixels: rgba.into_raw(),
        }
    }

    /// Convert to a core image. `None` if the buffer does not match the
    /// dimensions.
    pub(crate) fn into_core(self) -> Option<EditImage> {
        EditImage::new(self.width, self.height, PixelFormat::Rgba8, self.pixels)
    }
}

/// An image-pixel rectangle, right/bottom exclusive.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsCropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

#[wasm_bindgen]
impl JsCropBox {
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        CropBox::from(*self).width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        CropBox::from(*self).height()
    }
}

impl From<CropBox> for JsCropBox {
    fn from(rect: CropBox) -> Self {
        Self {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        }
    }
}

impl From<JsCropBox> for CropBox {
    fn from(rect: JsCropBox) -> Self {
        CropBox::new(rect.left, rect.top, rect.right, rect.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_core_expands_rgb() {
        let rgb = EditImage::filled(2, 1, [10, 20, 30, 0]).flatten();
        let js = JsEditImage::from_core(&rgb);

        assert_eq!((js.width(), js.height()), (2, 1));
        assert_eq!(js.byte_length(), 8);
        assert_eq!(&js.pixels()[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_into_core_checks_buffer() {
        let good = JsEditImage::new(2, 2, vec![0; 16]);
        assert!(good.into_core().is_some());

        let short = JsEditImage::new(2, 2, vec![0; 15]);
        assert!(short.into_core().is_none());
    }

    #[test]
    fn test_crop_box_conversion() {
        let js = JsCropBox::from(CropBox::new(50, 50, 150, 100));
        assert_eq!((js.width(), js.height()), (100, 50));
        assert_eq!(CropBox::from(js), CropBox::new(50, 50, 150, 100));
    }
}
