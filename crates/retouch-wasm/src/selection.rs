//! WASM binding for drag-to-crop coordinate mapping.
//!
//! Lets a UI preview the crop a drag would produce, without a session.

use retouch_core::selection::compute_crop_box as core_compute_crop_box;
use retouch_core::{DragGesture, Point, Size};
use wasm_bindgen::prelude::*;

use crate::types::JsCropBox;

/// Map a drag on an aspect-fit preview to an image-pixel rectangle.
///
/// # Arguments
///
/// * `display_width`, `display_height` - Size of the preview surface
/// * `image_width`, `image_height` - Native image size
/// * `start_x` .. `end_y` - Drag endpoints in surface coordinates
///
/// # Returns
///
/// The crop rectangle, or `undefined` if the drag covers zero image pixels
/// in either direction.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rect = compute_crop_box(800, 600, 400, 300, 100, 100, 300, 200);
/// // rect.left == 50, rect.top == 50, rect.right == 150, rect.bottom == 100
/// ```
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn compute_crop_box(
    display_width: u32,
    display_height: u32,
    image_width: u32,
    image_height: u32,
    start_x: i32,
    start_y: i32,
    end_x: i32,
    end_y: i32,
) -> Option<JsCropBox> {
    let gesture = DragGesture::new(Point::new(start_x, start_y), Point::new(end_x, end_y));
    core_compute_crop_box(
        Size::new(display_width, display_height),
        Size::new(image_width, image_height),
        gesture,
    )
    .map(JsCropBox::from)
}
