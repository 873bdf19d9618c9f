//! Display-to-image coordinate mapping for drag-to-crop.
//!
//! The preview shows the image scaled to fit the display surface with its
//! aspect ratio preserved and centered, leaving letterbox or pillarbox bars.
//! A drag is expressed in surface pixels, so each endpoint is shifted by the
//! bar offset, pinned to the drawn bitmap and divided by the scale factor.
//!
//! # Example
//!
//! ```ignore
//! // 400x300 image shown at 2x on an 800x600 surface
//! let rect = compute_crop_box(
//!     Size::new(800, 600),
//!     Size::new(400, 300),
//!     DragGesture::new(Point::new(100, 100), Point::new(300, 200)),
//! );
//! assert_eq!(rect, Some(CropBox::new(50, 50, 150, 100)));
//! ```

use super::DragGesture;
use crate::{CropBox, Point, Size};

/// How a fitted image sits on the display surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitLayout {
    /// Uniform scale from image pixels to surface pixels.
    pub scale: f64,
    /// Size of the drawn bitmap on the surface.
    pub drawn: Size,
    /// Horizontal bar width (left side).
    pub x_offset: i64,
    /// Vertical bar height (top side).
    pub y_offset: i64,
}

impl FitLayout {
    /// Compute the aspect-preserving fit of `image` inside `display`.
    ///
    /// The drawn size is rounded to the nearest pixel, halves away from
    /// zero. Returns `None` if either size has a zero dimension.
    pub fn compute(display: Size, image: Size) -> Option<Self> {
        if display.is_empty() || image.is_empty() {
            return None;
        }

        let (dw, dh) = (f64::from(display.width), f64::from(display.height));
        let (iw, ih) = (f64::from(image.width), f64::from(image.height));

        let scale = (dw / iw).min(dh / ih);
        let drawn = Size::new((iw * scale).round() as u32, (ih * scale).round() as u32);

        let x_offset = (i64::from(display.width) - i64::from(drawn.width)).div_euclid(2);
        let y_offset = (i64::from(display.height) - i64::from(drawn.height)).div_euclid(2);

        Some(Self {
            scale,
            drawn,
            x_offset,
            y_offset,
        })
    }

    /// Map a surface point to image pixel coordinates.
    ///
    /// Points outside the drawn bitmap are pinned to its nearest edge.
    pub fn to_image(&self, point: Point) -> (u32, u32) {
        let x = (i64::from(point.x) - self.x_offset).clamp(0, i64::from(self.drawn.width));
        let y = (i64::from(point.y) - self.y_offset).clamp(0, i64::from(self.drawn.height));

        // Non-negative after clamping, so the cast truncates toward zero.
        ((x as f64 / self.scale) as u32, (y as f64 / self.scale) as u32)
    }
}

/// Translate a drag on the display surface into an image crop rectangle.
///
/// # Arguments
///
/// * `display` - Size of the surface the preview is drawn on
/// * `image` - Native size of the image being previewed
/// * `gesture` - Press and release points in surface coordinates
///
/// # Returns
///
/// The normalized rectangle `(min_x, min_y, max_x, max_y)` in image pixels,
/// independent of which corner the drag started from. `None` when the
/// gesture collapses to a zero-width or zero-height rectangle, or when
/// either size is empty.
pub fn compute_crop_box(display: Size, image: Size, gesture: DragGesture) -> Option<CropBox> {
    let layout = FitLayout::compute(display, image)?;

    let (x1, y1) = layout.to_image(gesture.start);
    let (x2, y2) = layout.to_image(gesture.end);

    // Rounding the drawn size up can land one pixel past the far edge.
    let (x1, x2) = (x1.min(image.width), x2.min(image.width));
    let (y1, y2) = (y1.min(image.height), y2.min(image.height));

    if x1 == x2 || y1 == y2 {
        return None;
    }

    Some(CropBox::new(x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2)))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn size_strategy() -> impl Strategy<Value = Size> {
        (1u32..=4000, 1u32..=4000).prop_map(|(w, h)| Size::new(w, h))
    }

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-500i32..=5000, -500i32..=5000).prop_map(|(x, y)| Point::new(x, y))
    }

    proptest! {
        /// Property: A returned rectangle is non-empty and inside the image.
        #[test]
        fn prop_rect_within_image(
            display in size_strategy(),
            image in size_strategy(),
            start in point_strategy(),
            end in point_strategy(),
        ) {
            if let Some(rect) = compute_crop_box(display, image, DragGesture::new(start, end)) {
                prop_assert!(rect.left < rect.right);
                prop_assert!(rect.top < rect.bottom);
                prop_assert!(rect.fits_within(image), "{:?} outside {:?}", rect, image);
            }
        }

        /// Property: Swapping the endpoints yields the same rectangle.
        #[test]
        fn prop_order_independent(
            display in size_strategy(),
            image in size_strategy(),
            start in point_strategy(),
            end in point_strategy(),
        ) {
            let forward = compute_crop_box(display, image, DragGesture::new(start, end));
            let backward = compute_crop_box(display, image, DragGesture::new(end, start));
            prop_assert_eq!(forward, backward);
        }

        /// Property: The drawn bitmap always fits on the surface.
        #[test]
        fn prop_fit_never_overflows(display in size_strategy(), image in size_strategy()) {
            let layout = FitLayout::compute(display, image).unwrap();

            prop_assert!(layout.drawn.width <= display.width);
            prop_assert!(layout.drawn.height <= display.height);
            prop_assert!(layout.x_offset >= 0);
            prop_assert!(layout.y_offset >= 0);
        }
    }
}
