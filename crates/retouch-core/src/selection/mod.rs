//! Drag-to-crop selection.
//!
//! - [`DragTracker`] turns press/move/release pointer events into a
//!   [`DragGesture`], one gesture at a time.
//! - [`compute_crop_box`] maps a finished gesture from display-surface
//!   coordinates to an image pixel rectangle.
//!
//! Neither depends on the edit history; the session glues them together.

mod drag;
mod mapper;

pub use drag::{DragGesture, DragTracker};
pub use mapper::{compute_crop_box, FitLayout};
