//! Retouch Core - Image editing library
//!
//! This crate provides the core of the Retouch editor: a bounded undo/redo
//! history, drag-to-crop coordinate mapping, and an edit session that
//! drives the image operations (crop, resize, rotate, filters,
//! brightness/contrast) and file decoding/encoding.
//!
//! Rendering is left to the caller. The session only produces new images
//! and answers queries about them.

pub mod adjustments;
pub mod command;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod filter;
mod geometry;
pub mod history;
pub mod luminance;
pub mod processor;
pub mod selection;
pub mod session;
pub mod transform;

pub use command::{EditCommand, SessionStatus};
pub use config::{ConfigError, EditorConfig};
pub use decode::{DecodeError, EditImage, PixelFormat};
pub use encode::{EncodeError, ExportFormat};
pub use error::EditError;
pub use geometry::{CropBox, DisplayRect, Point, Size};
pub use history::EditHistory;
pub use processor::{ImageProcessor, StandardProcessor};
pub use selection::{compute_crop_box, DragGesture, DragTracker};
pub use session::EditSession;
pub use transform::{FilterType, InterpolationFilter, TransformError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_round_trip_through_public_api() {
        let mut session = EditSession::new();
        session.load_image(EditImage::filled(400, 300, [40, 80, 120, 255]));

        let rect = compute_crop_box(
            Size::new(800, 600),
            Size::new(400, 300),
            DragGesture::new(Point::new(300, 200), Point::new(100, 100)),
        )
        .unwrap();
        assert_eq!(rect, CropBox::new(50, 50, 150, 100));

        assert!(session.apply(EditCommand::Crop { rect }).unwrap());
        assert!(session.apply(EditCommand::Grayscale).unwrap());
        assert_eq!(
            session.status().to_string(),
            "Size: 100x50 | Undo: true | Redo: false"
        );
    }
}
