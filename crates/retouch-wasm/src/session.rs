//! WASM bindings for the edit session.
//!
//! `JsEditSession` owns a core `EditSession`. JavaScript forwards button
//! clicks and pointer events to it and pulls the current image and status
//! back out whenever it re-renders.

use retouch_core::{CropBox, EditCommand, EditSession, EditorConfig, ExportFormat, Point, Size};
use wasm_bindgen::prelude::*;

use crate::types::{JsCropBox, JsEditImage};

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// An editing session for JavaScript.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const session = new JsEditSession();
/// session.open_bytes(new Uint8Array(await file.arrayBuffer()));
/// session.rotate(90);
/// session.apply_command({ type: 'adjust', brightness: 20, contrast: 0 });
/// const image = session.current();
/// ```
#[wasm_bindgen]
pub struct JsEditSession {
    inner: EditSession,
}

impl Default for JsEditSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl JsEditSession {
    /// Create a session with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsEditSession {
        JsEditSession {
            inner: EditSession::new(),
        }
    }

    /// Create a session from a TOML configuration document.
    pub fn with_config(toml: &str) -> Result<JsEditSession, JsValue> {
        let config = EditorConfig::from_toml_str(toml).map_err(to_js_error)?;
        Ok(JsEditSession {
            inner: EditSession::with_config(config),
        })
    }

    /// Decode a PNG/JPEG/BMP/GIF file and make it the current image.
    pub fn open_bytes(&mut self, bytes: &[u8]) -> Result<bool, JsValue> {
        self.inner.open_bytes(bytes).map_err(to_js_error)
    }

    /// Load raw RGBA pixels (e.g. from a canvas) as the current image.
    pub fn load_pixels(&mut self, width: u32, height: u32, pixels: Vec<u8>) -> Result<(), JsValue> {
        let image = JsEditImage::new(width, height, pixels)
            .into_core()
            .ok_or_else(|| {
                JsValue::from_str(&format!("Pixel buffer does not match {width}x{height} RGBA"))
            })?;
        self.inner.load_image(image);
        Ok(())
    }

    /// The image to render, if one is loaded.
    pub fn current(&self) -> Option<JsEditImage> {
        self.inner.current().map(JsEditImage::from_core)
    }

    #[wasm_bindgen(getter)]
    pub fn can_undo(&self) -> bool {
        self.inner.can_undo()
    }

    #[wasm_bindgen(getter)]
    pub fn can_redo(&self) -> bool {
        self.inner.can_redo()
    }

    /// Returns true if the cursor moved.
    pub fn undo(&mut self) -> bool {
        self.inner.undo().is_some()
    }

    /// Returns true if the cursor moved.
    pub fn redo(&mut self) -> bool {
        self.inner.redo().is_some()
    }

    pub fn crop(&mut self, rect: &JsCropBox) -> Result<bool, JsValue> {
        self.inner.crop(CropBox::from(*rect)).map_err(to_js_error)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<bool, JsValue> {
        self.inner.resize(width, height).map_err(to_js_error)
    }

    /// Rotate by `degrees`, positive = clockwise.
    pub fn rotate(&mut self, degrees: f64) -> Result<bool, JsValue> {
        self.inner.rotate(degrees).map_err(to_js_error)
    }

    pub fn grayscale(&mut self) -> Result<bool, JsValue> {
        self.inner.grayscale().map_err(to_js_error)
    }

    pub fn blur(&mut self) -> Result<bool, JsValue> {
        self.inner.blur().map_err(to_js_error)
    }

    pub fn sharpen(&mut self) -> Result<bool, JsValue> {
        self.inner.sharpen().map_err(to_js_error)
    }

    /// Apply slider values (-50 to 50) for brightness and contrast.
    pub fn adjust(&mut self, brightness: i32, contrast: i32) -> Result<bool, JsValue> {
        self.inner.adjust(brightness, contrast).map_err(to_js_error)
    }

    /// Apply a command object such as `{ type: 'rotate', degrees: -90 }`.
    pub fn apply_command(&mut self, command: JsValue) -> Result<bool, JsValue> {
        let command: EditCommand = serde_wasm_bindgen::from_value(command)
            .map_err(|e| JsValue::from_str(&format!("Invalid command: {e}")))?;
        self.inner.apply(command).map_err(to_js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn crop_mode(&self) -> bool {
        self.inner.crop_mode()
    }

    /// Returns the new crop mode state.
    pub fn toggle_crop_mode(&mut self) -> bool {
        self.inner.toggle_crop_mode()
    }

    pub fn begin_drag(&mut self, x: i32, y: i32) -> bool {
        self.inner.begin_drag(Point::new(x, y))
    }

    pub fn drag_to(&mut self, x: i32, y: i32) -> bool {
        self.inner.drag_to(Point::new(x, y))
    }

    /// Release over a preview of `display_width` x `display_height`.
    pub fn finish_drag(
        &mut self,
        x: i32,
        y: i32,
        display_width: u32,
        display_height: u32,
    ) -> Result<bool, JsValue> {
        self.inner
            .finish_drag(Point::new(x, y), Size::new(display_width, display_height))
            .map_err(to_js_error)
    }

    pub fn cancel_drag(&mut self) {
        self.inner.cancel_drag();
    }

    /// Selection rectangle to draw, `{ x, y, width, height }` or `null`.
    pub fn drag_overlay(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.drag_overlay()).map_err(to_js_error)
    }

    /// `{ size, can_undo, can_redo, crop_mode }`
    pub fn status(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.status()).map_err(to_js_error)
    }

    /// Status-bar line, e.g. `Size: 640x480 | Undo: true | Redo: false`.
    pub fn status_text(&self) -> String {
        self.inner.status().to_string()
    }

    /// Encode the current image; `extension` picks the format (`png`,
    /// `jpg`, `bmp`). Returns `undefined` without an image.
    pub fn export(&self, extension: &str) -> Result<Option<Vec<u8>>, JsValue> {
        self.inner
            .export(ExportFormat::from_extension(extension))
            .map_err(to_js_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retouch_core::EditImage;

    fn loaded(width: u32, height: u32) -> JsEditSession {
        let mut session = JsEditSession::new();
        session
            .inner
            .load_image(EditImage::filled(width, height, [90, 90, 90, 255]));
        session
    }

    #[test]
    fn test_empty_session() {
        let mut session = JsEditSession::new();

        assert!(session.current().is_none());
        assert!(!session.undo());
        assert!(!session.grayscale().unwrap());
        assert!(session.export("png").unwrap().is_none());
        assert_eq!(session.status_text(), "Size: - | Undo: false | Redo: false");
    }

    #[test]
    fn test_load_pixels_and_edit() {
        let mut session = JsEditSession::new();
        session.load_pixels(2, 2, vec![200; 16]).unwrap();

        assert!(session.rotate(90.0).unwrap());
        assert!(session.adjust(-50, 0).unwrap());
        let image = session.current().unwrap();
        assert_eq!(&image.pixels()[..4], &[0, 0, 0, 200]);
        assert!(session.can_undo());
    }

    #[test]
    fn test_undo_redo() {
        let mut session = loaded(4, 2);
        session.resize(8, 4).unwrap();

        assert!(session.undo());
        assert_eq!(session.current().unwrap().width(), 4);
        assert!(session.redo());
        assert_eq!(session.current().unwrap().width(), 8);
        assert!(!session.redo());
    }

    #[test]
    fn test_crop_with_box() {
        let mut session = loaded(10, 10);
        let rect = JsCropBox::from(CropBox::new(2, 3, 6, 9));

        assert!(session.crop(&rect).unwrap());
        let image = session.current().unwrap();
        assert_eq!((image.width(), image.height()), (4, 6));
    }

    #[test]
    fn test_drag_to_crop() {
        let mut session = loaded(400, 300);
        assert!(session.toggle_crop_mode());

        assert!(session.begin_drag(300, 200));
        assert!(session.drag_to(200, 150));
        assert!(session.finish_drag(100, 100, 800, 600).unwrap());

        assert!(!session.crop_mode());
        assert_eq!(session.status_text(), "Size: 100x50 | Undo: true | Redo: false");
    }

    #[test]
    fn test_export_formats() {
        let session = loaded(3, 3);

        let png = session.export("png").unwrap().unwrap();
        assert_eq!(&png[1..4], b"PNG");
        let jpeg = session.export("JPEG").unwrap().unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    }
}

/// Tests that build or read `JsValue`s; run with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use retouch_core::{EditImage, SessionStatus};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_apply_command_object() {
        let mut session = JsEditSession::new();
        session
            .inner
            .load_image(EditImage::filled(8, 4, [1, 2, 3, 255]));

        let command = serde_wasm_bindgen::to_value(&EditCommand::Rotate { degrees: 90.0 }).unwrap();
        assert!(session.apply_command(command).unwrap());
        assert_eq!(session.current().unwrap().width(), 4);
    }

    #[wasm_bindgen_test]
    fn test_invalid_command_rejected() {
        let mut session = JsEditSession::new();
        let command = serde_wasm_bindgen::to_value(&"flip").unwrap();

        assert!(session.apply_command(command).is_err());
    }

    #[wasm_bindgen_test]
    fn test_status_object() {
        let mut session = JsEditSession::new();
        session
            .inner
            .load_image(EditImage::filled(8, 4, [1, 2, 3, 255]));

        let status: SessionStatus = serde_wasm_bindgen::from_value(session.status().unwrap()).unwrap();
        assert_eq!(status.size, Some(Size::new(8, 4)));
        assert!(!status.can_undo);
    }

    #[wasm_bindgen_test]
    fn test_non_finite_rotation_rejected() {
        let mut session = JsEditSession::new();
        session
            .inner
            .load_image(EditImage::filled(10, 10, [1, 2, 3, 255]));

        assert!(session.rotate(f64::NAN).is_err());
        assert!(!session.can_undo());
        assert_eq!(session.current().unwrap().width(), 10);
    }

    #[wasm_bindgen_test]
    fn test_bad_config_and_pixels_rejected() {
        assert!(JsEditSession::with_config("history_capacity = 0").is_err());

        let mut session = JsEditSession::new();
        assert!(session.load_pixels(2, 2, vec![0; 3]).is_err());
    }
}
