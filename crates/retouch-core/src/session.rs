//! The editing session: current image, undo history and crop gestures.
//!
//! # Overview
//!
//! An [`EditSession`] owns an [`EditHistory`] of image snapshots and an
//! [`ImageProcessor`]. The current image is always the history entry under
//! the cursor, so there is no second copy to keep in sync.
//!
//! Each edit follows the same steps:
//! 1. Without a loaded image it does nothing and returns `Ok(false)`
//! 2. The processor produces a new image from the current one
//! 3. On success the result is pushed and `Ok(true)` is returned
//! 4. On failure the error is returned and the history is left alone
//!
//! Undo and redo only move the cursor; they never push.
//!
//! # Crop Gestures
//!
//! Cropping by pointer works only in crop mode. Press, move and release
//! events go through a [`DragTracker`]; on release the gesture is mapped to
//! image pixels with [`compute_crop_box`] and applied as a regular crop.
//! Releasing always leaves crop mode, even if the gesture was degenerate.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::adjustments::control_to_factor;
use crate::command::{EditCommand, SessionStatus};
use crate::config::EditorConfig;
use crate::encode::ExportFormat;
use crate::error::Result;
use crate::history::EditHistory;
use crate::processor::{ImageProcessor, StandardProcessor};
use crate::selection::{compute_crop_box, DragTracker};
use crate::{CropBox, DisplayRect, EditImage, Point, Size};

/// An interactive editing session over a single image at a time.
#[derive(Debug)]
pub struct EditSession<P = StandardProcessor> {
    processor: P,
    config: EditorConfig,
    history: EditHistory<EditImage>,
    drag: DragTracker,
    crop_mode: bool,
    source_path: Option<PathBuf>,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    /// Create a session with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Create a session backed by a [`StandardProcessor`] built from `config`.
    pub fn with_config(config: EditorConfig) -> Self {
        Self::with_processor(StandardProcessor::from_config(&config), config)
    }
}

impl<P: ImageProcessor> EditSession<P> {
    /// Create a session that delegates pixel work to `processor`.
    pub fn with_processor(processor: P, config: EditorConfig) -> Self {
        Self {
            processor,
            history: EditHistory::with_capacity(config.history_capacity),
            config,
            drag: DragTracker::new(),
            crop_mode: false,
            source_path: None,
        }
    }

    pub fn history(&self) -> &EditHistory<EditImage> {
        &self.history
    }

    /// The image to display, if one is loaded.
    pub fn current(&self) -> Option<&EditImage> {
        self.history.current()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Path of the most recently opened file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Snapshot of the state a presentation layer shows.
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            size: self.current().map(EditImage::size),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            crop_mode: self.crop_mode,
        }
    }

    // ------------------------------------------------------------------
    // Loading and saving
    // ------------------------------------------------------------------

    /// Load the file at `path` and push it as the next history entry.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        let image = self.processor.load(path)?;
        info!(
            "opened {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        self.source_path = Some(path.to_path_buf());
        self.load_image(image);
        Ok(true)
    }

    /// Decode an in-memory file and push it as the next history entry.
    pub fn open_bytes(&mut self, bytes: &[u8]) -> Result<bool> {
        let image = self.processor.decode(bytes)?;
        info!("opened {} byte image ({}x{})", bytes.len(), image.width(), image.height());
        self.load_image(image);
        Ok(true)
    }

    /// Push an already decoded image as the next history entry.
    ///
    /// Loading never clears the history; the previous image stays reachable
    /// through undo. Crop mode is left and any gesture in progress is
    /// dropped.
    pub fn load_image(&mut self, image: EditImage) {
        self.drag.cancel();
        self.crop_mode = false;
        self.history.push(image);
    }

    /// Write the current image to `path`, format chosen by extension.
    ///
    /// Returns `Ok(false)` without a loaded image.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<bool> {
        let Some(image) = self.current() else {
            debug!("save ignored: no image loaded");
            return Ok(false);
        };
        let path = path.as_ref();
        let format = self.processor.save(image, path)?;
        info!("saved {} as {format:?}", path.display());
        Ok(true)
    }

    /// Encode the current image in memory.
    ///
    /// Returns `Ok(None)` without a loaded image.
    pub fn export(&self, format: ExportFormat) -> Result<Option<Vec<u8>>> {
        match self.current() {
            Some(image) => self.processor.encode(image, format).map(Some),
            None => Ok(None),
        }
    }

    // ------------------------------------------------------------------
    // Edits
    // ------------------------------------------------------------------

    /// Run `op` on the current image and push the result.
    fn edit<F>(&mut self, name: &str, op: F) -> Result<bool>
    where
        F: FnOnce(&P, &EditImage) -> Result<EditImage>,
    {
        let Some(current) = self.history.current() else {
            debug!("{name} ignored: no image loaded");
            return Ok(false);
        };
        let edited = op(&self.processor, current)?;
        info!("applied {name} ({}x{})", edited.width(), edited.height());
        self.history.push(edited);
        Ok(true)
    }

    pub fn crop(&mut self, rect: CropBox) -> Result<bool> {
        self.edit("crop", |p, img| p.crop(img, rect))
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<bool> {
        self.edit("resize", |p, img| p.resize(img, width, height))
    }

    /// Rotate by `degrees`, positive = clockwise.
    pub fn rotate(&mut self, degrees: f64) -> Result<bool> {
        self.edit("rotate", |p, img| p.rotate(img, degrees))
    }

    pub fn grayscale(&mut self) -> Result<bool> {
        self.edit("grayscale", |p, img| p.to_grayscale(img))
    }

    /// Gaussian blur with the configured radius.
    pub fn blur(&mut self) -> Result<bool> {
        self.blur_with_radius(self.config.blur_radius)
    }

    pub fn blur_with_radius(&mut self, radius: f32) -> Result<bool> {
        self.edit("blur", |p, img| p.gaussian_blur(img, radius))
    }

    pub fn sharpen(&mut self) -> Result<bool> {
        self.edit("sharpen", |p, img| p.sharpen(img))
    }

    /// Apply brightness then contrast from control values (-50 to 50).
    ///
    /// A zero control skips its step. One entry is pushed even when both
    /// controls are zero.
    pub fn adjust(&mut self, brightness: i32, contrast: i32) -> Result<bool> {
        self.edit("brightness/contrast", |p, img| {
            let brightened;
            let mut image = img;
            if brightness != 0 {
                brightened = p.adjust_brightness(image, control_to_factor(brightness))?;
                image = &brightened;
            }
            if contrast != 0 {
                return p.adjust_contrast(image, control_to_factor(contrast));
            }
            Ok(image.clone())
        })
    }

    /// Step back one entry. Returns the new current image, or `None` at the
    /// oldest entry.
    pub fn undo(&mut self) -> Option<&EditImage> {
        self.history.undo()
    }

    /// Step forward one entry. Returns the new current image, or `None` at
    /// the newest entry.
    pub fn redo(&mut self) -> Option<&EditImage> {
        self.history.redo()
    }

    /// Dispatch a command to the matching edit.
    ///
    /// Undo and redo report whether the cursor moved.
    pub fn apply(&mut self, command: EditCommand) -> Result<bool> {
        match command {
            EditCommand::Crop { rect } => self.crop(rect),
            EditCommand::Resize { width, height } => self.resize(width, height),
            EditCommand::Rotate { degrees } => self.rotate(degrees),
            EditCommand::Grayscale => self.grayscale(),
            EditCommand::Blur { radius: None } => self.blur(),
            EditCommand::Blur {
                radius: Some(radius),
            } => self.blur_with_radius(radius),
            EditCommand::Sharpen => self.sharpen(),
            EditCommand::Adjust {
                brightness,
                contrast,
            } => self.adjust(brightness, contrast),
            EditCommand::Undo => Ok(self.undo().is_some()),
            EditCommand::Redo => Ok(self.redo().is_some()),
        }
    }

    // ------------------------------------------------------------------
    // Crop mode
    // ------------------------------------------------------------------

    pub fn crop_mode(&self) -> bool {
        self.crop_mode
    }

    /// Flip crop mode and return the new state.
    ///
    /// Ignored while no image is loaded. Leaving crop mode abandons any
    /// gesture in progress.
    pub fn toggle_crop_mode(&mut self) -> bool {
        if self.current().is_none() {
            return false;
        }
        self.crop_mode = !self.crop_mode;
        if !self.crop_mode {
            self.drag.cancel();
        }
        debug!("crop mode {}", if self.crop_mode { "on" } else { "off" });
        self.crop_mode
    }

    fn accepts_drag(&self) -> bool {
        self.crop_mode && self.current().is_some()
    }

    /// Pointer pressed on the display surface. A press during an active
    /// gesture restarts it from `point`.
    pub fn begin_drag(&mut self, point: Point) -> bool {
        if !self.accepts_drag() {
            return false;
        }
        self.drag.press(point);
        true
    }

    /// Pointer moved. Returns `true` if a gesture is in progress.
    pub fn drag_to(&mut self, point: Point) -> bool {
        self.accepts_drag() && self.drag.move_to(point)
    }

    /// Pointer released over a surface of size `display`.
    ///
    /// Leaves crop mode and, unless the gesture is degenerate, crops the
    /// current image to the selected region.
    pub fn finish_drag(&mut self, point: Point, display: Size) -> Result<bool> {
        if !self.accepts_drag() {
            return Ok(false);
        }
        let Some(gesture) = self.drag.release(point) else {
            return Ok(false);
        };
        self.crop_mode = false;

        let Some(image_size) = self.current().map(EditImage::size) else {
            return Ok(false);
        };
        match compute_crop_box(display, image_size, gesture) {
            Some(rect) => self.crop(rect),
            None => {
                debug!("degenerate crop gesture {gesture:?} ignored");
                Ok(false)
            }
        }
    }

    /// Abandon the gesture in progress without touching the image.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// On-screen selection rectangle of the gesture in progress.
    pub fn drag_overlay(&self) -> Option<DisplayRect> {
        if !self.crop_mode {
            return None;
        }
        self.drag.active().map(|gesture| gesture.display_rect())
    }
}
