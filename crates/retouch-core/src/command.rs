//! Edits and UI state expressed as plain data.
//!
//! A presentation layer that talks to the session over a message boundary
//! (JavaScript, IPC) sends [`EditCommand`] values and reads back a
//! [`SessionStatus`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CropBox, Size};

/// A single user-initiated edit, or a move through history.
///
/// Serialized with an internal `type` tag, e.g. in JSON
/// `{ "type": "rotate", "degrees": 90.0 }` or
/// `{ "type": "adjust", "brightness": 20, "contrast": -10 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditCommand {
    /// Crop to a rectangle already in image pixels.
    Crop { rect: CropBox },
    Resize { width: u32, height: u32 },
    /// Degrees, positive = clockwise.
    Rotate { degrees: f64 },
    Grayscale,
    /// Gaussian blur; the configured radius is used when omitted.
    Blur {
        #[serde(default)]
        radius: Option<f32>,
    },
    Sharpen,
    /// Brightness and contrast control values, each -50 to 50.
    Adjust {
        #[serde(default)]
        brightness: i32,
        #[serde(default)]
        contrast: i32,
    },
    Undo,
    Redo,
}

/// What a presentation layer needs to draw its controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionStatus {
    /// Size of the current image, if one is loaded.
    pub size: Option<Size>,
    pub can_undo: bool,
    pub can_redo: bool,
    pub crop_mode: bool,
}

impl fmt::Display for SessionStatus {
    /// Status-bar line, e.g. `Size: 640x480 | Undo: true | Redo: false`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.size {
            Some(size) => write!(f, "Size: {}x{}", size.width, size.height)?,
            None => write!(f, "Size: -")?,
        }
        write!(f, " | Undo: {} | Redo: {}", self.can_undo, self.can_redo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line() {
        let status = SessionStatus {
            size: Some(Size::new(640, 480)),
            can_undo: true,
            can_redo: false,
            crop_mode: false,
        };
        assert_eq!(
            status.to_string(),
            "Size: 640x480 | Undo: true | Redo: false"
        );
        assert_eq!(
            SessionStatus::default().to_string(),
            "Size: - | Undo: false | Redo: false"
        );
    }

    #[test]
    fn test_command_from_tagged_table() {
        let cmd: EditCommand = toml::from_str("type = \"rotate\"\ndegrees = -90.0").unwrap();
        assert_eq!(cmd, EditCommand::Rotate { degrees: -90.0 });

        let cmd: EditCommand = toml::from_str("type = \"blur\"").unwrap();
        assert_eq!(cmd, EditCommand::Blur { radius: None });

        let cmd: EditCommand = toml::from_str("type = \"adjust\"\ncontrast = 10").unwrap();
        assert_eq!(
            cmd,
            EditCommand::Adjust {
                brightness: 0,
                contrast: 10
            }
        );
    }

    #[test]
    fn test_crop_command_carries_box() {
        let cmd: EditCommand = toml::from_str(
            "type = \"crop\"\nrect = { left = 1, top = 2, right = 3, bottom = 4 }",
        )
        .unwrap();
        assert_eq!(
            cmd,
            EditCommand::Crop {
                rect: CropBox::new(1, 2, 3, 4)
            }
        );
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(toml::from_str::<EditCommand>("type = \"sepia\"").is_err());
    }
}
