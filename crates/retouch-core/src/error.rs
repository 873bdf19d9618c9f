//! Error type surfaced by the edit session.
//!
//! Each concern keeps its own error enum; `EditError` wraps them so a
//! failed open, transform or save reaches the caller unchanged.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::transform::TransformError;

/// Any failure coming out of the image-processing capability.
#[derive(Debug, Error)]
pub enum EditError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Result alias used throughout the crate.
pub type Result<T, E = EditError> = std::result::Result<T, E>;
