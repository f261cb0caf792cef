//! Error types for the mosaic pipelines.

use std::fmt;

/// Errors produced by the decode and encode pipelines.
///
/// Both pipelines require non-empty input: a model with no placements has no
/// bounding box to size an image from, and an image with no opaque pixels has
/// no anchor row and nothing to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MosaicError {
    /// The placement sequence was empty (decode).
    EmptyModel,
    /// The image contained no opaque pixels (encode).
    EmptyImage,
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MosaicError::EmptyModel => {
                write!(f, "model contains no brick placements")
            }
            MosaicError::EmptyImage => {
                write!(f, "image contains no opaque pixels")
            }
        }
    }
}

impl std::error::Error for MosaicError {}
