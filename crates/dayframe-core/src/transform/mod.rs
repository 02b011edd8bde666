//! Image transform stages: crop, scale-to-fit, canvas composition, band
//! recolor and quarter-turn rotation.
//!
//! Each stage takes a [`RasterImage`](crate::decode::RasterImage) and either
//! returns a new image or, for the recolor stage, mutates one it is handed
//! exclusively. The stages are composed by [`crate::pipeline`].
//!
//! # Transform Order
//!
//! 1. Crop fixed margins
//! 2. Scale to fit the output canvas
//! 3. Center on a background-filled canvas
//! 4. Recolor near-black pixels in a row band
//! 5. Rotate by a quarter turn
//!
//! # Coordinate System
//!
//! - Pixel coordinates are (column, row), origin at the top-left corner
//! - Rotation directions are as seen by a viewer of the image

mod canvas;
mod crop;
mod recolor;
mod rotation;
mod scale;

use thiserror::Error;

use crate::decode::RasterImage;

pub use canvas::{compose_on_canvas, WHITE};
pub use crop::{apply_crop, crop_margins, CropBox};
pub use recolor::{recolor_band, BandRecolor};
pub use rotation::{rotate90, rotate_quarter, QuarterTurn};
pub use scale::{fit_dimensions, scale_to_fit};

/// Errors produced by the transform stages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The crop box does not describe a non-empty region inside the image.
    #[error(
        "Invalid crop box ({left}, {top}, {right}, {bottom}) for {width}x{height} image"
    )]
    InvalidCrop {
        left: i64,
        top: i64,
        right: i64,
        bottom: i64,
        width: u32,
        height: u32,
    },

    /// A target or canvas dimension is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The pixel buffer length does not match the image dimensions.
    #[error("Pixel buffer holds {actual} bytes, expected {expected} for the image size")]
    PixelBufferMismatch { expected: usize, actual: usize },

    /// The resampler rejected the source buffer.
    #[error("Resampling failed: {0}")]
    ResampleFailed(String),
}

/// Reject an image whose pixel buffer disagrees with its dimensions.
pub(crate) fn check_buffer(image: &RasterImage) -> Result<(), TransformError> {
    if image.has_consistent_buffer() {
        Ok(())
    } else {
        Err(TransformError::PixelBufferMismatch {
            expected: image.expected_len(),
            actual: image.pixels.len(),
        })
    }
}
