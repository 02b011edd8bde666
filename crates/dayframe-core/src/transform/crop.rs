//! Margin cropping in pixel coordinates.
//!
//! A crop removes a fixed number of pixels from each of two opposite edges.
//! Boxes are validated against the source image; a box that would be empty
//! or reach outside the image is rejected instead of clamped.

use super::{check_buffer, TransformError};
use crate::decode::RasterImage;

/// A crop region as pixel edges: `left`/`top` inclusive, `right`/`bottom` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    /// Build the box that strips `margin_x` from the left and right edges and
    /// `margin_y` from the top and bottom edges of a `width` x `height` image.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidCrop` when either margin is at least
    /// half of the matching dimension.
    pub fn from_margins(
        width: u32,
        height: u32,
        margin_x: u32,
        margin_y: u32,
    ) -> Result<Self, TransformError> {
        let left = i64::from(margin_x);
        let top = i64::from(margin_y);
        let right = i64::from(width) - left;
        let bottom = i64::from(height) - top;

        if right <= left || bottom <= top {
            return Err(TransformError::InvalidCrop {
                left,
                top,
                right,
                bottom,
                width,
                height,
            });
        }

        // Both edges are within 0..=width/height once the check above passes
        Ok(Self {
            left: margin_x,
            top: margin_y,
            right: right as u32,
            bottom: bottom as u32,
        })
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    fn invalid_for(&self, image: &RasterImage) -> TransformError {
        TransformError::InvalidCrop {
            left: i64::from(self.left),
            top: i64::from(self.top),
            right: i64::from(self.right),
            bottom: i64::from(self.bottom),
            width: image.width,
            height: image.height,
        }
    }
}

/// Copy the pixels inside `crop` into a new image.
///
/// # Errors
///
/// Returns `TransformError::InvalidCrop` unless
/// `left < right <= width` and `top < bottom <= height`, and
/// `TransformError::PixelBufferMismatch` for a malformed source.
pub fn apply_crop(image: &RasterImage, crop: &CropBox) -> Result<RasterImage, TransformError> {
    check_buffer(image)?;
    if crop.left >= crop.right
        || crop.top >= crop.bottom
        || crop.right > image.width
        || crop.bottom > image.height
    {
        return Err(crop.invalid_for(image));
    }

    // Fast path: the box covers the whole image
    if crop.left == 0 && crop.top == 0 && crop.right == image.width && crop.bottom == image.height
    {
        return Ok(image.clone());
    }

    let out_width = crop.width();
    let out_height = crop.height();
    let src_stride = image.width as usize * 3;
    let row_bytes = out_width as usize * 3;

    let mut output = Vec::with_capacity(row_bytes * out_height as usize);

    // Copy pixel data row by row
    for src_y in crop.top..crop.bottom {
        let start = src_y as usize * src_stride + crop.left as usize * 3;
        output.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    Ok(RasterImage::new(out_width, out_height, output))
}

/// Strip `margin_x` pixels from the left and right edges and `margin_y`
/// pixels from the top and bottom edges.
///
/// # Example
///
/// ```ignore
/// let cropped = crop_margins(&image, 60, 68)?; // 420x536 -> 300x400
/// ```
pub fn crop_margins(
    image: &RasterImage,
    margin_x: u32,
    margin_y: u32,
) -> Result<RasterImage, TransformError> {
    let crop = CropBox::from_margins(image.width, image.height, margin_x, margin_y)?;
    apply_crop(image, &crop)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
