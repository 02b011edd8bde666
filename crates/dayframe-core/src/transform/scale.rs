//! Aspect-preserving resize into a bounding box.
//!
//! Uses the `image` crate's resampling filters. The output always fits inside
//! the target box and touches it on the limiting axis.

use super::{check_buffer, TransformError};
use crate::decode::{FilterType, RasterImage};

/// Compute the largest size with the source aspect ratio that fits inside
/// `target_width` x `target_height`.
///
/// The limiting axis gets its target exactly; the other axis is floored.
/// Integer arithmetic keeps the result exact where a floating point scale
/// factor could land one pixel short. Both results are at least 1, so a
/// sliver-thin source still yields a resizable image instead of a zero axis.
pub fn fit_dimensions(
    src_width: u32,
    src_height: u32,
    target_width: u32,
    target_height: u32,
) -> (u32, u32) {
    if src_width == 0 || src_height == 0 {
        return (0, 0);
    }

    let (sw, sh) = (u64::from(src_width), u64::from(src_height));
    let (tw, th) = (u64::from(target_width), u64::from(target_height));

    // scale_x <= scale_y  <=>  tw / sw <= th / sh  <=>  tw * sh <= th * sw
    if tw * sh <= th * sw {
        let new_height = (sh * tw / sw) as u32;
        (target_width, new_height.max(1))
    } else {
        let new_width = (sw * th / sh) as u32;
        (new_width.max(1), target_height)
    }
}

/// Resize `image` so it fits within `target_width` x `target_height`,
/// preserving its aspect ratio.
///
/// When the fitted size equals the current size the image is returned
/// unchanged.
///
/// # Errors
///
/// Returns `TransformError::InvalidDimensions` if the target or the source
/// has a zero dimension.
pub fn scale_to_fit(
    image: &RasterImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RasterImage, TransformError> {
    if target_width == 0 || target_height == 0 {
        return Err(TransformError::InvalidDimensions {
            width: target_width,
            height: target_height,
        });
    }
    if image.is_empty() {
        return Err(TransformError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    check_buffer(image)?;

    let (new_width, new_height) =
        fit_dimensions(image.width, image.height, target_width, target_height);

    // Fast path: scale factor of exactly 1
    if new_width == image.width && new_height == image.height {
        return Ok(image.clone());
    }

    let rgb_image = image
        .to_rgb_image()
        .ok_or_else(|| TransformError::ResampleFailed("pixel buffer size mismatch".to_string()))?;

    let resized =
        image::imageops::resize(&rgb_image, new_width, new_height, filter.to_image_filter());

    Ok(RasterImage::from_rgb_image(resized))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
