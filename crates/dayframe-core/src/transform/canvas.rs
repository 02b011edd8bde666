//! Letterboxing: center an image on a fixed-size background canvas.

use super::{check_buffer, TransformError};
use crate::decode::RasterImage;

/// Default canvas background.
pub const WHITE: [u8; 3] = [255, 255, 255];

/// Paste `image` centered on a new `canvas_width` x `canvas_height` canvas
/// filled with `background`.
///
/// Offsets use floor division, so an odd leftover puts the extra pixel on the
/// right/bottom. Any part of `image` that falls outside the canvas is clipped.
///
/// # Errors
///
/// Returns `TransformError::InvalidDimensions` for a zero-sized canvas and
/// `TransformError::PixelBufferMismatch` for a malformed source.
pub fn compose_on_canvas(
    image: &RasterImage,
    canvas_width: u32,
    canvas_height: u32,
    background: [u8; 3],
) -> Result<RasterImage, TransformError> {
    if canvas_width == 0 || canvas_height == 0 {
        return Err(TransformError::InvalidDimensions {
            width: canvas_width,
            height: canvas_height,
        });
    }

    check_buffer(image)?;

    let mut canvas = RasterImage::filled(canvas_width, canvas_height, background);

    let offset_x = (i64::from(canvas_width) - i64::from(image.width)).div_euclid(2);
    let offset_y = (i64::from(canvas_height) - i64::from(image.height)).div_euclid(2);

    // Visible source span on each axis after clipping to the canvas
    let src_x0 = (-offset_x).max(0);
    let src_y0 = (-offset_y).max(0);
    let src_x1 = i64::from(image.width).min(i64::from(canvas_width) - offset_x);
    let src_y1 = i64::from(image.height).min(i64::from(canvas_height) - offset_y);

    if src_x0 >= src_x1 || src_y0 >= src_y1 {
        return Ok(canvas);
    }

    let span = (src_x1 - src_x0) as usize * 3;
    let src_stride = image.width as usize * 3;
    let dst_stride = canvas_width as usize * 3;

    for src_y in src_y0..src_y1 {
        let dst_y = (src_y + offset_y) as usize;
        let dst_x = (src_x0 + offset_x) as usize;

        let src_start = src_y as usize * src_stride + src_x0 as usize * 3;
        let dst_start = dst_y * dst_stride + dst_x * 3;

        canvas.pixels[dst_start..dst_start + span]
            .copy_from_slice(&image.pixels[src_start..src_start + span]);
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: [u8; 3] = [0, 0, 0];

    fn corners(img: &RasterImage) -> [[u8; 3]; 4] {
        let (w, h) = img.dimensions();
        [
            img.get_pixel(0, 0).unwrap(),
            img.get_pixel(w - 1, 0).unwrap(),
            img.get_pixel(0, h - 1).unwrap(),
            img.get_pixel(w - 1, h - 1).unwrap(),
        ]
    }

    #[test]
    fn test_same_size_has_no_border() {
        let img = RasterImage::filled(300, 400, BLACK);
        let result = compose_on_canvas(&img, 300, 400, WHITE).unwrap();

        assert_eq!(result, img);
    }

    #[test]
    fn test_letterbox_horizontal_band() {
        // 300x150 on 300x400: offset y = 125
        let img = RasterImage::filled(300, 150, BLACK);
        let result = compose_on_canvas(&img, 300, 400, WHITE).unwrap();

        assert_eq!(result.dimensions(), (300, 400));
        assert_eq!(result.get_pixel(150, 124), Some(WHITE));
        assert_eq!(result.get_pixel(150, 125), Some(BLACK));
        assert_eq!(result.get_pixel(150, 274), Some(BLACK));
        assert_eq!(result.get_pixel(150, 275), Some(WHITE));
        assert_eq!(corners(&result), [WHITE; 4]);
    }

    #[test]
    fn test_odd_leftover_goes_right() {
        // 2 pixels on 5: offset (5 - 2) div 2 = 1
        let img = RasterImage::filled(2, 1, BLACK);
        let result = compose_on_canvas(&img, 5, 1, WHITE).unwrap();

        let row: Vec<[u8; 3]> = (0..5).map(|x| result.get_pixel(x, 0).unwrap()).collect();
        assert_eq!(row, vec![WHITE, BLACK, BLACK, WHITE, WHITE]);
    }

    #[test]
    fn test_custom_background() {
        let img = RasterImage::filled(1, 1, BLACK);
        let result = compose_on_canvas(&img, 3, 3, [10, 20, 30]).unwrap();

        assert_eq!(result.get_pixel(0, 0), Some([10, 20, 30]));
        assert_eq!(result.get_pixel(1, 1), Some(BLACK));
    }

    #[test]
    fn test_larger_image_is_clipped_centered() {
        // 5x1 with values 0..5 onto a 3x1 canvas: offset (3 - 5) div 2 = -1
        let mut img = RasterImage::filled(5, 1, BLACK);
        for x in 0..5 {
            img.set_pixel(x, 0, [x as u8, 0, 0]);
        }
        let result = compose_on_canvas(&img, 3, 1, WHITE).unwrap();

        assert_eq!(result.get_pixel(0, 0), Some([1, 0, 0]));
        assert_eq!(result.get_pixel(2, 0), Some([3, 0, 0]));
    }

    #[test]
    fn test_zero_canvas_error() {
        let img = RasterImage::filled(1, 1, BLACK);
        assert!(matches!(
            compose_on_canvas(&img, 0, 10, WHITE),
            Err(TransformError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_compose_rejects_short_buffer() {
        let img = RasterImage {
            width: 4,
            height: 4,
            pixels: vec![0; 5],
        };

        let result = compose_on_canvas(&img, 8, 8, WHITE);
        assert!(matches!(
            result,
            Err(TransformError::PixelBufferMismatch { expected: 48, actual: 5 })
        ));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
