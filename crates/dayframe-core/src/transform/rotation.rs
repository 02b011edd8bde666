//! Lossless rotation by quarter turns.
//!
//! Rotations by exact multiples of 90° are pure pixel permutations, so no
//! interpolation is involved and four quarter turns reproduce the input
//! exactly. The canvas is expanded: a quarter turn swaps width and height.
//!
//! # Mapping
//!
//! For a `w` x `h` source pixel at (col, row):
//! ```text
//! Ccw90: (col, row) -> (row, w - 1 - col)          output h x w
//! Half:  (col, row) -> (w - 1 - col, h - 1 - row)  output w x h
//! Cw90:  (col, row) -> (h - 1 - row, col)          output h x w
//! ```

use serde::{Deserialize, Serialize};

use crate::decode::RasterImage;

/// Rotation by an exact multiple of 90°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuarterTurn {
    /// No rotation.
    None,
    /// 90° counter-clockwise.
    #[default]
    Ccw90,
    /// 180°.
    Half,
    /// 90° clockwise.
    Cw90,
}

impl QuarterTurn {
    /// Returns true if this rotation swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, QuarterTurn::Ccw90 | QuarterTurn::Cw90)
    }

    /// Counter-clockwise angle in degrees.
    pub fn degrees(self) -> u32 {
        match self {
            QuarterTurn::None => 0,
            QuarterTurn::Ccw90 => 90,
            QuarterTurn::Half => 180,
            QuarterTurn::Cw90 => 270,
        }
    }
}

/// Rotate `image` 90° counter-clockwise, expanding the canvas.
pub fn rotate90(image: &RasterImage) -> RasterImage {
    rotate_quarter(image, QuarterTurn::Ccw90)
}

/// Rotate `image` by a quarter turn.
///
/// The output buffer always matches the rotated dimensions; pixels missing
/// from a short source buffer come out black.
pub fn rotate_quarter(image: &RasterImage, turn: QuarterTurn) -> RasterImage {
    if turn == QuarterTurn::None {
        return image.clone();
    }

    let (w, h) = (image.width, image.height);
    let (dst_w, dst_h) = if turn.swaps_dimensions() { (h, w) } else { (w, h) };

    let mut output = vec![0u8; image.expected_len()];

    for row in 0..h {
        for col in 0..w {
            let (dst_x, dst_y) = match turn {
                QuarterTurn::Ccw90 => (row, w - 1 - col),
                QuarterTurn::Half => (w - 1 - col, h - 1 - row),
                QuarterTurn::Cw90 => (h - 1 - row, col),
                QuarterTurn::None => (col, row),
            };

            let src_idx = (row as usize * w as usize + col as usize) * 3;
            let dst_idx = (dst_y as usize * dst_w as usize + dst_x as usize) * 3;
            if let Some(px) = image.pixels.get(src_idx..src_idx + 3) {
                output[dst_idx..dst_idx + 3].copy_from_slice(px);
            }
        }
    }

    RasterImage::new(dst_w, dst_h, output)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
