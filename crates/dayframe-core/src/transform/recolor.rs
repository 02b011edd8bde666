//! Band recolor: replace near-black pixels inside a horizontal row band.

use serde::{Deserialize, Serialize};

use crate::decode::RasterImage;

/// Row band and color rule for [`recolor_band`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandRecolor {
    /// First row of the band (inclusive).
    pub row_start: u32,
    /// End of the band (exclusive). Clamped to the image height.
    pub row_end: u32,
    /// A pixel is near-black when every channel is strictly below this value.
    pub threshold: u8,
    /// Replacement color for near-black pixels.
    pub color: [u8; 3],
}

impl Default for BandRecolor {
    fn default() -> Self {
        Self {
            row_start: 45,
            row_end: 215,
            threshold: 50,
            color: [255, 0, 0],
        }
    }
}

impl BandRecolor {
    /// Check whether a pixel counts as near-black under this rule.
    #[inline]
    pub fn is_near_black(&self, rgb: &[u8]) -> bool {
        rgb.iter().all(|&c| c < self.threshold)
    }
}

/// Recolor every near-black pixel in rows `[row_start, min(row_end, height))`
/// to `band.color`, in place.
///
/// Returns the number of pixels rewritten. Rows outside the band and pixels
/// that are not near-black are left untouched. An image whose buffer is too
/// short to hold the band is left unchanged.
pub fn recolor_band(image: &mut RasterImage, band: &BandRecolor) -> usize {
    let row_end = band.row_end.min(image.height);
    if band.row_start >= row_end {
        return 0;
    }

    let stride = image.width as usize * 3;
    let start = band.row_start as usize * stride;
    let end = row_end as usize * stride;

    // A malformed buffer has no well-defined band
    let Some(rows) = image.pixels.get_mut(start..end) else {
        return 0;
    };

    let mut recolored = 0;
    for px in rows.chunks_exact_mut(3) {
        if band.is_near_black(px) {
            px.copy_from_slice(&band.color);
            recolored += 1;
        }
    }
    recolored
}


// ============================================================================
// Property-Based Tests
// ============================================================================
