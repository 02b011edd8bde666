//! The fixed transform pipeline.
//!
//! crop → scale to fit → compose on canvas → band recolor → rotate, then
//! optionally JPEG encode. Every run starts from the decoded source and owns
//! all intermediate buffers; the first failing stage aborts the run.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::decode::{self, DecodeError, FilterType, RasterImage};
use crate::encode::{self, EncodeError, DEFAULT_JPEG_QUALITY};
use crate::transform::{
    compose_on_canvas, crop_margins, recolor_band, rotate_quarter, scale_to_fit, BandRecolor,
    QuarterTurn, TransformError, WHITE,
};

/// Every tunable of the pipeline, with defaults matching the daily output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Canvas width before rotation.
    pub output_width: u32,
    /// Canvas height before rotation.
    pub output_height: u32,
    /// Pixels removed from each of the left and right edges.
    pub crop_x: u32,
    /// Pixels removed from each of the top and bottom edges.
    pub crop_y: u32,
    /// Near-black recolor band, applied to the canvas before rotation.
    pub band: BandRecolor,
    /// Canvas fill color.
    pub background: [u8; 3],
    /// Final rotation.
    pub rotation: QuarterTurn,
    /// Resampling filter for the scale-to-fit step.
    pub filter: FilterType,
    /// JPEG quality (1-100) for encoded output.
    pub jpeg_quality: u8,
    /// Apply the source's EXIF orientation before cropping.
    pub apply_exif_orientation: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_width: 300,
            output_height: 400,
            crop_x: 60,
            crop_y: 68,
            band: BandRecolor::default(),
            background: WHITE,
            rotation: QuarterTurn::Ccw90,
            filter: FilterType::Lanczos3,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            apply_exif_orientation: false,
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of the image the pipeline produces, after rotation.
    pub fn final_dimensions(&self) -> (u32, u32) {
        if self.rotation.swaps_dimensions() {
            (self.output_height, self.output_width)
        } else {
            (self.output_width, self.output_height)
        }
    }
}

/// A pipeline failure, tagged with the stage that produced it.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("decode failed")]
    Decode(#[from] DecodeError),

    #[error("crop failed")]
    Crop(#[source] TransformError),

    #[error("scale failed")]
    Scale(#[source] TransformError),

    #[error("canvas composition failed")]
    Compose(#[source] TransformError),

    #[error("encode failed")]
    Encode(#[from] EncodeError),
}

/// Run the transform stages on an already decoded image.
pub fn run_pipeline(
    source: &RasterImage,
    config: &PipelineConfig,
) -> Result<RasterImage, PipelineError> {
    info!(width = source.width, height = source.height, "source size");
    info!(
        width = config.output_width,
        height = config.output_height,
        "target size"
    );

    let cropped = crop_margins(source, config.crop_x, config.crop_y).map_err(PipelineError::Crop)?;
    info!(width = cropped.width, height = cropped.height, "cropped");

    let scaled = scale_to_fit(
        &cropped,
        config.output_width,
        config.output_height,
        config.filter,
    )
    .map_err(PipelineError::Scale)?;
    info!(width = scaled.width, height = scaled.height, "scaled");

    let mut canvas = compose_on_canvas(
        &scaled,
        config.output_width,
        config.output_height,
        config.background,
    )
    .map_err(PipelineError::Compose)?;

    let recolored = recolor_band(&mut canvas, &config.band);
    info!(
        row_start = config.band.row_start,
        row_end = config.band.row_end,
        pixels = recolored,
        "recolored near-black pixels in band"
    );

    let rotated = rotate_quarter(&canvas, config.rotation);
    info!(
        width = rotated.width,
        height = rotated.height,
        degrees = config.rotation.degrees(),
        "rotated"
    );

    Ok(rotated)
}

/// Decode image bytes as configured (with or without EXIF orientation).
pub fn decode_source(bytes: &[u8], config: &PipelineConfig) -> Result<RasterImage, DecodeError> {
    debug!(
        bytes = bytes.len(),
        exif_orientation = config.apply_exif_orientation,
        "decoding source"
    );
    if config.apply_exif_orientation {
        decode::decode_image_oriented(bytes)
    } else {
        decode::decode_image(bytes)
    }
}

/// Decode, transform and JPEG-encode one image held in memory.
pub fn process_bytes(bytes: &[u8], config: &PipelineConfig) -> Result<Vec<u8>, PipelineError> {
    let source = decode_source(bytes, config)?;
    let result = run_pipeline(&source, config)?;
    let jpeg = encode::encode_image(&result, config.jpeg_quality)?;
    debug!(bytes = jpeg.len(), quality = config.jpeg_quality, "encoded");
    Ok(jpeg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_image;

    const RED: [u8; 3] = [255, 0, 0];
    const BLACK: [u8; 3] = [0, 0, 0];
    const WHITE_PX: [u8; 3] = [255, 255, 255];

    /// White 420x536 source with one black row inside the band and one below it,
    /// both expressed in post-crop coordinates.
    fn reference_source() -> RasterImage {
        let mut img = RasterImage::filled(420, 536, WHITE_PX);
        for x in 0..420 {
            img.set_pixel(x, 68 + 100, BLACK); // canvas row 100: inside [45, 215)
            img.set_pixel(x, 68 + 300, BLACK); // canvas row 300: outside
        }
        img
    }

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();

        assert_eq!((config.output_width, config.output_height), (300, 400));
        assert_eq!((config.crop_x, config.crop_y), (60, 68));
        assert_eq!(config.jpeg_quality, 99);
        assert_eq!(config.background, [255, 255, 255]);
        assert_eq!(config.rotation, QuarterTurn::Ccw90);
        assert!(!config.apply_exif_orientation);
        assert_eq!(config.final_dimensions(), (400, 300));
    }

    #[test]
    fn test_reference_image_end_to_end() {
        let config = PipelineConfig::default();
        let result = run_pipeline(&reference_source(), &config).unwrap();

        assert_eq!(result.dimensions(), (400, 300));

        // Canvas (x, y) lands at (y, 299 - x) after the counter-clockwise turn
        for x in [0u32, 150, 299] {
            assert_eq!(result.get_pixel(100, 299 - x), Some(RED));
            assert_eq!(result.get_pixel(300, 299 - x), Some(BLACK));
        }

        // No letterbox border: the whole canvas is covered by the source
        assert_eq!(result.get_pixel(0, 0), Some(WHITE_PX));
        assert_eq!(result.get_pixel(399, 299), Some(WHITE_PX));
    }

    #[test]
    fn test_crop_too_large_fails_at_crop_stage() {
        let source = RasterImage::filled(400, 600, WHITE_PX);
        let config = PipelineConfig {
            crop_x: 250,
            ..PipelineConfig::default()
        };

        let err = run_pipeline(&source, &config).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Crop(TransformError::InvalidCrop { .. })
        ));
        assert!(err.to_string().starts_with("crop failed"));
    }

    #[test]
    fn test_zero_output_fails_at_scale_stage() {
        let source = RasterImage::filled(200, 200, WHITE_PX);
        let config = PipelineConfig {
            output_width: 0,
            ..PipelineConfig::default()
        };

        assert!(matches!(
            run_pipeline(&source, &config),
            Err(PipelineError::Scale(TransformError::InvalidDimensions { .. }))
        ));
    }

    #[test]
    fn test_wide_source_is_letterboxed() {
        // Crops to 600x150, scales to 300x75, centered at y = 162
        let source = RasterImage::filled(720, 286, BLACK);
        let config = PipelineConfig::default();

        let result = run_pipeline(&source, &config).unwrap();
        assert_eq!(result.dimensions(), (400, 300));

        // Canvas corners stay white; they map to output corners
        assert_eq!(result.get_pixel(0, 0), Some(WHITE_PX));
        assert_eq!(result.get_pixel(399, 0), Some(WHITE_PX));
        assert_eq!(result.get_pixel(0, 299), Some(WHITE_PX));
        assert_eq!(result.get_pixel(399, 299), Some(WHITE_PX));

        // Pasted rows are 162..237; canvas (150, 230) is content below the band
        assert_eq!(result.get_pixel(230, 149), Some(BLACK));
        // Canvas (150, 170) is content inside the band
        assert_eq!(result.get_pixel(170, 149), Some(RED));
    }

    #[test]
    fn test_band_recolors_letterboxed_content_only() {
        // Tall source: crops to 100x400 and pastes at x = 100, no scaling
        let source = RasterImage::filled(220, 536, BLACK);
        let config = PipelineConfig::default();

        let result = run_pipeline(&source, &config).unwrap();

        // Canvas (150, 100) is black content in the band
        assert_eq!(result.get_pixel(100, 149), Some(RED));
        // Canvas (10, 100) is white border in the band
        assert_eq!(result.get_pixel(100, 289), Some(WHITE_PX));
    }

    #[test]
    fn test_no_rotation_keeps_canvas_orientation() {
        let config = PipelineConfig {
            rotation: QuarterTurn::None,
            ..PipelineConfig::default()
        };

        let result = run_pipeline(&reference_source(), &config).unwrap();
        assert_eq!(result.dimensions(), (300, 400));
        assert_eq!(result.get_pixel(10, 100), Some(RED));
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let config = PipelineConfig::default();
        let source = reference_source();

        let first = run_pipeline(&source, &config).unwrap();
        let second = run_pipeline(&source, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_process_bytes_round_trip() {
        // Thick black stripe covering canvas rows 90..130
        let mut source = RasterImage::filled(420, 536, WHITE_PX);
        for y in 68 + 90..68 + 130 {
            for x in 0..420 {
                source.set_pixel(x, y, BLACK);
            }
        }
        let jpeg = encode_image(&source, 95).unwrap();
        let output = process_bytes(&jpeg, &PipelineConfig::default()).unwrap();

        let decoded = decode::decode_image(&output).unwrap();
        assert_eq!(decoded.dimensions(), (400, 300));

        // The stripe comes back red after lossy coding
        let [r, g, b] = decoded.get_pixel(110, 150).unwrap();
        assert!(r > 200 && g < 60 && b < 60, "expected red, got {:?}", (r, g, b));
    }

    #[test]
    fn test_process_bytes_rejects_garbage() {
        let err = process_bytes(b"not an image", &PipelineConfig::default()).unwrap_err();
        assert!(matches!(err, PipelineError::Decode(_)));
    }

    #[test]
    fn test_malformed_source_is_rejected() {
        let source = RasterImage {
            width: 420,
            height: 536,
            pixels: vec![255; 100],
        };

        let err = run_pipeline(&source, &PipelineConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Crop(TransformError::PixelBufferMismatch { actual: 100, .. })
        ));
    }

    #[test]
    fn test_error_message_names_stage_only() {
        let source = RasterImage::filled(400, 100, WHITE_PX);
        let config = PipelineConfig {
            crop_x: 250,
            ..PipelineConfig::default()
        };

        let err = run_pipeline(&source, &config).unwrap_err();
        assert_eq!(err.to_string(), "crop failed");
        assert!(std::error::Error::source(&err)
            .map(|e| e.to_string().starts_with("Invalid crop box"))
            .unwrap_or(false));
    }
}
