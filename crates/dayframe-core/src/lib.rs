//! Dayframe Core - daily image transform library
//!
//! This crate provides the image side of Dayframe: decoding, the fixed
//! crop → fit → letterbox → band recolor → rotate pipeline, and JPEG encoding.
//! It performs no file or network I/O and installs no logging subscriber; it
//! only emits `tracing` events.

pub mod decode;
pub mod encode;
pub mod pipeline;
pub mod transform;

pub use decode::{decode_image, DecodeError, FilterType, RasterImage};
pub use encode::{encode_image, EncodeError, DEFAULT_JPEG_QUALITY};
pub use pipeline::{process_bytes, run_pipeline, PipelineConfig, PipelineError};
pub use transform::{
    apply_crop, compose_on_canvas, crop_margins, recolor_band, rotate90, rotate_quarter,
    scale_to_fit, BandRecolor, CropBox, QuarterTurn, TransformError,
};
