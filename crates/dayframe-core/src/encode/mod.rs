//! Image encoding for Dayframe.
//!
//! The pipeline output is always written as a baseline JPEG. Encoding works
//! on in-memory buffers; persisting the bytes is the caller's job.
//!
//! # Examples
//!
//! ```ignore
//! use dayframe_core::encode::{encode_image, DEFAULT_JPEG_QUALITY};
//!
//! let jpeg_bytes = encode_image(&rotated, DEFAULT_JPEG_QUALITY)?;
//! ```

mod jpeg;

pub use jpeg::{encode_image, encode_jpeg, EncodeError, DEFAULT_JPEG_QUALITY};
