//! Image decoding for Dayframe.
//!
//! This module provides functionality for:
//! - Decoding JPEG (and PNG) bytes into an RGB8 [`RasterImage`]
//! - Reading and optionally applying EXIF orientation
//!
//! All operations are synchronous and work on in-memory bytes only; reading
//! files or fetching over the network is left to the caller.
//!
//! # Examples
//!
//! ```ignore
//! use dayframe_core::decode::decode_image;
//!
//! let bytes = std::fs::read("1208.jpg")?;
//! let image = decode_image(&bytes)?;
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod reader;
mod types;

pub use reader::{decode_image, decode_image_oriented, get_orientation};
pub use types::{DecodeError, FilterType, Orientation, RasterImage};
