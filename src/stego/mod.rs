//! Pixel buffers and the image I/O around them.
//!
//! - [`pixels`]: the RGBA buffer the codec writes into
//! - [`image`]: loading sources into buffers and rendering buffers to PNG

pub mod image;
pub mod pixels;

pub use image::{ImageLoader, ImageRenderer, ImageSource, PngImageIo, RenderedImage};
pub use pixels::PixelBuffer;
