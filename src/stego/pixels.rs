//! RGBA pixel buffer.

use crate::error::{Result, StegoError};

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Offset of the alpha byte within a pixel.
const ALPHA_OFFSET: usize = 3;

/// A `width` x `height` image as RGBA bytes, row-major, 4 bytes per pixel.
///
/// The codec only ever reads or writes the alpha byte of each pixel
/// (byte `4k + 3` for pixel `k`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps RGBA bytes. Fails if `data` is not exactly `width * height * 4` long.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(StegoError::InvalidInput(format!(
                "pixel buffer of {}x{} needs {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A buffer with every byte set to `value`.
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        let len = width as usize * height as usize * BYTES_PER_PIXEL;
        Self {
            width,
            height,
            data: vec![value; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / BYTES_PER_PIXEL
    }

    /// Raw RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Alpha byte of pixel `pixel`.
    ///
    /// # Panics
    /// If `pixel >= self.pixel_count()`.
    pub fn alpha(&self, pixel: usize) -> u8 {
        self.data[pixel * BYTES_PER_PIXEL + ALPHA_OFFSET]
    }

    /// Sets the alpha byte of pixel `pixel`.
    ///
    /// # Panics
    /// If `pixel >= self.pixel_count()`.
    pub fn set_alpha(&mut self, pixel: usize, value: u8) {
        self.data[pixel * BYTES_PER_PIXEL + ALPHA_OFFSET] = value;
    }

    /// Alpha bytes of all pixels, in pixel order.
    pub fn alpha_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|pixel| pixel[ALPHA_OFFSET])
    }
}
