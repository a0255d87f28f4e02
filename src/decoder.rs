//! Message decoding from the alpha channel.
//!
//! This module orchestrates the decoding process:
//! 1. Load the image into an RGBA pixel buffer
//! 2. Validate the configuration
//! 3. Find the terminator and read the share bytes before it
//! 4. Turn share bytes back into symbols (threshold 1 only)
//! 5. Unpack the symbols into code units and reassemble the text
//!
//! Shares written with `threshold > 1` are polynomial evaluations over
//! several symbols. Recovering the symbols would need interpolation across
//! the block, which is not implemented; decoding such an image is rejected.

use tracing::debug;

use crate::codec::{decode_shares, scan_terminator, unpack};
use crate::config::{StegoConfig, DEFAULT_CONFIG};
use crate::error::{Result, StegoError};
use crate::math::share_modulus;
use crate::message::Message;
use crate::stego::{ImageLoader, ImageSource, PixelBuffer, PngImageIo};

/// Extracts the hidden text from `image` using [`DEFAULT_CONFIG`].
pub fn decode(image: impl Into<ImageSource>) -> Result<String> {
    decode_with_config(image, &DEFAULT_CONFIG)
}

/// Extracts the hidden text with an explicit configuration.
///
/// The configuration must match the one used for encoding; a mismatch
/// yields garbage text, not an error.
pub fn decode_with_config(image: impl Into<ImageSource>, config: &StegoConfig) -> Result<String> {
    decode_with_io(&image.into(), config, &PngImageIo::new())
}

/// Extracts the hidden text using the given image loader.
pub fn decode_with_io<L>(image: &ImageSource, config: &StegoConfig, loader: &L) -> Result<String>
where
    L: ImageLoader + ?Sized,
{
    let buffer = loader.load(image)?;
    config.validate()?;

    let message = decode_buffer(&buffer, config)?;
    Ok(message.to_text(config.code_unit_size))
}

/// Reads the code units hidden in `buffer`.
///
/// If no terminator is found every alpha byte is treated as payload.
pub fn decode_buffer(buffer: &PixelBuffer, config: &StegoConfig) -> Result<Message> {
    config.validate()?;

    if config.threshold != 1 {
        return Err(StegoError::invalid_parameter(
            "threshold",
            config.threshold,
            "threshold = 1 (share reconstruction for larger thresholds is not supported)",
        ));
    }

    let end = match scan_terminator(buffer) {
        Some(end) => end,
        None => {
            debug!("no terminator found, reading the whole alpha channel");
            buffer.pixel_count()
        }
    };

    let prime = share_modulus(config.t);
    let shares: Vec<u8> = buffer.alpha_bytes().take(end).collect();
    let symbols = decode_shares(&shares, prime);
    let units = unpack(&symbols, u32::from(config.t), config.code_unit_size);

    debug!(
        payload_pixels = end,
        symbols = symbols.len(),
        code_units = units.len(),
        "extracted message"
    );

    Ok(Message::from_units(units))
}
