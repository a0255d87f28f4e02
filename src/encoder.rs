//! Message encoding into the alpha channel.
//!
//! This module orchestrates the encoding process:
//! 1. Load the carrier image into an RGBA pixel buffer
//! 2. Validate the configuration and check capacity
//! 3. Pack the message code units into `t`-bit symbols
//! 4. Turn the symbols into share bytes and write them from pixel 0
//! 5. Append the terminator and pad the remaining alpha bytes with 255
//! 6. Render the buffer back into a PNG

use tracing::debug;

use crate::codec::{
    append_terminator, capacity, encode_shares, pack, terminator::sentinel_len, write_shares,
};
use crate::config::{StegoConfig, DEFAULT_CONFIG};
use crate::error::{Result, StegoError};
use crate::math::share_modulus;
use crate::message::Message;
use crate::stego::{ImageLoader, ImageRenderer, ImageSource, PixelBuffer, PngImageIo, RenderedImage};

/// What [`encode_buffer`] wrote into the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeReport {
    /// Code units in the message.
    pub code_units: usize,
    /// Symbols (and share bytes) written.
    pub symbols: usize,
    /// Pixel offset where the terminator starts.
    pub shares_end: usize,
    /// Capacity of the buffer in code units.
    pub capacity: u64,
    /// Share modulus.
    pub prime: u64,
}

/// Hides `message` in the alpha channel of `image` using [`DEFAULT_CONFIG`].
///
/// # Arguments
/// * `message` - The text to hide
/// * `image` - A path, `file://` or `data:` URL, encoded bytes or decoded image
///
/// # Returns
/// The carrier re-encoded as PNG with the message embedded.
pub fn encode(message: &str, image: impl Into<ImageSource>) -> Result<RenderedImage> {
    encode_with_config(message, image, &DEFAULT_CONFIG)
}

/// Hides `message` with an explicit configuration.
pub fn encode_with_config(
    message: &str,
    image: impl Into<ImageSource>,
    config: &StegoConfig,
) -> Result<RenderedImage> {
    let io = PngImageIo::new();
    encode_with_io(message, &image.into(), config, &io, &io)
}

/// Hides `message` using the given image collaborators.
pub fn encode_with_io<L, R>(
    message: &str,
    image: &ImageSource,
    config: &StegoConfig,
    loader: &L,
    renderer: &R,
) -> Result<RenderedImage>
where
    L: ImageLoader + ?Sized,
    R: ImageRenderer + ?Sized,
{
    let mut buffer = loader.load(image)?;
    config.validate()?;

    let message = Message::from_text(message, config.code_unit_size);
    let report = encode_buffer(&message, &mut buffer, config)?;
    debug!(?report, "message embedded");

    renderer.render(&buffer)
}

/// Writes `message` into the alpha channel of `buffer`.
///
/// This is the image-format independent core of [`encode`]. On error the
/// buffer is left untouched.
pub fn encode_buffer(
    message: &Message,
    buffer: &mut PixelBuffer,
    config: &StegoConfig,
) -> Result<EncodeReport> {
    config.validate()?;

    let t = config.t;
    let available = capacity(buffer.width(), buffer.height(), t, config.code_unit_size);
    debug!(
        width = buffer.width(),
        height = buffer.height(),
        capacity = available,
        length = message.len(),
        "checking capacity"
    );

    if available <= message.len() as u64 {
        return Err(StegoError::Capacity {
            length: message.len(),
            capacity: available,
        });
    }

    let prime = share_modulus(t);
    let symbols = pack(message.units(), u32::from(t), config.code_unit_size);
    let shares = encode_shares(&symbols, config.threshold, prime);
    let shares_end = write_shares(buffer, &shares);

    append_terminator(buffer, shares_end, config.threshold);
    debug!(
        symbols = symbols.len(),
        prime,
        terminator_at = shares_end,
        terminator_len = sentinel_len(config.threshold),
        "wrote shares and terminator"
    );

    Ok(EncodeReport {
        code_units: message.len(),
        symbols: symbols.len(),
        shares_end,
        capacity: available,
        prime,
    })
}
