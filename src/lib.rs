//! # Alphahide - hide text in the alpha channel
//!
//! Alphahide embeds a text message in the transparency channel of an image
//! and recovers it again. Red, green and blue are never modified.
//!
//! ## Overview
//!
//! - The message is split into code units (UTF-16 by default)
//! - The bits of all code units are re-sliced into `t`-bit **symbols**,
//!   ignoring unit boundaries
//! - Symbols are grouped into blocks of `threshold` and each block is
//!   evaluated as a polynomial modulo a small prime; every evaluation becomes
//!   a **share byte** just below 255, written into one alpha byte
//! - A run of 255 bytes marks the end of the payload; everything after it is
//!   padded with 255
//!
//! Byte 255 never appears in a single-symbol share, which is what lets the
//! decoder find the end without a length field.
//!
//! The scheme hides data; it does not encrypt it. Decoding is implemented
//! for `threshold = 1` only.
//!
//! ## Example Usage
//!
//! ```rust
//! use alphahide::{decode, encode, ImageSource, PixelBuffer};
//!
//! // Any opaque carrier works; here a plain 32x32 white image
//! let carrier = PixelBuffer::filled(32, 32, 255);
//!
//! let png = encode("meet at noon", ImageSource::from(carrier)).unwrap();
//!
//! let message = decode(png.into_bytes()).unwrap();
//! assert_eq!(message, "meet at noon");
//! ```
//!
//! ## Modules
//!
//! - [`codec`]: bit packing, share bytes, terminator, capacity
//! - [`encoder`]: message → image
//! - [`decoder`]: image → message
//! - [`stego`]: pixel buffers and image loading/rendering
//! - [`config`]: codec parameters and their defaults

pub mod codec;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod math;
pub mod message;
pub mod stego;

// Re-export commonly used types at the crate root
pub use codec::capacity;
pub use config::{StegoConfig, DEFAULT_CONFIG};
pub use decoder::{decode, decode_buffer, decode_with_config, decode_with_io};
pub use encoder::{encode, encode_buffer, encode_with_config, encode_with_io, EncodeReport};
pub use error::{Result, StegoError};
pub use math::{is_prime, next_prime, share_modulus};
pub use message::Message;
pub use stego::{ImageLoader, ImageRenderer, ImageSource, PixelBuffer, PngImageIo, RenderedImage};
