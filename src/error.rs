//! Error types for alpha-channel encoding and decoding.

use thiserror::Error;

/// Errors that can occur while hiding or recovering a message.
///
/// Every variant is terminal for the call that produced it: nothing is
/// written back and nothing is retried.
#[derive(Error, Debug)]
pub enum StegoError {
    /// The image source could not be turned into a pixel buffer.
    #[error("Invalid image input: {0}")]
    InvalidInput(String),

    /// A configuration value is outside its accepted range.
    #[error("Invalid parameter: {name} = {value} is not valid, expected {expected}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        expected: &'static str,
    },

    /// The message does not fit the image under the active configuration.
    #[error("Not enough capacity: message has {length} code units, image holds fewer than {capacity}")]
    Capacity { length: usize, capacity: u64 },

    /// The rendering backend could not produce an image from the buffer.
    #[error("Image context error: {0}")]
    Context(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StegoError {
    pub(crate) fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        expected: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            expected,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StegoError>;
