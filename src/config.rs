//! Codec configuration.
//!
//! A [`StegoConfig`] is passed by reference into every encode/decode call.
//! Calls that take no configuration use [`DEFAULT_CONFIG`], which is never
//! mutated.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StegoError};

/// Smallest accepted symbol width in bits.
pub const MIN_T: u8 = 1;

/// Largest accepted symbol width in bits.
pub const MAX_T: u8 = 7;

/// Widest supported code unit, in bits.
pub const MAX_CODE_UNIT_SIZE: u32 = 32;

/// Default configuration: 3-bit symbols, threshold 1, UTF-16 code units.
pub const DEFAULT_CONFIG: StegoConfig = StegoConfig {
    t: 3,
    threshold: 1,
    code_unit_size: 16,
};

/// Parameters of the alpha-channel codec.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StegoConfig {
    /// Bits carried by each symbol (one alpha byte per symbol).
    pub t: u8,

    /// Number of symbols grouped into one polynomial share block.
    /// Also scales the terminator length (`threshold * 3`).
    pub threshold: usize,

    /// Width in bits of one message code unit.
    pub code_unit_size: u32,
}

impl Default for StegoConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl StegoConfig {
    pub fn with_t(mut self, t: u8) -> Self {
        self.t = t;
        self
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_code_unit_size(mut self, code_unit_size: u32) -> Self {
        self.code_unit_size = code_unit_size;
        self
    }

    /// Checks every field against its accepted range.
    ///
    /// `code_unit_size` must be at least `t`: with wider symbols than code
    /// units the zero padding of the last symbol could be read back as
    /// extra units.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_T..=MAX_T).contains(&self.t) {
            return Err(StegoError::invalid_parameter("t", self.t, "0 < t < 8"));
        }
        if self.threshold == 0 {
            return Err(StegoError::invalid_parameter(
                "threshold",
                self.threshold,
                "threshold >= 1",
            ));
        }
        if self.code_unit_size < u32::from(self.t) || self.code_unit_size > MAX_CODE_UNIT_SIZE {
            return Err(StegoError::invalid_parameter(
                "code_unit_size",
                self.code_unit_size,
                "t <= code_unit_size <= 32",
            ));
        }
        Ok(())
    }

    /// Parses a configuration from TOML. Missing keys take their default.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| StegoError::Config(e.to_string()))
    }

    /// Loads a configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Saves the configuration as TOML.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| StegoError::Config(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}
