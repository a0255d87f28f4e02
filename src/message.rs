//! Messages as sequences of fixed-width code units.
//!
//! How text maps to code units depends on `code_unit_size`:
//!
//! | `code_unit_size` | one code unit is        |
//! |------------------|-------------------------|
//! | 21 and above     | a Unicode scalar value  |
//! | 16 to 20         | a UTF-16 code unit      |
//! | 8 to 15          | a UTF-8 byte            |
//! | below 8          | a UTF-8 byte, truncated |
//!
//! The 16-bit default matches one unit per character for text in the
//! Basic Multilingual Plane.

use tracing::warn;

use crate::codec::bits::mask;

/// Text encoding used for a given code unit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16,
    Utf32,
}

impl TextEncoding {
    pub fn for_code_unit_size(code_unit_size: u32) -> Self {
        match code_unit_size {
            21.. => Self::Utf32,
            16..=20 => Self::Utf16,
            _ => Self::Utf8,
        }
    }
}

/// An ordered sequence of code units, each below `2^code_unit_size`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    units: Vec<u32>,
}

impl Message {
    /// Wraps raw code units.
    pub fn from_units(units: Vec<u32>) -> Self {
        Self { units }
    }

    /// Splits `text` into code units of `code_unit_size` bits.
    ///
    /// Below 8 bits UTF-8 bytes do not fit and are masked; the text will not
    /// survive a round trip.
    pub fn from_text(text: &str, code_unit_size: u32) -> Self {
        let units: Vec<u32> = match TextEncoding::for_code_unit_size(code_unit_size) {
            TextEncoding::Utf32 => text.chars().map(u32::from).collect(),
            TextEncoding::Utf16 => text.encode_utf16().map(u32::from).collect(),
            TextEncoding::Utf8 => text.bytes().map(u32::from).collect(),
        };

        let limit = mask(code_unit_size.min(32));
        if units.iter().any(|&u| u > limit) {
            warn!(
                code_unit_size,
                "message has code units wider than the configured size, truncating"
            );
            return Self::from_units(units.into_iter().map(|u| u & limit).collect());
        }
        Self { units }
    }

    /// Reassembles text from the code units. Invalid sequences become U+FFFD.
    pub fn to_text(&self, code_unit_size: u32) -> String {
        match TextEncoding::for_code_unit_size(code_unit_size) {
            TextEncoding::Utf32 => self
                .units
                .iter()
                .map(|&u| char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER))
                .collect(),
            TextEncoding::Utf16 => {
                let units: Vec<u16> = self.units.iter().map(|&u| u as u16).collect();
                String::from_utf16_lossy(&units)
            }
            TextEncoding::Utf8 => {
                let bytes: Vec<u8> = self.units.iter().map(|&u| u as u8).collect();
                String::from_utf8_lossy(&bytes).into_owned()
            }
        }
    }

    pub fn units(&self) -> &[u32] {
        &self.units
    }

    pub fn into_units(self) -> Vec<u32> {
        self.units
    }

    /// Number of code units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
