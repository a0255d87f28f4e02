//! Hiding capacity.

/// Maximum number of code units that fit in a `width` x `height` image.
///
/// Each pixel carries one `t`-bit symbol in its alpha byte, so the image
/// holds `t * width * height` bits, i.e. `⌊t·w·h / code_unit_size⌋` units.
/// A message must be strictly shorter than this to be embedded.
pub fn capacity(width: u32, height: u32, t: u8, code_unit_size: u32) -> u64 {
    debug_assert!(code_unit_size > 0);
    let bits = u128::from(t) * u128::from(width) * u128::from(height);
    (bits / u128::from(code_unit_size)).min(u128::from(u64::MAX)) as u64
}
