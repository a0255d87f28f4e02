//! Re-slicing code units into `t`-bit symbols and back.
//!
//! The message is treated as one continuous little-endian bit string: unit 0
//! contributes bits `0..code_unit_size`, unit 1 the next `code_unit_size`
//! bits, and so on. Symbols are cut from that string every `t` bits, so a
//! symbol may take its low bits from the top of one unit and its high bits
//! from the bottom of the next.

use super::bits::{BitReader, BitWriter};

/// Number of `t`-bit symbols needed for `units` code units.
pub fn symbol_count(units: usize, t: u32, code_unit_size: u32) -> usize {
    let bits = units as u64 * u64::from(code_unit_size);
    bits.div_ceil(u64::from(t)) as usize
}

/// Splits code units into `t`-bit symbols.
///
/// The final symbol is zero-padded when the total bit count is not a
/// multiple of `t`. No symbol is emitted that consists only of padding.
pub fn pack(code_units: &[u32], t: u32, code_unit_size: u32) -> Vec<u32> {
    let mut symbols = Vec::with_capacity(symbol_count(code_units.len(), t, code_unit_size));
    let mut reader = BitReader::new(code_units, code_unit_size);
    while let Some(symbol) = reader.read(t) {
        symbols.push(symbol);
    }
    symbols
}

/// Reassembles code units from `t`-bit symbols.
///
/// Inverse of [`pack`] for `1 <= t <= code_unit_size`. If the symbols leave a
/// nonzero partial unit behind it is returned as a final truncated unit.
pub fn unpack(symbols: &[u32], t: u32, code_unit_size: u32) -> Vec<u32> {
    let units = (symbols.len() as u64 * u64::from(t) / u64::from(code_unit_size)) as usize;
    let mut writer = BitWriter::with_capacity(code_unit_size, units + 1);
    for &symbol in symbols {
        writer.push(symbol, t);
    }
    writer.finish()
}
