//! Bit cursors over fixed-width integer sequences.
//!
//! Provides [`BitReader`] for slicing a sequence of `width`-bit units into
//! arbitrary-width fields and [`BitWriter`] for assembling fields back into
//! units. Both operate LSB-first: the low bit of unit 0 is bit 0 of the
//! stream, and unit boundaries are never aligned to field boundaries.

/// Low `bits` set, for `bits` in `0..=32`.
#[inline]
pub(crate) fn mask(bits: u32) -> u32 {
    debug_assert!(bits <= 32);
    ((1u64 << bits) - 1) as u32
}

/// Read cursor over the little-endian bit concatenation of `width`-bit units.
pub struct BitReader<'a> {
    units: &'a [u32],
    width: u32,
    /// Absolute bit position of the next read.
    pos: u64,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `units`, each contributing its low `width` bits.
    pub fn new(units: &'a [u32], width: u32) -> Self {
        debug_assert!((1..=32).contains(&width));
        Self {
            units,
            width,
            pos: 0,
        }
    }

    /// Total number of real bits in the stream.
    pub fn total_bits(&self) -> u64 {
        self.units.len() as u64 * u64::from(self.width)
    }

    /// Real bits not yet consumed.
    pub fn remaining(&self) -> u64 {
        self.total_bits().saturating_sub(self.pos)
    }

    /// Read the next `count` bits (1–32), low bit first.
    ///
    /// A read that starts inside the stream but runs past its end is padded
    /// with zero bits. Returns `None` once no real bits remain.
    pub fn read(&mut self, count: u32) -> Option<u32> {
        debug_assert!((1..=32).contains(&count));
        if self.remaining() == 0 {
            return None;
        }

        let width = u64::from(self.width);
        let mut value = 0u64;
        let mut got = 0u32;

        while got < count && self.remaining() > 0 {
            let unit = self.units[(self.pos / width) as usize];
            let offset = (self.pos % width) as u32;
            let take = (count - got).min(self.width - offset);

            let bits = (unit >> offset) & mask(take);
            value |= u64::from(bits) << got;

            got += take;
            self.pos += u64::from(take);
        }

        // Zero padding past the last unit.
        self.pos += u64::from(count - got);
        Some(value as u32)
    }
}

impl Iterator for BitReader<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.read(self.width)
    }
}

/// Write cursor assembling arbitrary-width fields into `width`-bit units.
#[derive(Debug)]
pub struct BitWriter {
    width: u32,
    /// Pending bits, LSB-aligned. Holds fewer than `width` bits between pushes.
    acc: u64,
    bits: u32,
    out: Vec<u32>,
}

impl BitWriter {
    pub fn new(width: u32) -> Self {
        debug_assert!((1..=32).contains(&width));
        Self {
            width,
            acc: 0,
            bits: 0,
            out: Vec::new(),
        }
    }

    /// Create a writer with room for `units` output units.
    pub fn with_capacity(width: u32, units: usize) -> Self {
        let mut writer = Self::new(width);
        writer.out.reserve(units);
        writer
    }

    /// Append the low `count` bits (1–32) of `value`.
    ///
    /// Every time `width` bits are pending, one unit is emitted and the
    /// overflow carries into the next unit.
    pub fn push(&mut self, value: u32, count: u32) {
        debug_assert!((1..=32).contains(&count));
        self.acc |= u64::from(value & mask(count)) << self.bits;
        self.bits += count;

        while self.bits >= self.width {
            self.out.push((self.acc as u32) & mask(self.width));
            self.acc >>= self.width;
            self.bits -= self.width;
        }
    }

    /// Number of bits waiting for a full unit.
    pub fn pending_bits(&self) -> u32 {
        self.bits
    }

    /// Finish writing. A nonzero partial unit is emitted as a final,
    /// truncated unit; an all-zero remainder is treated as padding.
    pub fn finish(mut self) -> Vec<u32> {
        if self.acc != 0 {
            self.out.push((self.acc as u32) & mask(self.width));
        }
        self.out
    }
}
