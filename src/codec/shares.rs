//! Threshold polynomial shares.
//!
//! Symbols are grouped into blocks of `threshold`. Each block is read as the
//! coefficients of a polynomial over GF(prime) which is evaluated at
//! `x = 1, 2, ..., L` (L = block length). Every evaluation `q` becomes one
//! share byte `(256 - prime) + q`, which sits just below 255.
//!
//! Only `threshold = 1` can be reversed here: a block of one symbol is a
//! constant polynomial and its single share is the symbol itself.

use tracing::trace;

use crate::stego::PixelBuffer;

/// Smallest share byte for a given modulus.
#[inline]
pub fn share_floor(prime: u64) -> u8 {
    debug_assert!((2..=256).contains(&prime));
    (256 - prime) as u8
}

/// Evaluates the polynomial with coefficients `block` at `x`, modulo `prime`.
fn evaluate(block: &[u32], x: u64, prime: u64) -> u64 {
    let x = x % prime;
    let mut power = 1u64;
    let mut sum = 0u64;
    for &coefficient in block {
        sum = (sum + u64::from(coefficient) % prime * power) % prime;
        power = power * x % prime;
    }
    sum
}

/// Computes one share byte per symbol slot.
///
/// Output index `o + i` holds row `i` of the block starting at `o`, so the
/// shares line up one-to-one with pixels. The last block may be shorter
/// than `threshold`; it is evaluated at `1..=L` for its own length `L`.
pub fn encode_shares(symbols: &[u32], threshold: usize, prime: u64) -> Vec<u8> {
    debug_assert!(threshold >= 1);
    let floor = share_floor(prime);
    let mut shares = Vec::with_capacity(symbols.len());

    for block in symbols.chunks(threshold) {
        for row in 0..block.len() {
            let q = evaluate(block, row as u64 + 1, prime);
            shares.push(floor + q as u8);
        }
    }

    trace!(
        symbols = symbols.len(),
        threshold,
        prime,
        "computed share bytes"
    );
    shares
}

/// Writes `shares[k]` into the alpha byte of pixel `k`.
///
/// Returns the pixel offset just past the last share written. Shares that
/// would land beyond the last pixel are dropped.
pub fn write_shares(buffer: &mut PixelBuffer, shares: &[u8]) -> usize {
    let written = shares.len().min(buffer.pixel_count());
    for (pixel, &share) in shares.iter().take(written).enumerate() {
        buffer.set_alpha(pixel, share);
    }
    written
}

/// Recovers symbols from threshold-1 share bytes.
///
/// Bytes below the share floor cannot come from the encoder; they decode
/// to 0.
pub fn decode_shares(bytes: &[u8], prime: u64) -> Vec<u32> {
    let floor = share_floor(prime);
    bytes
        .iter()
        .map(|&byte| u32::from(byte.saturating_sub(floor)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::share_modulus;

    #[test]
    fn test_share_floor() {
        assert_eq!(share_floor(11), 245);
        assert_eq!(share_floor(131), 125);
        assert_eq!(share_floor(3), 253);
    }

    #[test]
    fn test_threshold_one_is_offset_symbol() {
        let symbols = [0, 1, 7, 3];
        let shares = encode_shares(&symbols, 1, 11);
        assert_eq!(shares, vec![245, 246, 252, 248]);
        assert_eq!(decode_shares(&shares, 11), symbols);
    }

    #[test]
    fn test_block_evaluation() {
        // Block [2, 3]: q(x) = 2 + 3x mod 11 -> q(1) = 5, q(2) = 8
        // Tail block [4]: q(1) = 4
        let shares = encode_shares(&[2, 3, 4], 2, 11);
        assert_eq!(shares, vec![245 + 5, 245 + 8, 245 + 4]);
    }

    #[test]
    fn test_block_wraps_modulus() {
        // q(x) = 7 + 7x + 7x^2 mod 11 -> q(1) = 21 % 11 = 10, q(2) = 49 % 11 = 5, q(3) = 91 % 11 = 3
        let shares = encode_shares(&[7, 7, 7], 3, 11);
        assert_eq!(shares, vec![255, 250, 248]);
    }

    #[test]
    fn test_share_range_threshold_one() {
        for t in 1..=7u8 {
            let prime = share_modulus(t);
            let floor = share_floor(prime);
            let symbols: Vec<u32> = (0..(1u32 << t)).collect();
            for share in encode_shares(&symbols, 1, prime) {
                assert!(share >= floor, "t = {}", t);
                assert!(share <= 254, "t = {}", t);
            }
        }
    }

    #[test]
    fn test_t3_scenario_range() {
        let prime = share_modulus(3);
        assert_eq!(prime, 11);
        let shares = encode_shares(&[0, 1, 2, 3, 4, 5, 6, 7], 1, prime);
        assert!(shares.iter().all(|&s| (245..=254).contains(&s)));
    }

    #[test]
    fn test_decode_below_floor_saturates() {
        assert_eq!(decode_shares(&[0, 244, 245], 11), vec![0, 0, 0]);
    }

    #[test]
    fn test_write_shares() {
        let mut buffer = PixelBuffer::new(2, 2, vec![10; 16]).unwrap();
        let end = write_shares(&mut buffer, &[250, 251, 252]);
        assert_eq!(end, 3);
        assert_eq!(buffer.alpha_bytes().collect::<Vec<_>>(), vec![250, 251, 252, 10]);
        // RGB untouched
        assert_eq!(&buffer.data()[..3], &[10, 10, 10]);
    }

    #[test]
    fn test_write_shares_clips_to_buffer() {
        let mut buffer = PixelBuffer::new(1, 1, vec![0; 4]).unwrap();
        assert_eq!(write_shares(&mut buffer, &[250, 251]), 1);
        assert_eq!(buffer.alpha(0), 250);
    }
}
