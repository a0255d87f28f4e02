//! End-of-payload marker.
//!
//! The encoder writes `threshold * 3` alpha bytes of 255 right after the
//! last share and then sets every later alpha byte to 255. The decoder looks
//! for a run of [`SCAN_WINDOW`] such bytes, independent of `threshold`.

use crate::stego::PixelBuffer;

/// Alpha value reserved for the terminator. Share bytes never take it.
pub const SENTINEL: u8 = 255;

/// Number of consecutive sentinel pixels the decoder requires.
pub const SCAN_WINDOW: usize = 16;

/// Length of the sentinel run written for `threshold`.
pub fn sentinel_len(threshold: usize) -> usize {
    threshold * 3
}

/// Writes the sentinel run at `from_pixel` and pads the rest of the alpha
/// channel with 255. Red, green and blue bytes are left as they are.
pub fn append_terminator(buffer: &mut PixelBuffer, from_pixel: usize, threshold: usize) {
    let pixels = buffer.pixel_count();
    let run_end = from_pixel.saturating_add(sentinel_len(threshold)).min(pixels);

    for pixel in from_pixel..run_end {
        buffer.set_alpha(pixel, SENTINEL);
    }
    for pixel in run_end..pixels {
        buffer.set_alpha(pixel, SENTINEL);
    }
}

/// Finds the pixel where the payload ends.
///
/// The payload ends at the first pixel `p` whose alpha and the alpha of the
/// following 15 pixels are all 255. Within the last 16 pixels the window is
/// cut off at the end of the buffer, so a run of 255 reaching the final
/// pixel also counts. Returns `None` when no such run exists.
pub fn scan_terminator(buffer: &PixelBuffer) -> Option<usize> {
    let alpha: Vec<u8> = buffer.alpha_bytes().collect();
    let pixels = alpha.len();

    // Length of the 255-run starting at each pixel, capped at the window.
    let mut run = 0usize;
    let mut found = None;
    for pixel in (0..pixels).rev() {
        run = if alpha[pixel] == SENTINEL {
            (run + 1).min(SCAN_WINDOW)
        } else {
            0
        };
        if run == SCAN_WINDOW || (run > 0 && pixel + run == pixels) {
            found = Some(pixel);
        }
    }
    found
}
