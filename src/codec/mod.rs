//! The alpha-channel codec.
//!
//! - [`bits`]: LSB-first bit cursors
//! - [`packer`]: code units <-> `t`-bit symbols
//! - [`shares`]: threshold polynomial share bytes
//! - [`terminator`]: end-of-payload sentinel run
//! - [`capacity`]: how many code units an image holds

pub mod bits;
pub mod capacity;
pub mod packer;
pub mod shares;
pub mod terminator;

pub use bits::{BitReader, BitWriter};
pub use capacity::capacity;
pub use packer::{pack, symbol_count, unpack};
pub use shares::{decode_shares, encode_shares, share_floor, write_shares};
pub use terminator::{append_terminator, scan_terminator, SCAN_WINDOW, SENTINEL};
