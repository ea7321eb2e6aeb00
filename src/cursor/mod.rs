//! Sequential byte cursors over a wire buffer.
//!
//! [`ByteWriter`] and [`ByteReader`] walk a byte slice front to back. Integer
//! fields are fixed-width little-endian with no padding. Booleans are packed
//! eight to a byte, LSB first:
//!
//! ```text
//! write_bool × 8          byte
//! [1,0,0,0,0,0,1,0]  →   0b0100_0001
//!  ^bit0         ^bit7
//! ```
//!
//! A boolean run never shares a byte with any other field: the first
//! non-bool access after a partial run skips to the next whole byte.

mod reader;
mod writer;

pub use reader::ByteReader;
pub use writer::ByteWriter;

use crate::error::{WireError, WireResult};

/// Reject `value` unless it lies in `min..=max`.
#[inline]
fn check_range(kind: &'static str, value: i128, min: i128, max: i128) -> WireResult<i128> {
    if value < min || value > max {
        return Err(WireError::Overflow {
            kind,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// Byte offset the next non-bool field starts at.
#[inline]
fn aligned(offset: usize, bit_offset: u8) -> usize {
    if bit_offset > 0 { offset + 1 } else { offset }
}

/// Bounds check shared by both cursors: `width` bytes starting at `start`.
#[inline]
fn check_capacity(len: usize, start: usize, width: usize) -> WireResult<usize> {
    match start.checked_add(width) {
        Some(end) if end <= len => Ok(end),
        _ => Err(WireError::BufferOverrun {
            offset: start,
            needed: width,
            remaining: len.saturating_sub(start),
        }),
    }
}
