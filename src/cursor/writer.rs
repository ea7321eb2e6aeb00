//! Bounds-checked sequential writer.

use super::{aligned, check_capacity, check_range};
use crate::error::{WireError, WireResult};

/// Writes fields front to back into a borrowed byte slice.
///
/// Integer writers take any value convertible to `i128` and reject it with
/// [`WireError::Overflow`] if it does not fit the field. Range and capacity
/// checks both run before a byte is touched.
#[derive(Debug)]
pub struct ByteWriter<'a> {
    buf: &'a mut [u8],
    offset: usize,
    bit_offset: u8,
}

impl<'a> ByteWriter<'a> {
    /// Writer positioned at the start of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self::at(buf, 0)
    }

    /// Writer positioned at `offset` bytes into `buf`.
    ///
    /// An offset past the end is allowed; the first write reports the overrun.
    pub fn at(buf: &'a mut [u8], offset: usize) -> Self {
        Self {
            buf,
            offset,
            bit_offset: 0,
        }
    }

    /// Current byte offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bit position inside the current byte (0 unless mid boolean run).
    #[inline]
    pub fn bit_offset(&self) -> u8 {
        self.bit_offset
    }

    /// Whole bytes still available to the next non-bool field.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(aligned(self.offset, self.bit_offset))
    }

    /// Fail unless `width` whole bytes fit at the next aligned offset.
    ///
    /// Lets a caller check a multi-field run up front so it lands whole.
    pub fn ensure(&self, width: usize) -> WireResult<()> {
        check_capacity(self.buf.len(), aligned(self.offset, self.bit_offset), width).map(|_| ())
    }

    // =========================================================================
    // BOOLEANS
    // =========================================================================

    /// Set or clear the next bit. Rolls to the next byte after bit 7.
    ///
    /// The bit is written explicitly in both directions, so a reused buffer
    /// needs no zeroing between ticks.
    pub fn write_bool(&mut self, value: bool) -> WireResult<()> {
        if self.offset >= self.buf.len() {
            return Err(WireError::BufferOverrun {
                offset: self.offset,
                needed: 1,
                remaining: 0,
            });
        }

        let mask = 1u8 << self.bit_offset;
        if value {
            self.buf[self.offset] |= mask;
        } else {
            self.buf[self.offset] &= !mask;
        }

        self.bit_offset += 1;
        if self.bit_offset == 8 {
            self.offset += 1;
            self.bit_offset = 0;
        }
        Ok(())
    }

    /// Clear the unused high bits of a partial boolean byte and step past it.
    ///
    /// No-op when not mid run. Ends a segment so a reused buffer carries no
    /// stale bits after its last boolean.
    pub fn pad_to_byte(&mut self) {
        if self.bit_offset == 0 {
            return;
        }
        if let Some(byte) = self.buf.get_mut(self.offset) {
            *byte &= (1u8 << self.bit_offset) - 1;
        }
        self.offset += 1;
        self.bit_offset = 0;
    }

    // =========================================================================
    // INTEGERS
    // =========================================================================

    pub fn write_u8(&mut self, value: impl Into<i128>) -> WireResult<()> {
        let value = check_range("byte", value.into(), 0, u8::MAX as i128)?;
        self.put(&[value as u8])
    }

    pub fn write_u16(&mut self, value: impl Into<i128>) -> WireResult<()> {
        let value = check_range("ushort", value.into(), 0, u16::MAX as i128)?;
        self.put(&(value as u16).to_le_bytes())
    }

    pub fn write_u32(&mut self, value: impl Into<i128>) -> WireResult<()> {
        let value = check_range("uint", value.into(), 0, u32::MAX as i128)?;
        self.put(&(value as u32).to_le_bytes())
    }

    /// Symmetric range: `i64::MIN` is rejected so every value has a negation.
    pub fn write_i64(&mut self, value: impl Into<i128>) -> WireResult<()> {
        let value = check_range("int64", value.into(), -(i64::MAX as i128), i64::MAX as i128)?;
        self.put(&(value as i64).to_le_bytes())
    }

    pub fn write_f64(&mut self, value: f64) -> WireResult<()> {
        self.put(&value.to_le_bytes())
    }

    /// Alias for [`write_u8`](Self::write_u8).
    #[inline]
    pub fn write_byte(&mut self, value: impl Into<i128>) -> WireResult<()> {
        self.write_u8(value)
    }

    // =========================================================================
    // STRINGS
    // =========================================================================

    /// Length-prefixed UTF-8: `u32` byte length, then the bytes.
    ///
    /// Capacity for prefix and body is checked up front, so a string that
    /// does not fit leaves the buffer untouched.
    pub fn write_string(&mut self, value: &str) -> WireResult<()> {
        let bytes = value.as_bytes();
        let len = bytes.len() as i128;
        check_range("uint", len, 0, u32::MAX as i128)?;
        self.ensure(4 + bytes.len())?;

        self.write_u32(len)?;
        self.put(bytes)
    }

    // =========================================================================
    // LOW-LEVEL
    // =========================================================================

    /// Copy `bytes` at the next aligned offset and advance past them.
    fn put(&mut self, bytes: &[u8]) -> WireResult<()> {
        let start = aligned(self.offset, self.bit_offset);
        let end = check_capacity(self.buf.len(), start, bytes.len())?;

        self.buf[start..end].copy_from_slice(bytes);
        self.offset = end;
        self.bit_offset = 0;
        Ok(())
    }
}
