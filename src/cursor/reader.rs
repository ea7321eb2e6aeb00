//! Bounds-checked sequential reader.

use super::{aligned, check_capacity};
use crate::error::{WireError, WireResult};

/// Reads fields front to back out of a borrowed byte slice.
///
/// Mirrors [`ByteWriter`](super::ByteWriter) field for field, including the
/// skip to a whole byte after a partial boolean run.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    offset: usize,
    bit_offset: u8,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self::at(buf, 0)
    }

    /// Reader positioned at `offset` bytes into `buf`.
    pub fn at(buf: &'a [u8], offset: usize) -> Self {
        Self {
            buf,
            offset,
            bit_offset: 0,
        }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(aligned(self.offset, self.bit_offset))
    }

    /// Fail unless `width` whole bytes remain at the next aligned offset.
    pub fn ensure(&self, width: usize) -> WireResult<()> {
        check_capacity(self.buf.len(), aligned(self.offset, self.bit_offset), width).map(|_| ())
    }

    pub fn read_bool(&mut self) -> WireResult<bool> {
        let Some(&byte) = self.buf.get(self.offset) else {
            return Err(WireError::BufferOverrun {
                offset: self.offset,
                needed: 1,
                remaining: 0,
            });
        };

        let value = byte & (1 << self.bit_offset) != 0;
        self.bit_offset += 1;
        if self.bit_offset == 8 {
            self.offset += 1;
            self.bit_offset = 0;
        }
        Ok(value)
    }

    pub fn read_u8(&mut self) -> WireResult<u8> {
        Ok(self.take::<1>()?[0])
    }

    pub fn read_u16(&mut self) -> WireResult<u16> {
        Ok(u16::from_le_bytes(self.take()?))
    }

    pub fn read_u32(&mut self) -> WireResult<u32> {
        Ok(u32::from_le_bytes(self.take()?))
    }

    pub fn read_i64(&mut self) -> WireResult<i64> {
        Ok(i64::from_le_bytes(self.take()?))
    }

    pub fn read_f64(&mut self) -> WireResult<f64> {
        Ok(f64::from_le_bytes(self.take()?))
    }

    /// Length-prefixed UTF-8, as written by
    /// [`ByteWriter::write_string`](super::ByteWriter::write_string).
    pub fn read_string(&mut self) -> WireResult<String> {
        let len = self.read_u32()? as usize;
        let start = self.offset;
        let end = check_capacity(self.buf.len(), start, len)?;

        let text = std::str::from_utf8(&self.buf[start..end]).map_err(|_| WireError::InvalidUtf8)?;
        self.offset = end;
        Ok(text.to_owned())
    }

    /// Next `N` bytes at the aligned offset.
    fn take<const N: usize>(&mut self) -> WireResult<[u8; N]> {
        let start = aligned(self.offset, self.bit_offset);
        let end = check_capacity(self.buf.len(), start, N)?;

        let mut out = [0u8; N];
        out.copy_from_slice(&self.buf[start..end]);
        self.offset = end;
        self.bit_offset = 0;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_bool_lsb_first() {
        let buf = [0b0100_0001u8, 0b0000_0001];
        let mut reader = ByteReader::new(&buf);
        let bits: Vec<bool> = (0..9).map(|_| reader.read_bool().unwrap()).collect();
        assert_eq!(
            bits,
            [true, false, false, false, false, false, true, false, true]
        );
        assert_eq!(reader.offset(), 1);
    }

    #[test]
    fn test_read_integers_little_endian() {
        let buf = [
            0x40, // u8
            0xf4, 0x01, // u16 500
            0x04, 0x03, 0x02, 0x01, // u32
            0xf0, 0xd8, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, // i64 -10000
        ];
        let mut reader = ByteReader::new(&buf);
        assert_eq!(reader.read_u8().unwrap(), 0x40);
        assert_eq!(reader.read_u16().unwrap(), 500);
        assert_eq!(reader.read_u32().unwrap(), 0x0102_0304);
        assert_eq!(reader.read_i64().unwrap(), -10_000);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_read_past_end() {
        let buf = [1u8, 2, 3];
        let mut reader = ByteReader::new(&buf);
        reader.read_u8().unwrap();
        assert_eq!(
            reader.read_u32(),
            Err(WireError::BufferOverrun {
                offset: 1,
                needed: 4,
                remaining: 2
            })
        );
        assert_eq!(reader.offset(), 1);
        assert_eq!(reader.read_u16().unwrap(), 0x0302);
        assert!(reader.read_bool().is_err());
    }

    #[test]
    fn test_read_skips_partial_bool_byte() {
        let buf = [0b0000_0001u8, 7];
        let mut reader = ByteReader::new(&buf);
        assert!(reader.read_bool().unwrap());
        assert_eq!(reader.read_u8().unwrap(), 7);
    }

    #[test]
    fn test_read_f64() {
        let buf = 0.5f64.to_le_bytes();
        let mut reader = ByteReader::new(&buf);
        assert_eq!(reader.read_f64().unwrap(), 0.5);
    }

    #[test]
    fn test_read_string_rejects_bad_input() {
        let truncated = [5u8, 0, 0, 0, b'a'];
        assert!(matches!(
            ByteReader::new(&truncated).read_string(),
            Err(WireError::BufferOverrun { .. })
        ));

        let invalid = [2u8, 0, 0, 0, 0xff, 0xfe];
        assert_eq!(
            ByteReader::new(&invalid).read_string(),
            Err(WireError::InvalidUtf8)
        );
    }
}
