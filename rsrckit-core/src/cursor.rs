//! Bounds-checked big-endian reader over an in-memory buffer

use crate::error::ForkError;
use crate::Result;

/// Cursor over an immutable byte buffer.
///
/// Every read consumes bytes and advances the position, or fails without
/// side effects when the buffer runs out. Multi-byte reads are big-endian,
/// the container's native order, regardless of the host. Seeking backward
/// and re-reading is allowed.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the start of `buf`
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current absolute position
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total buffer length
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes left between the position and the end of the buffer
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Move to an absolute offset; an offset one past the end is allowed
    pub fn seek_to(&mut self, offset: usize) -> Result<()> {
        if offset > self.buf.len() {
            return Err(ForkError::OffsetOutOfRange {
                offset: offset as i64,
                len: self.buf.len(),
            });
        }
        self.pos = offset;
        Ok(())
    }

    /// Skip `n` bytes
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(ForkError::TruncatedData {
                expected: n,
                actual: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Read a fixed-length byte slice
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.take(n)
    }

    /// Read a byte slice prefixed with a one-byte length
    pub fn read_len_prefixed(&mut self) -> Result<&'a [u8]> {
        let len = self.read_u8()? as usize;
        self.take(len)
    }

    /// Read one byte
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// Read a big-endian u16
    pub fn read_u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    /// Read a big-endian i16
    pub fn read_i16(&mut self) -> Result<i16> {
        let b = self.take(2)?;
        Ok(i16::from_be_bytes([b[0], b[1]]))
    }

    /// Read a big-endian u32
    pub fn read_u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }
}
