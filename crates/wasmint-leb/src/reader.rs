use crate::error::LebError;
use crate::leb128::{decode_i32, decode_u32};

/// A borrowing cursor over a byte buffer for reading successive LEB128
/// values — the shape a module parser wants when walking section lengths,
/// counts, and immediates out of one buffer.
///
/// The reader never owns or mutates the buffer; it only tracks a position.
/// A failed read leaves the position where it was, so the caller can report
/// the offset of the bad encoding.
#[derive(Debug, Clone, Copy)]
pub struct LebReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> LebReader<'a> {
    /// Create a reader positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Create a reader positioned at `offset` into `buf`.
    pub fn at_offset(buf: &'a [u8], offset: usize) -> Self {
        Self { buf, pos: offset }
    }

    /// Current byte offset into the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the position and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// Whether the position has reached the end of the buffer.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Read one unsigned LEB128 value, advancing the position past it.
    ///
    /// # Errors
    ///
    /// Propagates [`decode_u32`] failures; the position is unchanged.
    pub fn read_u32(&mut self) -> Result<u32, LebError> {
        decode_u32(self.buf, &mut self.pos)
    }

    /// Read one signed LEB128 value, advancing the position past it.
    ///
    /// # Errors
    ///
    /// Propagates [`decode_i32`] failures; the position is unchanged.
    pub fn read_i32(&mut self) -> Result<i32, LebError> {
        decode_i32(self.buf, &mut self.pos)
    }
}
