/// Maximum number of bytes a 32-bit LEB128 value can occupy.
/// ceil(32 / 7) = 5 bytes.
pub const MAX_LEB_BYTES: usize = 5;

use crate::error::LebError;

/// Decode an unsigned LEB128 value into a `u32`, starting at `*cursor`.
///
/// Each byte carries 7 data bits in its low bits; the high bit (0x80) is the
/// continuation bit. Groups are accumulated least-significant-first.
///
/// On success the cursor is advanced to one past the terminator byte (a
/// strict increase of 1–5). On failure the cursor is left unmodified.
///
/// Data bits above position 31 in a 5th byte are silently discarded: the
/// accumulate is a native 32-bit or, so an over-wide 5th group truncates
/// instead of failing. `[0xF3, 0x85, 0xFF, 0xF4, 0x7F]` therefore decodes
/// to `0xFE9F_C2F3`, not an error.
///
/// # Wire format examples
///
/// | Bytes                | Value    | Consumed |
/// |----------------------|----------|----------|
/// | `[0x00]`             | 0        | 1        |
/// | `[0x7F]`             | 127      | 1        |
/// | `[0x80, 0x01]`       | 128      | 2        |
/// | `[0x80, 0x07]`       | 0x380    | 2        |
/// | `[0x80, 0x80, 0x01]` | 16384    | 3        |
///
/// # Errors
///
/// - [`LebError::TooLong`] if 5 groups are consumed without a terminator.
/// - [`LebError::UnexpectedEof`] if the buffer ends mid-value (including a
///   call starting with the cursor already at the end).
pub fn decode_u32(buf: &[u8], cursor: &mut usize) -> Result<u32, LebError> {
    let start = *cursor;
    let mut result: u32 = 0;
    let mut shift: u32 = 0;

    for i in 0..MAX_LEB_BYTES {
        let Some(&byte) = buf.get(start + i) else {
            return Err(LebError::UnexpectedEof { offset: start + i });
        };

        // Extract the 7 data bits and shift them into position.
        // At i == 4 the shift is 28, so bits 3..7 of the byte fall off the
        // top of the u32 — that truncation is deliberate (see above).
        result |= u32::from(byte & 0x7F) << shift;
        shift += 7;

        // If MSB is clear, this is the last byte
        if byte & 0x80 == 0 {
            *cursor = start + i + 1;
            return Ok(result);
        }
    }

    // Five continuation bytes consumed and the MSB was still set
    Err(LebError::TooLong { offset: start })
}

/// Decode a signed LEB128 value into an `i32`, starting at `*cursor`.
///
/// Byte consumption is identical to [`decode_u32`] (same 5-byte limit, same
/// bounds checks, same lenient 5th-byte truncation, same cursor contract).
/// After the terminator, if its bit 6 (0x40) is set and fewer than 32 value
/// bits were consumed, the result is sign-extended: all bits above the
/// consumed width are filled with 1.
///
/// `[0x77]` decodes to `-0x9`; `[0x07]` decodes to `0x7`.
///
/// # Errors
///
/// Same two failure modes as [`decode_u32`].
pub fn decode_i32(buf: &[u8], cursor: &mut usize) -> Result<i32, LebError> {
    let start = *cursor;
    let mut result: u32 = 0;
    let mut shift: u32 = 0;

    for i in 0..MAX_LEB_BYTES {
        let Some(&byte) = buf.get(start + i) else {
            return Err(LebError::UnexpectedEof { offset: start + i });
        };

        result |= u32::from(byte & 0x7F) << shift;
        shift += 7;

        if byte & 0x80 == 0 {
            // Sign bit of the final group propagates into the bits the
            // encoding never filled in. At shift == 35 all 32 bits are
            // already set from data, so there is nothing to extend.
            if shift < 32 && byte & 0x40 != 0 {
                result |= u32::MAX << shift;
            }
            *cursor = start + i + 1;
            return Ok(result as i32);
        }
    }

    Err(LebError::TooLong { offset: start })
}

/// Encode a `u32` as unsigned LEB128 into the provided buffer.
///
/// # Returns
///
/// The number of bytes written (1–5).
///
/// # Panics
///
/// Panics if `buf` is shorter than the required encoding length.
/// A [`MAX_LEB_BYTES`]-byte buffer is always sufficient.
pub fn encode_u32(mut value: u32, buf: &mut [u8]) -> usize {
    let mut i = 0;
    loop {
        // Take the lowest 7 bits
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;

        if value > 0 {
            // More bytes to come: set the continuation bit
            byte |= 0x80;
        }

        buf[i] = byte;
        i += 1;

        if value == 0 {
            return i;
        }
    }
}

/// Encode an `i32` as signed LEB128 into the provided buffer.
///
/// Emits the minimal encoding: groups stop as soon as the remaining value
/// is pure sign bits *and* the last group's bit 6 already agrees with the
/// sign, so the decoder's sign extension reconstructs the value exactly.
///
/// # Returns
///
/// The number of bytes written (1–5).
///
/// # Panics
///
/// Panics if `buf` is shorter than the required encoding length.
/// A [`MAX_LEB_BYTES`]-byte buffer is always sufficient.
pub fn encode_i32(mut value: i32, buf: &mut [u8]) -> usize {
    let mut i = 0;
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7; // arithmetic shift: fills with the sign bit

        let done = (value == 0 && byte & 0x40 == 0) || (value == -1 && byte & 0x40 != 0);

        buf[i] = if done { byte } else { byte | 0x80 };
        i += 1;

        if done {
            return i;
        }
    }
}
