#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LebError {
    /// Five groups were consumed and the continuation bit was still set.
    /// A 32-bit value never needs more than ceil(32 / 7) = 5 bytes, so the
    /// encoding is over the limit no matter what follows.
    #[error("leb128 too long: no terminator within the 5-byte limit for a 32-bit value (started at offset {offset})")]
    TooLong { offset: usize },

    /// Input ended before a terminator byte was found.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },
}

// The {offset} each variant carries is the byte position from the start of
// the buffer: where the encoding began for TooLong, where the missing byte
// would have been for UnexpectedEof. Callers surfacing these as module-parse
// errors get a position they can point at in the binary.
