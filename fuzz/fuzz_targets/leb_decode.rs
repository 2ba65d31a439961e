#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

// Fuzz target: decode arbitrary bytes at an arbitrary starting offset.
//
// Asserts the decoder never panics and that the cursor contract holds:
// advanced 1-5 bytes past a terminator on success, untouched on failure.
// Signed decoding consumes exactly the same bytes and succeeds on exactly
// the same inputs as unsigned.
#[derive(Arbitrary, Debug)]
struct DecodeInput {
    buf: Vec<u8>,
    start_sel: u8,
}

fuzz_target!(|input: DecodeInput| {
    let buf = &input.buf;
    let start = if buf.is_empty() {
        0
    } else {
        usize::from(input.start_sel) % (buf.len() + 1)
    };

    let mut cursor = start;
    let unsigned_ok = wasmint_leb::decode_u32(buf, &mut cursor).is_ok();
    if unsigned_ok {
        let consumed = cursor - start;
        assert!((1..=wasmint_leb::MAX_LEB_BYTES).contains(&consumed));
        // The last consumed byte must be a terminator
        assert_eq!(buf[cursor - 1] & 0x80, 0);
    } else {
        assert_eq!(cursor, start);
    }

    let mut signed_cursor = start;
    let signed_ok = wasmint_leb::decode_i32(buf, &mut signed_cursor).is_ok();
    assert_eq!(signed_ok, unsigned_ok);
    assert_eq!(signed_cursor, cursor);
});
