//! Roundtrip integration tests for the encode → decode pipeline.
//!
//! Each test encodes a value with [`encode_u32`] / [`encode_i32`], decodes
//! it back, and asserts the value is reproduced exactly and that the decoder
//! consumed exactly the bytes the encoder emitted. The encoders always emit
//! the minimal encoding, so consumed length equality also pins down the
//! group-count boundaries (7, 14, 21, 28 value bits).

use wasmint_leb::{MAX_LEB_BYTES, decode_i32, decode_u32, encode_i32, encode_u32};

fn encode_unsigned(value: u32) -> Vec<u8> {
    let mut buf = [0u8; MAX_LEB_BYTES];
    let len = encode_u32(value, &mut buf);
    buf[..len].to_vec()
}

fn encode_signed(value: i32) -> Vec<u8> {
    let mut buf = [0u8; MAX_LEB_BYTES];
    let len = encode_i32(value, &mut buf);
    buf[..len].to_vec()
}

#[test]
fn unsigned_boundary_values() {
    // Each group-count boundary plus its neighbours
    let values = [
        0u32,
        1,
        127,
        128,
        255,
        256,
        16383,
        16384,
        2_097_151,
        2_097_152,
        268_435_455,
        268_435_456,
        u32::MAX - 1,
        u32::MAX,
    ];
    for &value in &values {
        let encoded = encode_unsigned(value);
        let mut cursor = 0;
        let decoded = decode_u32(&encoded, &mut cursor).unwrap();
        assert_eq!(decoded, value, "roundtrip failed for {value}");
        assert_eq!(cursor, encoded.len(), "consumed length for {value}");
    }
}

#[test]
fn unsigned_encoded_lengths() {
    assert_eq!(encode_unsigned(0).len(), 1);
    assert_eq!(encode_unsigned(127).len(), 1);
    assert_eq!(encode_unsigned(128).len(), 2);
    assert_eq!(encode_unsigned(16383).len(), 2);
    assert_eq!(encode_unsigned(16384).len(), 3);
    assert_eq!(encode_unsigned(2_097_152).len(), 4);
    assert_eq!(encode_unsigned(268_435_456).len(), 5);
    assert_eq!(encode_unsigned(u32::MAX).len(), 5);
}

#[test]
fn signed_boundary_values() {
    // Sign-extension boundaries in both directions: a signed group holds
    // 6 value bits plus the sign, so ±2^(7k-1) are the length steps
    let values = [
        0i32,
        1,
        -1,
        63,
        64,
        -64,
        -65,
        8191,
        8192,
        -8192,
        -8193,
        1_048_575,
        1_048_576,
        -1_048_576,
        -1_048_577,
        134_217_727,
        134_217_728,
        -134_217_728,
        -134_217_729,
        i32::MAX,
        i32::MIN,
    ];
    for &value in &values {
        let encoded = encode_signed(value);
        let mut cursor = 0;
        let decoded = decode_i32(&encoded, &mut cursor).unwrap();
        assert_eq!(decoded, value, "roundtrip failed for {value}");
        assert_eq!(cursor, encoded.len(), "consumed length for {value}");
    }
}

#[test]
fn signed_encoded_lengths() {
    assert_eq!(encode_signed(63).len(), 1);
    assert_eq!(encode_signed(-64).len(), 1);
    assert_eq!(encode_signed(64).len(), 2);
    assert_eq!(encode_signed(-65).len(), 2);
    assert_eq!(encode_signed(8192).len(), 3);
    assert_eq!(encode_signed(-8193).len(), 3);
    assert_eq!(encode_signed(i32::MAX).len(), 5);
    assert_eq!(encode_signed(i32::MIN).len(), 5);
}

#[test]
fn unsigned_sweep() {
    // Walk the full range with a stride that is odd and not a power of two,
    // so bytes hit varied group patterns
    let mut value = 0u32;
    loop {
        let encoded = encode_unsigned(value);
        let mut cursor = 0;
        assert_eq!(decode_u32(&encoded, &mut cursor), Ok(value));
        assert_eq!(cursor, encoded.len());

        let Some(next) = value.checked_add(0x0100_0F83) else {
            break;
        };
        value = next;
    }
}

#[test]
fn signed_sweep() {
    let mut value = i32::MIN;
    loop {
        let encoded = encode_signed(value);
        let mut cursor = 0;
        assert_eq!(decode_i32(&encoded, &mut cursor), Ok(value));
        assert_eq!(cursor, encoded.len());

        let Some(next) = value.checked_add(0x0100_0F83) else {
            break;
        };
        value = next;
    }
}

#[test]
fn decode_ignores_trailing_bytes() {
    // A decoded value embedded ahead of unrelated data consumes only itself
    let mut buf = encode_unsigned(16384);
    let value_len = buf.len();
    buf.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);

    let mut cursor = 0;
    assert_eq!(decode_u32(&buf, &mut cursor), Ok(16384));
    assert_eq!(cursor, value_len);
}
