#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: LEB128 encode->decode roundtrip.
//
// Takes 4 bytes of fuzz input, interprets them as a u32 and as an i32,
// encodes each as LEB128, then decodes and asserts the values and the
// consumed lengths match.
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let raw = u32::from_le_bytes(data[..4].try_into().unwrap());

    let mut buf = [0u8; wasmint_leb::MAX_LEB_BYTES];

    let encoded_len = wasmint_leb::encode_u32(raw, &mut buf);
    let mut cursor = 0;
    let decoded = wasmint_leb::decode_u32(&buf[..encoded_len], &mut cursor).unwrap();
    assert_eq!(decoded, raw);
    assert_eq!(cursor, encoded_len);

    let signed = raw as i32;
    let encoded_len = wasmint_leb::encode_i32(signed, &mut buf);
    let mut cursor = 0;
    let decoded = wasmint_leb::decode_i32(&buf[..encoded_len], &mut cursor).unwrap();
    assert_eq!(decoded, signed);
    assert_eq!(cursor, encoded_len);
});
