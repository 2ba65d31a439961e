/// Implementation of `wasmint encode`.
///
/// Parses the value (decimal, or hex with a `0x` prefix; negatives only
/// with `--signed`), encodes it as minimal LEB128, and prints the hex
/// bytes plus the encoded length.
///
/// # Example output
///
/// ```text
/// $ wasmint encode 300
/// ac02  (2 bytes)
///
/// $ wasmint encode -9 --signed
/// 77  (1 byte)
/// ```
use anyhow::{Context, Result, bail};
use wasmint_leb::{MAX_LEB_BYTES, encode_i32, encode_u32};

use crate::EncodeArgs;

/// Run the `wasmint encode` command.
///
/// # Errors
///
/// Returns an error if the value does not parse, is negative without
/// `--signed`, or does not fit the 32-bit range.
pub fn run(args: &EncodeArgs) -> Result<()> {
    let mut buf = [0u8; MAX_LEB_BYTES];

    let len = if args.signed {
        let value = parse_i32(&args.value)?;
        encode_i32(value, &mut buf)
    } else {
        if args.value.starts_with('-') {
            bail!("negative value {:?} requires --signed", args.value);
        }
        let value = parse_u32(&args.value)?;
        encode_u32(value, &mut buf)
    };

    println!(
        "{}  ({len} byte{})",
        hex::encode(&buf[..len]),
        if len == 1 { "" } else { "s" }
    );
    Ok(())
}

fn parse_u32(input: &str) -> Result<u32> {
    let parsed = match input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        Some(hex_digits) => u32::from_str_radix(hex_digits, 16),
        None => input.parse(),
    };
    parsed.with_context(|| format!("{input:?} is not a valid u32"))
}

fn parse_i32(input: &str) -> Result<i32> {
    let parsed = match input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        Some(hex_digits) => u32::from_str_radix(hex_digits, 16).map(|v| v as i32),
        None => input.parse(),
    };
    parsed.with_context(|| format!("{input:?} is not a valid i32"))
}
