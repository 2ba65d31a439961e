/// Implementation of `wasmint decode`.
///
/// Parses the hex input into bytes, then decodes one LEB128 value starting
/// at `--offset` (or, with `--all`, successive values until the end of the
/// input) and prints each value with the byte range it occupied.
///
/// # Example output
///
/// ```text
/// $ wasmint decode f385ff74 --signed
/// -23084301 (0xfe9fc2f3)  bytes 0..4  (4 consumed)
///
/// $ wasmint decode 03ac02 --all
/// 3 (0x3)  bytes 0..1  (1 consumed)
/// 300 (0x12c)  bytes 1..3  (2 consumed)
/// ```
use anyhow::{Context, Result, bail};
use wasmint_leb::LebReader;

use crate::DecodeArgs;

/// Run the `wasmint decode` command.
///
/// # Errors
///
/// Returns an error if the hex string is malformed, the offset lies past
/// the end of the input, or any decode fails (too long / truncated).
pub fn run(args: &DecodeArgs) -> Result<()> {
    let bytes = parse_hex(&args.hex)?;

    if args.offset > bytes.len() {
        bail!(
            "offset {} is past the end of the input ({} bytes)",
            args.offset,
            bytes.len()
        );
    }

    let mut reader = LebReader::at_offset(&bytes, args.offset);

    loop {
        let start = reader.position();

        if args.signed {
            let value = reader
                .read_i32()
                .with_context(|| format!("decoding signed value at offset {start}"))?;
            print_value(i64::from(value), value as u32, start, reader.position());
        } else {
            let value = reader
                .read_u32()
                .with_context(|| format!("decoding unsigned value at offset {start}"))?;
            print_value(i64::from(value), value, start, reader.position());
        }

        if !args.all || reader.is_at_end() {
            return Ok(());
        }
    }
}

fn print_value(display: i64, raw: u32, start: usize, end: usize) {
    println!(
        "{display} ({raw:#x})  bytes {start}..{end}  ({} consumed)",
        end - start
    );
}

/// Parse a hex string (optional `0x` prefix, case-insensitive) into bytes.
fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let stripped = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    hex::decode(stripped).with_context(|| format!("invalid hex input {input:?}"))
}
