/// `wasmint` command-line tool — encode and decode the LEB128 variable-length
/// integers used by the WebAssembly binary format.
///
/// # Command overview
///
/// ```text
/// wasmint <COMMAND> [OPTIONS]
///
/// Commands:
///   decode     Decode LEB128 value(s) from hex-encoded bytes
///   encode     Encode an integer as LEB128, printing the hex bytes
///   help       Print help information
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                    |
/// |------|--------------------------------------------|
/// | 0    | Success                                    |
/// | 1    | Error (bad hex, bad encoding, bad value)   |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::process;

use clap::{Parser, Subcommand};

mod cmd_decode;
mod cmd_encode;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The wasmint LEB128 command-line tool.
#[derive(Parser)]
#[command(name = "wasmint", version, about = "WebAssembly LEB128 integer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode LEB128 value(s) from hex-encoded bytes.
    Decode(DecodeArgs),
    /// Encode an integer as LEB128, printing the hex bytes.
    Encode(EncodeArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `wasmint decode`.
///
/// Takes the input bytes as a hex string (`"f385ff74"`, case-insensitive,
/// an optional `0x` prefix is allowed) and decodes one value starting at
/// `--offset` (default 0), printing the value, the bytes consumed, and the
/// final offset.
///
/// ```text
/// ┌──────────┬─────────────────────────────────────────────────────────┐
/// │ Flag     │ Effect                                                  │
/// ├──────────┼─────────────────────────────────────────────────────────┤
/// │ --signed │ Decode as signed (sign-extended) instead of unsigned    │
/// │ --offset │ Start decoding at this byte offset (default 0)          │
/// │ --all    │ Keep decoding values until the end of the input         │
/// └──────────┴─────────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Hex-encoded input bytes (e.g. `f385ff74` or `0x8007`).
    pub hex: String,

    /// Decode as a signed (sign-extended) value.
    #[arg(long)]
    pub signed: bool,

    /// Byte offset to start decoding at.
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Decode successive values until the end of the input.
    #[arg(long)]
    pub all: bool,
}

/// Arguments for `wasmint encode`.
///
/// Takes a decimal or `0x`-prefixed hex integer and prints its minimal
/// LEB128 encoding as hex bytes plus the encoded length.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// The value to encode (decimal, or hex with a `0x` prefix).
    pub value: String,

    /// Encode as a signed value (accepts negatives like `-9`).
    #[arg(long)]
    pub signed: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Encode(args) => cmd_encode::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
