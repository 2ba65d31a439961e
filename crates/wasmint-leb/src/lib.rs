#![warn(clippy::pedantic)]

pub mod error;
pub mod leb128;
pub mod reader;

pub use error::LebError;
pub use leb128::{MAX_LEB_BYTES, decode_i32, decode_u32, encode_i32, encode_u32};
pub use reader::LebReader;
