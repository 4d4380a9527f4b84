//! Byte buffer codecs for bytecast.
//!
//! The byte buffer (`Vec<u8>` / `&[u8]`) is the pivot every other
//! representation converts through. This crate holds the legs that touch
//! it directly:
//!
//! - [`Reader`] - reads big-endian fixed-width values with bounds checks
//! - [`Writer`] - appends big-endian fixed-width values to a growing buffer
//! - [`Number`] - integer or float input, wrapped to fixed widths
//! - [`to_array`] / [`from_array`] - buffer ↔ byte array
//! - [`to_hex`] / [`from_hex`] - buffer ↔ lowercase hex string
//! - [`to_text`] / [`utf8`] - buffer ↔ UTF-8 text
//!
//! # Example
//!
//! ```
//! use bytecast_buffers::{from_hex, to_hex, Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.i16(-2);
//! let data = writer.flush();
//! assert_eq!(to_hex(&data), "01fffe");
//!
//! let bytes = from_hex("0x01fffe").unwrap();
//! let mut reader = Reader::new(&bytes);
//! assert_eq!(reader.u8().unwrap(), 0x01);
//! assert_eq!(reader.i16().unwrap(), -2);
//! ```

mod array;
mod hex_string;
mod number;
mod reader;
mod strings;
mod writer;

pub use array::{from_array, to_array};
pub use hex_string::{from_hex, strip_hex_prefix, to_hex};
pub use number::Number;
pub use reader::Reader;
pub use strings::{to_text, to_text_with, utf8, TextEncoding};
pub use writer::Writer;

use thiserror::Error;

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    #[error("end of buffer: needed {needed} bytes, {remaining} remaining")]
    EndOfBuffer { needed: usize, remaining: usize },
    /// Hex input has an odd number of digits.
    #[error("hex string has odd length")]
    OddHexLength,
    /// Hex input contains a character that is not a hex digit.
    #[error("invalid hex character {character:?} at index {index}")]
    InvalidHexCharacter { character: char, index: usize },
    /// Text encoding label is not one this crate can decode.
    #[error("unsupported text encoding `{0}`")]
    UnsupportedEncoding(String),
}
