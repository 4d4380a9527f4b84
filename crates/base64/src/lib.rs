//! Base64 encoding/decoding for bytecast.
//!
//! Two layers live here:
//!
//! - the binary codec: [`to_base64`] / [`from_base64`] and their URL-safe
//!   variants, with the [`create_to_base64`] / [`create_from_base64`]
//!   factories for custom alphabets;
//! - the text codec in [`text`]: Base64 over the UTF-8 bytes of a string,
//!   which is how byte buffers are Base64-encoded by the `bytecast` facade.
//!
//! # Example
//!
//! ```
//! use bytecast_base64::{from_base64, to_base64};
//!
//! let encoded = to_base64(b"hello");
//! assert_eq!(encoded, "aGVsbG8=");
//! assert_eq!(from_base64(&encoded).unwrap(), b"hello");
//! ```

mod constants;
mod create_from_base64;
mod create_to_base64;
mod from_base64;
mod from_base64_url;
pub mod text;
mod to_base64;

pub use constants::{ALPHABET, ALPHABET_URL, PAD};
pub use create_from_base64::create_from_base64;
pub use create_to_base64::create_to_base64;
pub use from_base64::from_base64;
pub use from_base64_url::from_base64_url;
pub use to_base64::{to_base64, to_base64_url};

use thiserror::Error;

/// Error type for Base64 operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    #[error("base64 alphabet must be exactly 64 distinct ASCII characters")]
    InvalidCharSetLength,
    #[error("padding must be a single ASCII character")]
    InvalidPadChar,
    #[error("base64 input length {0} is not valid")]
    InvalidLength(usize),
    #[error("invalid base64 character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },
    #[error("misplaced base64 padding at index {0}")]
    InvalidPadding(usize),
    #[error("decoded base64 is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}
