//! Conversions between fixed-width numbers, byte buffers, byte arrays,
//! hexadecimal strings, Base64 strings and UTF-8 text.
//!
//! Every non-numeric conversion pivots through the byte buffer: array→base64
//! is array→buffer→base64, hex→string is hex→buffer→string, and so on.
//! Numbers are encoded big-endian at the width of their declared
//! [`NumericType`].
//!
//! All functions are pure; nothing is cached or shared between calls.
//!
//! # Example
//!
//! ```
//! use bytecast::{dec_to_hex, hex_to_dec, hex_to_string, string_to_hex, Numeric};
//!
//! assert_eq!(dec_to_hex("i8", -1).unwrap(), "ff");
//! assert_eq!(hex_to_dec("i8", "ff").unwrap(), Numeric::I8(-1));
//! assert_eq!(string_to_hex("abc"), "616263");
//! assert_eq!(hex_to_string("68656c6c6f").unwrap(), "hello");
//! ```

pub mod convert;
mod error;
pub mod numeric;

pub use convert::*;
pub use error::ConvertError;
pub use numeric::{Numeric, NumericType};

pub use bytecast_base64::Base64Error;
pub use bytecast_buffers::{BufferError, Number, TextEncoding};
