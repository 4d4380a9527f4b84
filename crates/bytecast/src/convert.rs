//! Named conversions between every pair of representations.
//!
//! Non-numeric conversions go through the byte buffer. Hex inputs accept an
//! optional `0x` prefix. Base64 conversions carry UTF-8 text, so a buffer
//! that is not valid UTF-8 is rejected on the way to or from Base64.

use bytecast_base64::text;
use bytecast_buffers::{self as buffers, Number, TextEncoding};

use crate::{ConvertError, Numeric, NumericType};

/// Hex encoding of `value` as the numeric type named by `tag`.
///
/// ```
/// use bytecast::{dec_to_hex, ConvertError};
///
/// assert_eq!(dec_to_hex("u8", 255).unwrap(), "ff");
/// assert_eq!(dec_to_hex("u16", 65536).unwrap(), "0000");
/// assert_eq!(dec_to_hex("u64", u64::MAX).unwrap(), "ffffffffffffffff");
/// assert_eq!(
///     dec_to_hex("bogus", 1),
///     Err(ConvertError::UnsupportedType("bogus".to_string()))
/// );
/// ```
pub fn dec_to_hex(tag: &str, value: impl Into<Number>) -> Result<String, ConvertError> {
    let ty: NumericType = tag.parse()?;
    Ok(buffers::to_hex(&ty.encode(value)))
}

/// Value of `hex` read as the numeric type named by `tag`.
pub fn hex_to_dec(tag: &str, hex: &str) -> Result<Numeric, ConvertError> {
    tag.parse::<NumericType>()?.decode(hex)
}

// Buffer

pub fn buffer_to_array(buffer: &[u8]) -> Vec<i64> {
    buffers::to_array(buffer)
}

pub fn buffer_to_hex(buffer: &[u8]) -> String {
    buffers::to_hex(buffer)
}

/// Base64 of the buffer read as UTF-8 text.
///
/// ```
/// use bytecast::{buffer_to_base64, Base64Error, ConvertError};
///
/// assert_eq!(buffer_to_base64(b"hi").unwrap(), "aGk=");
/// assert_eq!(
///     buffer_to_base64(&[0x41, 0xff]),
///     Err(ConvertError::Base64(Base64Error::InvalidUtf8 { valid_up_to: 1 }))
/// );
/// ```
pub fn buffer_to_base64(buffer: &[u8]) -> Result<String, ConvertError> {
    Ok(text::buffer_to_base64(buffer)?)
}

/// UTF-8 decode, replacing malformed sequences with U+FFFD.
pub fn buffer_to_string(buffer: &[u8]) -> String {
    buffers::to_text(buffer)
}

/// Decodes with the encoding named by `encoding` (e.g. `"utf-16le"`).
///
/// ```
/// use bytecast::buffer_to_string_with;
///
/// assert_eq!(buffer_to_string_with(&[0x00, 0x41], "utf-16be").unwrap(), "A");
/// assert!(buffer_to_string_with(b"A", "ebcdic").is_err());
/// ```
pub fn buffer_to_string_with(buffer: &[u8], encoding: &str) -> Result<String, ConvertError> {
    let encoding: TextEncoding = encoding.parse()?;
    Ok(buffers::to_text_with(buffer, encoding))
}

// Array

/// Packs numbers into bytes; out-of-range elements wrap like a `u8` encode.
pub fn array_to_buffer<T>(array: &[T]) -> Vec<u8>
where
    T: Copy + Into<Number>,
{
    buffers::from_array(array)
}

pub fn array_to_hex<T>(array: &[T]) -> String
where
    T: Copy + Into<Number>,
{
    buffer_to_hex(&array_to_buffer(array))
}

pub fn array_to_base64<T>(array: &[T]) -> Result<String, ConvertError>
where
    T: Copy + Into<Number>,
{
    buffer_to_base64(&array_to_buffer(array))
}

pub fn array_to_string<T>(array: &[T]) -> String
where
    T: Copy + Into<Number>,
{
    buffer_to_string(&array_to_buffer(array))
}

// Hex

/// Strict decode: odd length or a non-hex character is an error.
pub fn hex_to_buffer(hex: &str) -> Result<Vec<u8>, ConvertError> {
    Ok(buffers::from_hex(hex)?)
}

pub fn hex_to_array(hex: &str) -> Result<Vec<i64>, ConvertError> {
    hex_to_buffer(hex).map(|buffer| buffer_to_array(&buffer))
}

pub fn hex_to_base64(hex: &str) -> Result<String, ConvertError> {
    buffer_to_base64(&hex_to_buffer(hex)?)
}

pub fn hex_to_string(hex: &str) -> Result<String, ConvertError> {
    hex_to_buffer(hex).map(|buffer| buffer_to_string(&buffer))
}

// Base64

/// Fails on malformed base64 and on payloads that are not UTF-8.
pub fn base64_to_buffer(base64: &str) -> Result<Vec<u8>, ConvertError> {
    Ok(text::base64_to_buffer(base64)?)
}

pub fn base64_to_array(base64: &str) -> Result<Vec<i64>, ConvertError> {
    base64_to_buffer(base64).map(|buffer| buffer_to_array(&buffer))
}

pub fn base64_to_hex(base64: &str) -> Result<String, ConvertError> {
    base64_to_buffer(base64).map(|buffer| buffer_to_hex(&buffer))
}

pub fn base64_to_string(base64: &str) -> Result<String, ConvertError> {
    Ok(text::base64_to_text(base64)?)
}

// String

pub fn string_to_buffer(string: &str) -> Vec<u8> {
    buffers::utf8(string)
}

pub fn string_to_array(string: &str) -> Vec<i64> {
    buffer_to_array(string.as_bytes())
}

pub fn string_to_hex(string: &str) -> String {
    buffer_to_hex(string.as_bytes())
}

pub fn string_to_base64(string: &str) -> String {
    text::text_to_base64(string)
}
