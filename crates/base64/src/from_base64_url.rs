//! URL-safe base64 decoding function.

use crate::constants::TABLE_URL;
use crate::create_from_base64::{decode_table, decode_with};

static DECODE_URL: [u8; 256] = decode_table(&TABLE_URL);

/// Decodes a URL-safe base64 string to bytes.
///
/// This expects the URL-safe alphabet (`-` and `_` instead of `+` and `/`)
/// and accepts input with or without padding.
///
/// # Example
///
/// ```
/// use bytecast_base64::from_base64_url;
///
/// let decoded = from_base64_url("aGVsbG8gd29ybGQ").unwrap();
/// assert_eq!(decoded, b"hello world");
/// ```
pub fn from_base64_url(encoded: &str) -> Result<Vec<u8>, crate::Base64Error> {
    decode_with(&DECODE_URL, true, encoded)
}
