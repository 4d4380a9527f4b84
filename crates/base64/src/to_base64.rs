//! Standard and URL-safe base64 encoding functions.

use crate::constants::{PAD, TABLE, TABLE_URL};
use crate::create_to_base64::encode_with;

/// Encodes bytes as standard, padded base64.
///
/// # Example
///
/// ```
/// use bytecast_base64::to_base64;
///
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(uint8: &[u8]) -> String {
    encode_with(&TABLE, Some(PAD), uint8)
}

/// Encodes bytes as URL-safe base64 without padding.
///
/// # Example
///
/// ```
/// use bytecast_base64::to_base64_url;
///
/// assert_eq!(to_base64_url(&[0xfb, 0xff]), "-_8");
/// ```
pub fn to_base64_url(uint8: &[u8]) -> String {
    encode_with(&TABLE_URL, None, uint8)
}
