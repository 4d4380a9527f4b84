//! Buffer ↔ lowercase hexadecimal string.

use crate::BufferError;

/// Removes one leading `0x` or `0X`, if present.
///
/// ```
/// use bytecast_buffers::strip_hex_prefix;
///
/// assert_eq!(strip_hex_prefix("0xff"), "ff");
/// assert_eq!(strip_hex_prefix("0X0xff"), "0xff");
/// assert_eq!(strip_hex_prefix("ff"), "ff");
/// ```
pub fn strip_hex_prefix(hex: &str) -> &str {
    hex.strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex)
}

/// Formats a buffer as two lowercase hex digits per byte, no separators.
///
/// ```
/// use bytecast_buffers::to_hex;
///
/// assert_eq!(to_hex(&[0x00, 0x0a, 0xff]), "000aff");
/// assert_eq!(to_hex(&[]), "");
/// ```
pub fn to_hex(buffer: &[u8]) -> String {
    hex::encode(buffer)
}

/// Decodes a hex string into a buffer, most significant byte first.
///
/// An optional `0x`/`0X` prefix is stripped. Digits may be either case.
/// Malformed input is rejected rather than partially decoded; a reported
/// character index is relative to the digits after the prefix.
///
/// ```
/// use bytecast_buffers::{from_hex, BufferError};
///
/// assert_eq!(from_hex("0x68656C6c6f").unwrap(), b"hello".to_vec());
/// assert_eq!(from_hex("abc"), Err(BufferError::OddHexLength));
/// ```
pub fn from_hex(hex: &str) -> Result<Vec<u8>, BufferError> {
    let digits = strip_hex_prefix(hex);
    hex::decode(digits).map_err(|err| {
        tracing::debug!(input_len = hex.len(), error = %err, "rejected hex input");
        match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                BufferError::InvalidHexCharacter {
                    character: c,
                    index,
                }
            }
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                BufferError::OddHexLength
            }
        }
    })
}
