//! Standard base64 decoding function.

use crate::constants::TABLE;
use crate::create_from_base64::{decode_table, decode_with};

static DECODE: [u8; 256] = decode_table(&TABLE);

/// Decodes a standard, padded base64 string to bytes.
///
/// # Example
///
/// ```
/// use bytecast_base64::from_base64;
///
/// let decoded = from_base64("aGVsbG8gd29ybGQ=").unwrap();
/// assert_eq!(decoded, b"hello world");
/// assert!(from_base64("aGVsbG8").is_err());
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, crate::Base64Error> {
    decode_with(&DECODE, false, encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_from_base64;

    #[test]
    fn test_matches_factory_decoder() {
        let decode = create_from_base64(None, false).unwrap();
        for encoded in ["", "Zg==", "Zm8=", "Zm9v", "+/+/", "Zm9v!"] {
            assert_eq!(from_base64(encoded), decode(encoded));
        }
    }
}
