//! Base64 over UTF-8 text.
//!
//! Buffers handled here are treated as UTF-8 text, not as arbitrary binary:
//! the encoded payload is always the UTF-8 bytes of a valid string. For a
//! buffer that already is valid UTF-8 this is byte-for-byte the standard
//! encoding, and `base64_to_buffer(&buffer_to_base64(b)?) == b` holds. Any
//! other buffer is rejected with [`Base64Error::InvalidUtf8`] in both
//! directions. Use [`crate::to_base64`] for arbitrary binary data.

use crate::{from_base64, to_base64, Base64Error};

/// Encodes the UTF-8 bytes of `text` as standard base64.
///
/// ```
/// use bytecast_base64::text::text_to_base64;
///
/// assert_eq!(text_to_base64("hello"), "aGVsbG8=");
/// assert_eq!(text_to_base64("✓ à la mode"), "4pyTIMOgIGxhIG1vZGU=");
/// ```
pub fn text_to_base64(text: &str) -> String {
    to_base64(text.as_bytes())
}

/// Decodes standard base64 whose payload must be UTF-8 text.
///
/// ```
/// use bytecast_base64::text::base64_to_text;
/// use bytecast_base64::Base64Error;
///
/// assert_eq!(base64_to_text("4pyTIMOgIGxhIG1vZGU=").unwrap(), "✓ à la mode");
/// assert_eq!(base64_to_text("/w=="), Err(Base64Error::InvalidUtf8 { valid_up_to: 0 }));
/// ```
pub fn base64_to_text(encoded: &str) -> Result<String, Base64Error> {
    let raw = from_base64(encoded)?;
    String::from_utf8(raw).map_err(|err| {
        let valid_up_to = err.utf8_error().valid_up_to();
        tracing::debug!(valid_up_to, "base64 payload is not UTF-8");
        Base64Error::InvalidUtf8 { valid_up_to }
    })
}

/// Encodes a buffer, which must be UTF-8 text, as standard base64.
///
/// ```
/// use bytecast_base64::text::buffer_to_base64;
/// use bytecast_base64::Base64Error;
///
/// assert_eq!(buffer_to_base64("héllo".as_bytes()).unwrap(), "aMOpbGxv");
/// assert_eq!(buffer_to_base64(&[0xff]), Err(Base64Error::InvalidUtf8 { valid_up_to: 0 }));
/// ```
pub fn buffer_to_base64(buffer: &[u8]) -> Result<String, Base64Error> {
    std::str::from_utf8(buffer)
        .map(text_to_base64)
        .map_err(|err| {
            let valid_up_to = err.valid_up_to();
            tracing::debug!(valid_up_to, "buffer is not UTF-8");
            Base64Error::InvalidUtf8 { valid_up_to }
        })
}

/// Decodes standard base64 into the UTF-8 bytes of the text it carries.
///
/// ```
/// use bytecast_base64::text::base64_to_buffer;
///
/// assert_eq!(base64_to_buffer("aMOpbGxv").unwrap(), "héllo".as_bytes());
/// ```
pub fn base64_to_buffer(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    base64_to_text(encoded).map(String::into_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(text_to_base64(""), "");
        assert_eq!(base64_to_text("").unwrap(), "");
    }

    #[test]
    fn test_percent_sign_is_plain_text() {
        assert_eq!(base64_to_text(&text_to_base64("100%")).unwrap(), "100%");
        assert_eq!(base64_to_text(&text_to_base64("%41")).unwrap(), "%41");
    }

    #[test]
    fn test_invalid_utf8_position() {
        // "ab" followed by a lone continuation byte.
        let encoded = to_base64(&[0x61, 0x62, 0x80]);
        assert_eq!(
            base64_to_buffer(&encoded),
            Err(Base64Error::InvalidUtf8 { valid_up_to: 2 })
        );
    }

    #[test]
    fn test_non_utf8_buffer_is_rejected() {
        assert_eq!(
            buffer_to_base64(&[0x41, 0xff, 0xfe, 0x42]),
            Err(Base64Error::InvalidUtf8 { valid_up_to: 1 })
        );
        // Truncated multi-byte sequence at the end.
        assert_eq!(
            buffer_to_base64(&[0x61, 0xE6, 0x97]),
            Err(Base64Error::InvalidUtf8 { valid_up_to: 1 })
        );
    }

    #[test]
    fn test_malformed_base64_propagates() {
        assert_eq!(base64_to_text("abc"), Err(Base64Error::InvalidLength(3)));
    }
}
