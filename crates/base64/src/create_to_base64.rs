//! Factory function for creating base64 encoders with custom alphabets.

use crate::constants::{alphabet_bytes, ALPHABET};
use crate::Base64Error;

/// Creates a base64 encoder with a custom alphabet and padding character.
///
/// # Arguments
///
/// * `chars` - A 64-character ASCII alphabet. Defaults to standard base64.
/// * `pad` - The padding character. Defaults to `"="`. Use `""` for no padding.
///
/// # Errors
///
/// Returns an error if `chars` is not 64 distinct ASCII characters, or if
/// `pad` is longer than one ASCII character.
///
/// # Example
///
/// ```
/// use bytecast_base64::create_to_base64;
///
/// let encode = create_to_base64(None, None).unwrap();
/// assert_eq!(encode(b"hello"), "aGVsbG8=");
///
/// let encode_bare = create_to_base64(None, Some("")).unwrap();
/// assert_eq!(encode_bare(b"hello"), "aGVsbG8");
/// ```
pub fn create_to_base64(
    chars: Option<&str>,
    pad: Option<&str>,
) -> Result<impl Fn(&[u8]) -> String, Base64Error> {
    let table = alphabet_bytes(chars.unwrap_or(ALPHABET))?;
    let pad = match pad.unwrap_or("=").as_bytes() {
        [] => None,
        [p] if p.is_ascii() => Some(char::from(*p)),
        _ => return Err(Base64Error::InvalidPadChar),
    };

    Ok(move |uint8: &[u8]| encode_with(&table, pad, uint8))
}

/// Encodes `uint8` with a validated alphabet table.
pub(crate) fn encode_with(table: &[u8; 64], pad: Option<char>, uint8: &[u8]) -> String {
    let symbol = |sextet: u32| char::from(table[(sextet & 0b11_1111) as usize]);
    let mut out = String::with_capacity(uint8.len().div_ceil(3) * 4);

    let chunks = uint8.chunks_exact(3);
    let rest = chunks.remainder();
    for chunk in chunks {
        let n = (u32::from(chunk[0]) << 16) | (u32::from(chunk[1]) << 8) | u32::from(chunk[2]);
        out.push(symbol(n >> 18));
        out.push(symbol(n >> 12));
        out.push(symbol(n >> 6));
        out.push(symbol(n));
    }

    match *rest {
        [o1] => {
            let n = u32::from(o1) << 16;
            out.push(symbol(n >> 18));
            out.push(symbol(n >> 12));
            if let Some(p) = pad {
                out.push(p);
                out.push(p);
            }
        }
        [o1, o2] => {
            let n = (u32::from(o1) << 16) | (u32::from(o2) << 8);
            out.push(symbol(n >> 18));
            out.push(symbol(n >> 12));
            out.push(symbol(n >> 6));
            if let Some(p) = pad {
                out.push(p);
            }
        }
        _ => {}
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4648_vectors() {
        let encode = create_to_base64(None, None).unwrap();
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"f"), "Zg==");
        assert_eq!(encode(b"fo"), "Zm8=");
        assert_eq!(encode(b"foo"), "Zm9v");
        assert_eq!(encode(b"foob"), "Zm9vYg==");
        assert_eq!(encode(b"fooba"), "Zm9vYmE=");
        assert_eq!(encode(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_rejects_bad_alphabet() {
        assert!(matches!(
            create_to_base64(Some("abc"), None),
            Err(Base64Error::InvalidCharSetLength)
        ));
        let repeated = "A".repeat(64);
        assert!(matches!(
            create_to_base64(Some(&repeated), None),
            Err(Base64Error::InvalidCharSetLength)
        ));
        assert!(matches!(
            create_to_base64(None, Some("==")),
            Err(Base64Error::InvalidPadChar)
        ));
    }
}
