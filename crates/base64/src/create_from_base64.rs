//! Factory function for creating base64 decoders with custom alphabets.

use crate::constants::{alphabet_bytes, ALPHABET, INVALID, PAD};
use crate::Base64Error;

/// Creates a base64 decoder for a custom alphabet.
///
/// Decoding is strict: whitespace and any other character outside the
/// alphabet is rejected, and `=` may only appear as one or two trailing
/// padding characters of the last quantum.
///
/// # Arguments
///
/// * `chars` - A 64-character ASCII alphabet. Defaults to standard base64.
/// * `no_padding` - When `true`, unpadded input is accepted (missing `=` are
///   implied). Padded input is accepted either way.
///
/// # Example
///
/// ```
/// use bytecast_base64::{create_from_base64, ALPHABET_URL};
///
/// let decode = create_from_base64(Some(ALPHABET_URL), true).unwrap();
/// assert_eq!(decode("-_8").unwrap(), vec![0xfb, 0xff]);
/// ```
pub fn create_from_base64(
    chars: Option<&str>,
    no_padding: bool,
) -> Result<impl Fn(&str) -> Result<Vec<u8>, Base64Error>, Base64Error> {
    let alphabet = alphabet_bytes(chars.unwrap_or(ALPHABET))?;
    let table = decode_table(&alphabet);
    Ok(move |encoded: &str| decode_with(&table, no_padding, encoded))
}

/// Maps each byte to its sextet value, or [`INVALID`].
pub(crate) const fn decode_table(alphabet: &[u8; 64]) -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut value = 0;
    while value < 64 {
        table[alphabet[value] as usize] = value as u8;
        value += 1;
    }
    table
}

/// Decodes `encoded` with a table built by [`decode_table`].
pub(crate) fn decode_with(
    table: &[u8; 256],
    no_padding: bool,
    encoded: &str,
) -> Result<Vec<u8>, Base64Error> {
    let input = encoded.as_bytes();
    let length = input.len();
    let padded_len = if no_padding {
        if length % 4 == 1 {
            return Err(invalid_length(length));
        }
        length.div_ceil(4) * 4
    } else {
        if length % 4 != 0 {
            return Err(invalid_length(length));
        }
        length
    };

    let body_len = input
        .iter()
        .rposition(|&b| b != PAD as u8)
        .map_or(0, |i| i + 1);
    let pad_len = padded_len - body_len;
    if pad_len > 2 {
        return Err(Base64Error::InvalidPadding(body_len));
    }

    let mut out = Vec::with_capacity(padded_len / 4 * 3);
    let mut acc: u32 = 0;
    for (index, &b) in input[..body_len].iter().enumerate() {
        let value = table[b as usize];
        if value == INVALID {
            let error = if b == PAD as u8 {
                Base64Error::InvalidPadding(index)
            } else {
                Base64Error::InvalidCharacter {
                    character: encoded[index..].chars().next().unwrap_or('\u{FFFD}'),
                    index,
                }
            };
            tracing::debug!(%error, "rejected base64 input");
            return Err(error);
        }
        acc = (acc << 6) | u32::from(value);
        if index % 4 == 3 {
            out.extend_from_slice(&acc.to_be_bytes()[1..]);
            acc = 0;
        }
    }

    // Final partial quantum: 2 symbols carry one byte, 3 carry two.
    match body_len % 4 {
        2 => out.push((acc >> 4) as u8),
        3 => {
            out.push((acc >> 10) as u8);
            out.push((acc >> 2) as u8);
        }
        _ => {}
    }

    Ok(out)
}

fn invalid_length(length: usize) -> Base64Error {
    tracing::debug!(length, "rejected base64 input length");
    Base64Error::InvalidLength(length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4648_vectors() {
        let decode = create_from_base64(None, false).unwrap();
        assert_eq!(decode("").unwrap(), b"");
        assert_eq!(decode("Zg==").unwrap(), b"f");
        assert_eq!(decode("Zm8=").unwrap(), b"fo");
        assert_eq!(decode("Zm9v").unwrap(), b"foo");
        assert_eq!(decode("Zm9vYmE=").unwrap(), b"fooba");
        assert_eq!(decode("Zm9vYmFy").unwrap(), b"foobar");
    }

    #[test]
    fn test_padding_rules() {
        let decode = create_from_base64(None, false).unwrap();
        assert_eq!(decode("Zg"), Err(Base64Error::InvalidLength(2)));
        assert_eq!(decode("Zg=a"), Err(Base64Error::InvalidPadding(2)));
        assert_eq!(decode("Z==="), Err(Base64Error::InvalidPadding(1)));
        assert_eq!(decode("===="), Err(Base64Error::InvalidPadding(0)));

        let lenient = create_from_base64(None, true).unwrap();
        assert_eq!(lenient("Zg").unwrap(), b"f");
        assert_eq!(lenient("Zg==").unwrap(), b"f");
        assert_eq!(lenient("Zm9vY"), Err(Base64Error::InvalidLength(5)));
    }

    #[test]
    fn test_rejects_foreign_characters() {
        let decode = create_from_base64(None, false).unwrap();
        assert_eq!(
            decode("Zm9v Zg="),
            Err(Base64Error::InvalidCharacter {
                character: ' ',
                index: 4
            })
        );
        assert_eq!(
            decode("Zm-v"),
            Err(Base64Error::InvalidCharacter {
                character: '-',
                index: 2
            })
        );
        assert_eq!(
            decode("Zé="),
            Err(Base64Error::InvalidCharacter {
                character: 'é',
                index: 1
            })
        );
    }
}
