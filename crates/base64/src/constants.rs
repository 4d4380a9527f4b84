/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL-safe base64 alphabet (uses - and _ instead of + and /).
pub const ALPHABET_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Padding character.
pub const PAD: char = '=';

/// Standard alphabet as a lookup table.
pub(crate) const TABLE: [u8; 64] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL-safe alphabet as a lookup table.
pub(crate) const TABLE_URL: [u8; 64] =
    *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Marks a byte that is not part of the alphabet in a decode table.
pub(crate) const INVALID: u8 = 0xFF;

/// Validates an alphabet and returns its symbols as bytes.
pub(crate) fn alphabet_bytes(chars: &str) -> Result<[u8; 64], crate::Base64Error> {
    let bytes = chars.as_bytes();
    if bytes.len() != 64 || !chars.is_ascii() {
        return Err(crate::Base64Error::InvalidCharSetLength);
    }
    let mut seen = [false; 128];
    let mut table = [0u8; 64];
    for (i, &b) in bytes.iter().enumerate() {
        if seen[b as usize] {
            return Err(crate::Base64Error::InvalidCharSetLength);
        }
        seen[b as usize] = true;
        table[i] = b;
    }
    Ok(table)
}
