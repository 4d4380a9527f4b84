//! Buffer ↔ text string conversion.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::BufferError;

/// Text encodings a buffer can be decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl TextEncoding {
    /// Canonical label, as accepted by [`FromStr`].
    pub fn label(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf16Le => "utf-16le",
            TextEncoding::Utf16Be => "utf-16be",
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TextEncoding {
    type Err = BufferError;

    /// Parses an encoding label, ignoring case and surrounding whitespace.
    /// A bare `utf-16` means little-endian.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" | "unicode-1-1-utf-8" => Ok(TextEncoding::Utf8),
            "utf-16le" | "utf-16" => Ok(TextEncoding::Utf16Le),
            "utf-16be" => Ok(TextEncoding::Utf16Be),
            _ => Err(BufferError::UnsupportedEncoding(label.to_string())),
        }
    }
}

/// Converts a string to a vector of UTF-8 bytes.
///
/// # Example
///
/// ```
/// use bytecast_buffers::utf8;
///
/// assert_eq!(utf8("hello"), b"hello".to_vec());
/// assert_eq!(utf8("日本"), vec![0xE6, 0x97, 0xA5, 0xE6, 0x9C, 0xAC]);
/// ```
pub fn utf8(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

/// Decodes a buffer as UTF-8.
///
/// Malformed sequences are replaced with U+FFFD instead of failing. A leading
/// byte-order mark is kept as a character.
///
/// # Example
///
/// ```
/// use bytecast_buffers::to_text;
///
/// assert_eq!(to_text(b"hello"), "hello");
/// assert_eq!(to_text(&[0x61, 0xff, 0x62]), "a\u{FFFD}b");
/// ```
pub fn to_text(buffer: &[u8]) -> String {
    match String::from_utf8_lossy(buffer) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            tracing::trace!(len = buffer.len(), "replaced malformed UTF-8 sequences");
            text
        }
    }
}

/// Decodes a buffer with an explicit encoding, replacing malformed input
/// with U+FFFD.
///
/// # Example
///
/// ```
/// use bytecast_buffers::{to_text_with, TextEncoding};
///
/// assert_eq!(to_text_with(&[0x68, 0x00, 0x69, 0x00], TextEncoding::Utf16Le), "hi");
/// assert_eq!(to_text_with(&[0x00, 0x68, 0x00, 0x69], TextEncoding::Utf16Be), "hi");
/// ```
pub fn to_text_with(buffer: &[u8], encoding: TextEncoding) -> String {
    match encoding {
        TextEncoding::Utf8 => to_text(buffer),
        TextEncoding::Utf16Le => utf16(buffer, u16::from_le_bytes),
        TextEncoding::Utf16Be => utf16(buffer, u16::from_be_bytes),
    }
}

fn utf16(buffer: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let chunks = buffer.chunks_exact(2);
    let odd_tail = !chunks.remainder().is_empty();
    let units = chunks.map(|pair| unit([pair[0], pair[1]]));
    let mut text: String = char::decode_utf16(units)
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    if odd_tail {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}
