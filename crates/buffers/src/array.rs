//! Buffer ↔ byte array adapter.

use crate::Number;

/// Returns the byte values of a buffer, index for index.
///
/// # Example
///
/// ```
/// use bytecast_buffers::to_array;
///
/// assert_eq!(to_array(&[0x00, 0x7f, 0xff]), vec![0, 127, 255]);
/// ```
pub fn to_array(buffer: &[u8]) -> Vec<i64> {
    buffer.iter().map(|&b| i64::from(b)).collect()
}

/// Packs a sequence of numbers into a buffer, one byte per element.
///
/// Elements outside `[0, 255]` are not rejected: they wrap modulo 256 after
/// floats are truncated toward zero, exactly as a `u8` numeric encode does.
///
/// # Example
///
/// ```
/// use bytecast_buffers::from_array;
///
/// assert_eq!(from_array(&[104, 105]), b"hi".to_vec());
/// assert_eq!(from_array(&[256, -1, 300]), vec![0, 255, 44]);
/// assert_eq!(from_array(&[1.9, 255.5]), vec![1, 255]);
/// ```
pub fn from_array<T>(array: &[T]) -> Vec<u8>
where
    T: Copy + Into<Number>,
{
    array
        .iter()
        .map(|&value| value.into().wrapping_bits() as u8)
        .collect()
}
