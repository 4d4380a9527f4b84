//! Big-endian buffer writer.

/// Appends fixed-width big-endian values to an auto-growing buffer.
///
/// # Example
///
/// ```
/// use bytecast_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u16(0x0102);
/// writer.f32(1.5);
/// assert_eq!(writer.flush(), vec![0x01, 0x02, 0x3f, 0xc0, 0x00, 0x00]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Writer {
    uint8: Vec<u8>,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
        }
    }

    /// Takes the written bytes, leaving the writer empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }

    /// Appends raw bytes.
    pub fn buf(&mut self, bytes: &[u8]) {
        self.uint8.extend_from_slice(bytes);
    }

    #[inline]
    pub fn u8(&mut self, value: u8) {
        self.uint8.push(value);
    }

    #[inline]
    pub fn i8(&mut self, value: i8) {
        self.buf(&value.to_be_bytes());
    }

    #[inline]
    pub fn u16(&mut self, value: u16) {
        self.buf(&value.to_be_bytes());
    }

    #[inline]
    pub fn i16(&mut self, value: i16) {
        self.buf(&value.to_be_bytes());
    }

    #[inline]
    pub fn u32(&mut self, value: u32) {
        self.buf(&value.to_be_bytes());
    }

    #[inline]
    pub fn i32(&mut self, value: i32) {
        self.buf(&value.to_be_bytes());
    }

    #[inline]
    pub fn u64(&mut self, value: u64) {
        self.buf(&value.to_be_bytes());
    }

    #[inline]
    pub fn i64(&mut self, value: i64) {
        self.buf(&value.to_be_bytes());
    }

    #[inline]
    pub fn f32(&mut self, value: f32) {
        self.buf(&value.to_be_bytes());
    }

    #[inline]
    pub fn f64(&mut self, value: f64) {
        self.buf(&value.to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_endian_layout() {
        let mut writer = Writer::new();
        writer.u32(0x01020304);
        writer.i16(-1);
        assert_eq!(writer.flush(), vec![0x01, 0x02, 0x03, 0x04, 0xff, 0xff]);
    }

    #[test]
    fn test_flush_resets() {
        let mut writer = Writer::with_capacity(8);
        writer.u64(1);
        assert_eq!(writer.flush(), vec![0, 0, 0, 0, 0, 0, 0, 1]);
        assert!(writer.flush().is_empty());
        writer.u8(7);
        assert_eq!(writer.flush(), vec![7]);
    }
}
