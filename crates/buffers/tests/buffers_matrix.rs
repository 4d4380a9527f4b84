//! Buffer pivot matrix: reader/writer layout, hex, array and text legs.

use bytecast_buffers::{
    from_array, from_hex, to_array, to_hex, to_text, to_text_with, utf8, BufferError, Reader,
    TextEncoding, Writer,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Writer/Reader roundtrip matrix
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_integers() {
    let mut w = Writer::new();
    w.u8(0xFF);
    w.i8(i8::MIN);
    w.u16(u16::MAX);
    w.i16(-1000);
    w.u32(0x01020304);
    w.i32(i32::MIN);
    w.u64(u64::MAX);
    w.i64(i64::MIN);
    let data = w.flush();
    assert_eq!(data.len(), 1 + 1 + 2 + 2 + 4 + 4 + 8 + 8);

    let mut r = Reader::new(&data);
    assert_eq!(r.u8().unwrap(), 0xFF);
    assert_eq!(r.i8().unwrap(), i8::MIN);
    assert_eq!(r.u16().unwrap(), u16::MAX);
    assert_eq!(r.i16().unwrap(), -1000);
    assert_eq!(r.u32().unwrap(), 0x01020304);
    assert_eq!(r.i32().unwrap(), i32::MIN);
    assert_eq!(r.u64().unwrap(), u64::MAX);
    assert_eq!(r.i64().unwrap(), i64::MIN);
    assert_eq!(r.size(), 0);
}

#[test]
fn roundtrip_floats_bit_exact() {
    let mut w = Writer::new();
    w.f32(-0.0);
    w.f64(f64::MIN_POSITIVE);
    w.f64(f64::NAN);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.f32().unwrap().to_bits(), (-0.0f32).to_bits());
    assert_eq!(r.f64().unwrap(), f64::MIN_POSITIVE);
    assert!(r.f64().unwrap().is_nan());
}

#[test]
fn reader_reports_end_of_buffer() {
    let mut r = Reader::new(&[]);
    assert_eq!(
        r.u8(),
        Err(BufferError::EndOfBuffer {
            needed: 1,
            remaining: 0
        })
    );
}

// ---------------------------------------------------------------------------
// Hex
// ---------------------------------------------------------------------------

#[test]
fn hex_known_vectors() {
    assert_eq!(to_hex(b"abc"), "616263");
    assert_eq!(from_hex("68656c6c6f").unwrap(), b"hello".to_vec());
    assert_eq!(from_hex("0x68656c6c6f").unwrap(), b"hello".to_vec());
}

#[test]
fn hex_malformed_is_rejected() {
    assert_eq!(from_hex("123"), Err(BufferError::OddHexLength));
    assert_eq!(
        from_hex("zz"),
        Err(BufferError::InvalidHexCharacter {
            character: 'z',
            index: 0
        })
    );
}

// ---------------------------------------------------------------------------
// Array and text
// ---------------------------------------------------------------------------

#[test]
fn array_wraps_like_u8() {
    assert_eq!(from_array(&[0, 255, 256, 257, -1]), vec![0, 255, 0, 1, 255]);
    assert_eq!(to_array(&from_array(&[10, 20, 30])), vec![10, 20, 30]);
}

#[test]
fn text_multibyte() {
    let s = "héllo, 世界 \u{1F600}";
    assert_eq!(to_text(&utf8(s)), s);
    assert_eq!(to_text_with(&utf8(s), TextEncoding::Utf8), s);
}

proptest! {
    #[test]
    fn hex_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let hex = to_hex(&bytes);
        prop_assert_eq!(hex.len(), bytes.len() * 2);
        prop_assert_eq!(from_hex(&hex).unwrap(), bytes);
    }

    #[test]
    fn hex_string_roundtrip(hex in "([0-9a-f]{2}){0,32}") {
        prop_assert_eq!(to_hex(&from_hex(&hex).unwrap()), hex);
    }

    #[test]
    fn array_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(from_array(&to_array(&bytes)), bytes);
    }

    #[test]
    fn text_roundtrip(s in any::<String>()) {
        prop_assert_eq!(to_text(&utf8(&s)), s);
    }
}
