//! Fixed-width numeric codec.
//!
//! A [`NumericType`] fixes both the byte width of an encoding and the rule
//! used to read it back. Encodings are big-endian: two's complement for
//! signed integers, plain binary for unsigned ones and IEEE-754 for floats.

use std::fmt;
use std::str::FromStr;

use bytecast_buffers::{strip_hex_prefix, Number, Reader, Writer};

use crate::ConvertError;

/// The ten supported fixed-width types, tagged `u8`, `i8`, ... `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumericType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl NumericType {
    pub const ALL: [NumericType; 10] = [
        NumericType::U8,
        NumericType::I8,
        NumericType::U16,
        NumericType::I16,
        NumericType::U32,
        NumericType::I32,
        NumericType::U64,
        NumericType::I64,
        NumericType::F32,
        NumericType::F64,
    ];

    /// The type's tag, e.g. `"u16"`.
    pub fn tag(self) -> &'static str {
        match self {
            NumericType::U8 => "u8",
            NumericType::I8 => "i8",
            NumericType::U16 => "u16",
            NumericType::I16 => "i16",
            NumericType::U32 => "u32",
            NumericType::I32 => "i32",
            NumericType::U64 => "u64",
            NumericType::I64 => "i64",
            NumericType::F32 => "f32",
            NumericType::F64 => "f64",
        }
    }

    /// Encoded length in bytes.
    pub fn width(self) -> usize {
        match self {
            NumericType::U8 | NumericType::I8 => 1,
            NumericType::U16 | NumericType::I16 => 2,
            NumericType::U32 | NumericType::I32 | NumericType::F32 => 4,
            NumericType::U64 | NumericType::I64 | NumericType::F64 => 8,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, NumericType::F32 | NumericType::F64)
    }

    pub fn is_signed(self) -> bool {
        !matches!(
            self,
            NumericType::U8 | NumericType::U16 | NumericType::U32 | NumericType::U64
        )
    }

    /// Encodes `value` big-endian at this type's width.
    ///
    /// Out-of-range integers wrap modulo 2^width. Floats headed for an
    /// integer type are truncated toward zero first, with NaN and infinities
    /// encoding as zero.
    ///
    /// ```
    /// use bytecast::NumericType;
    ///
    /// assert_eq!(NumericType::U16.encode(0x0102), vec![0x01, 0x02]);
    /// assert_eq!(NumericType::U16.encode(65536), vec![0x00, 0x00]);
    /// assert_eq!(NumericType::I8.encode(-1), vec![0xff]);
    /// assert_eq!(NumericType::F32.encode(1.5), vec![0x3f, 0xc0, 0x00, 0x00]);
    /// ```
    pub fn encode(self, value: impl Into<Number>) -> Vec<u8> {
        let value = value.into();
        let bits = value.wrapping_bits();
        let mut writer = Writer::with_capacity(self.width());
        match self {
            NumericType::U8 => writer.u8(bits as u8),
            NumericType::I8 => writer.i8(bits as i8),
            NumericType::U16 => writer.u16(bits as u16),
            NumericType::I16 => writer.i16(bits as i16),
            NumericType::U32 => writer.u32(bits as u32),
            NumericType::I32 => writer.i32(bits as i32),
            NumericType::U64 => writer.u64(bits),
            NumericType::I64 => writer.i64(bits as i64),
            NumericType::F32 => writer.f32(value.as_f32()),
            NumericType::F64 => writer.f64(value.as_f64()),
        }
        writer.flush()
    }

    /// Decodes a hexadecimal integer as this type.
    ///
    /// The text (optionally `0x`-prefixed, any case, any number of digits)
    /// is read as an integer, and its low `8 * width` bits are reinterpreted
    /// as this type: signed types recover their sign, 64-bit types keep full
    /// precision and floats are read as IEEE-754 bit patterns.
    ///
    /// ```
    /// use bytecast::{Numeric, NumericType};
    ///
    /// assert_eq!(NumericType::I8.decode("ff").unwrap(), Numeric::I8(-1));
    /// assert_eq!(NumericType::U8.decode("1ff").unwrap(), Numeric::U8(255));
    /// assert_eq!(NumericType::F32.decode("3fc00000").unwrap(), Numeric::F32(1.5));
    /// assert_eq!(
    ///     NumericType::U64.decode("ffffffffffffffff").unwrap(),
    ///     Numeric::U64(u64::MAX)
    /// );
    /// ```
    pub fn decode(self, hex: &str) -> Result<Numeric, ConvertError> {
        let bits = parse_hex_bits(hex)?;
        let bytes = bits.to_be_bytes();
        let mut reader = Reader::new(&bytes[bytes.len() - self.width()..]);
        let value = match self {
            NumericType::U8 => Numeric::U8(reader.u8()?),
            NumericType::I8 => Numeric::I8(reader.i8()?),
            NumericType::U16 => Numeric::U16(reader.u16()?),
            NumericType::I16 => Numeric::I16(reader.i16()?),
            NumericType::U32 => Numeric::U32(reader.u32()?),
            NumericType::I32 => Numeric::I32(reader.i32()?),
            NumericType::U64 => Numeric::U64(reader.u64()?),
            NumericType::I64 => Numeric::I64(reader.i64()?),
            NumericType::F32 => Numeric::F32(reader.f32()?),
            NumericType::F64 => Numeric::F64(reader.f64()?),
        };
        Ok(value)
    }
}

/// Reads hex digits as an integer, keeping the low 64 bits.
fn parse_hex_bits(hex: &str) -> Result<u64, ConvertError> {
    let digits = strip_hex_prefix(hex);
    let invalid = || {
        tracing::debug!(input = hex, "rejected hexadecimal number");
        ConvertError::InvalidNumber(hex.to_string())
    };
    if digits.is_empty() {
        return Err(invalid());
    }
    digits.chars().try_fold(0u64, |acc, c| {
        c.to_digit(16)
            .map(|d| (acc << 4) | u64::from(d))
            .ok_or_else(invalid)
    })
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for NumericType {
    type Err = ConvertError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        NumericType::ALL
            .into_iter()
            .find(|ty| ty.tag() == tag)
            .ok_or_else(|| {
                tracing::debug!(tag, "unsupported numeric type tag");
                ConvertError::UnsupportedType(tag.to_string())
            })
    }
}

/// A decoded value, tagged with its type.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "value", rename_all = "lowercase")
)]
pub enum Numeric {
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    F32(f32),
    F64(f64),
}

impl Numeric {
    pub fn numeric_type(self) -> NumericType {
        match self {
            Numeric::U8(_) => NumericType::U8,
            Numeric::I8(_) => NumericType::I8,
            Numeric::U16(_) => NumericType::U16,
            Numeric::I16(_) => NumericType::I16,
            Numeric::U32(_) => NumericType::U32,
            Numeric::I32(_) => NumericType::I32,
            Numeric::U64(_) => NumericType::U64,
            Numeric::I64(_) => NumericType::I64,
            Numeric::F32(_) => NumericType::F32,
            Numeric::F64(_) => NumericType::F64,
        }
    }

    /// Big-endian encoding at the value's own width.
    pub fn to_be_bytes(self) -> Vec<u8> {
        self.numeric_type().encode(self)
    }

    /// The integer value, or `None` for floats.
    pub fn as_i128(self) -> Option<i128> {
        match Number::from(self) {
            Number::Int(v) => Some(v),
            Number::Float(_) => None,
        }
    }

    /// Nearest `f64`; exact for everything but 64-bit integers above 2^53.
    pub fn as_f64(self) -> f64 {
        Number::from(self).as_f64()
    }
}

impl From<Numeric> for Number {
    fn from(value: Numeric) -> Self {
        match value {
            Numeric::U8(v) => v.into(),
            Numeric::I8(v) => v.into(),
            Numeric::U16(v) => v.into(),
            Numeric::I16(v) => v.into(),
            Numeric::U32(v) => v.into(),
            Numeric::I32(v) => v.into(),
            Numeric::U64(v) => v.into(),
            Numeric::I64(v) => v.into(),
            Numeric::F32(v) => v.into(),
            Numeric::F64(v) => v.into(),
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::U8(v) => fmt::Display::fmt(v, f),
            Numeric::I8(v) => fmt::Display::fmt(v, f),
            Numeric::U16(v) => fmt::Display::fmt(v, f),
            Numeric::I16(v) => fmt::Display::fmt(v, f),
            Numeric::U32(v) => fmt::Display::fmt(v, f),
            Numeric::I32(v) => fmt::Display::fmt(v, f),
            Numeric::U64(v) => fmt::Display::fmt(v, f),
            Numeric::I64(v) => fmt::Display::fmt(v, f),
            Numeric::F32(v) => fmt::Display::fmt(v, f),
            Numeric::F64(v) => fmt::Display::fmt(v, f),
        }
    }
}
