//! Numeric input accepted by the fixed-width encoders.

const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// A numeric value before it is narrowed to a fixed-width type.
///
/// Integers are held as `i128` so the full `u64` and `i64` ranges are
/// reachable without going through a double.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    /// Low 64 bits of the value's two's-complement representation.
    ///
    /// Floats are truncated toward zero first; NaN and infinities map to 0.
    /// Narrowing the result with `as` to any smaller width gives the value
    /// modulo 2^width, the same wraparound native fixed-width integers have.
    ///
    /// ```
    /// use bytecast_buffers::Number;
    ///
    /// assert_eq!(Number::Int(65536).wrapping_bits() as u16, 0);
    /// assert_eq!(Number::Int(-1).wrapping_bits(), u64::MAX);
    /// assert_eq!(Number::Float(-1.9).wrapping_bits() as i8, -1);
    /// assert_eq!(Number::Float(f64::NAN).wrapping_bits(), 0);
    /// ```
    pub fn wrapping_bits(self) -> u64 {
        match self {
            Number::Int(v) => v as u64,
            Number::Float(f) => {
                if !f.is_finite() {
                    return 0;
                }
                // |f % 2^64| < 2^64 and integral, so the i128 cast is exact.
                (f.trunc() % TWO_POW_64) as i128 as u64
            }
        }
    }

    /// Nearest `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(f) => f,
        }
    }

    /// Nearest `f32`, rounding integers directly rather than through `f64`.
    pub fn as_f32(self) -> f32 {
        match self {
            Number::Int(v) => v as f32,
            Number::Float(f) => f as f32,
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::Int(value as i128)
                }
            }
        )*
    };
}

impl_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, i128);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}
