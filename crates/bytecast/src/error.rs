use bytecast_base64::Base64Error;
use bytecast_buffers::BufferError;
use thiserror::Error;

/// Error returned by the conversion functions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The numeric type tag is not one of the ten supported tags.
    #[error("unsupported numeric type `{0}`")]
    UnsupportedType(String),
    /// The text is not a hexadecimal integer.
    #[error("invalid hexadecimal number `{0}`")]
    InvalidNumber(String),
    #[error(transparent)]
    Buffer(#[from] BufferError),
    #[error(transparent)]
    Base64(#[from] Base64Error),
}
