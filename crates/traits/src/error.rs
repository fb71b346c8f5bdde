//! Error types for checksum computation.
//!
//! Computing a CRC cannot fail once input is available as bytes. The only
//! failures are turning a caller's value into bytes and naming a model or
//! encoding that does not exist.

use core::fmt;

/// Shape of a value that could not be turned into a byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum InvalidInput {
  /// A null value.
  Null,
  /// A boolean value.
  Bool,
  /// A bare number (not an array of numbers).
  Number,
  /// An object that is not a serialized byte buffer.
  Object,
  /// An array containing something other than a number.
  NonNumericElement,
  /// Text that is not valid in the named encoding.
  MalformedText(&'static str),
}

impl fmt::Display for InvalidInput {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Null => f.write_str("null"),
      Self::Bool => f.write_str("boolean"),
      Self::Number => f.write_str("number"),
      Self::Object => f.write_str("object"),
      Self::NonNumericElement => f.write_str("array with non-numeric element"),
      Self::MalformedText(encoding) => write!(f, "malformed {encoding} text"),
    }
  }
}

/// Checksum API error.
///
/// # Examples
///
/// ```
/// use traits::{Error, InvalidInput};
///
/// let err = Error::InvalidInputKind(InvalidInput::Null);
/// assert_eq!(err.to_string(), "cannot normalize null into bytes");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
  /// The input value is neither text nor byte-array-like.
  InvalidInputKind(InvalidInput),
  /// No model is registered under the requested name.
  UnknownModel,
  /// The text encoding name is not one of the supported encodings.
  UnknownEncoding,
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidInputKind(kind) => write!(f, "cannot normalize {kind} into bytes"),
      Self::UnknownModel => f.write_str("unknown CRC model"),
      Self::UnknownEncoding => f.write_str("unknown text encoding"),
    }
  }
}

impl core::error::Error for Error {}

impl From<InvalidInput> for Error {
  #[inline]
  fn from(kind: InvalidInput) -> Self {
    Self::InvalidInputKind(kind)
  }
}
