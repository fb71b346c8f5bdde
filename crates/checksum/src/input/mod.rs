//! Input normalization.
//!
//! Every model consumes a [`CanonicalBytes`] sequence. [`Normalize`] maps the
//! representations callers actually hold (text in some encoding, byte slices,
//! arrays, vectors, JSON values) onto that sequence. Inputs that already are
//! bytes are borrowed, never copied.

use alloc::{borrow::Cow, string::String, vec::Vec};
use core::ops::Deref;

use traits::Error;

mod encoding;
#[cfg(feature = "json")]
mod json;

pub use encoding::{Encoding, Text};

/// Ordered, immutable byte sequence fed to the CRC recurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes<'a>(Cow<'a, [u8]>);

impl<'a> CanonicalBytes<'a> {
  #[inline]
  #[must_use]
  pub const fn borrowed(bytes: &'a [u8]) -> Self {
    Self(Cow::Borrowed(bytes))
  }

  #[inline]
  #[must_use]
  pub const fn owned(bytes: Vec<u8>) -> Self {
    Self(Cow::Owned(bytes))
  }

  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }

  /// Whether the bytes are borrowed from the original input.
  #[inline]
  #[must_use]
  pub const fn is_borrowed(&self) -> bool {
    matches!(self.0, Cow::Borrowed(_))
  }

  #[inline]
  #[must_use]
  pub fn into_owned(self) -> Vec<u8> {
    self.0.into_owned()
  }
}

impl Deref for CanonicalBytes<'_> {
  type Target = [u8];

  #[inline]
  fn deref(&self) -> &[u8] {
    &self.0
  }
}

impl AsRef<[u8]> for CanonicalBytes<'_> {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl<'a> From<&'a [u8]> for CanonicalBytes<'a> {
  #[inline]
  fn from(bytes: &'a [u8]) -> Self {
    Self::borrowed(bytes)
  }
}

impl From<Vec<u8>> for CanonicalBytes<'_> {
  #[inline]
  fn from(bytes: Vec<u8>) -> Self {
    Self::owned(bytes)
  }
}

/// Conversion of a caller value into canonical bytes.
///
/// Implementations have no side effects and never mutate their argument.
pub trait Normalize {
  /// Produce the byte sequence this value represents.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidInputKind`] when the value is neither text nor
  /// byte-array-like.
  fn normalize(&self) -> Result<CanonicalBytes<'_>, Error>;
}

/// Normalize any supported input.
///
/// # Errors
///
/// See [`Normalize::normalize`].
#[inline]
pub fn normalize<T: Normalize + ?Sized>(input: &T) -> Result<CanonicalBytes<'_>, Error> {
  input.normalize()
}

impl Normalize for str {
  #[inline]
  fn normalize(&self) -> Result<CanonicalBytes<'_>, Error> {
    Ok(CanonicalBytes::borrowed(self.as_bytes()))
  }
}

impl Normalize for String {
  #[inline]
  fn normalize(&self) -> Result<CanonicalBytes<'_>, Error> {
    self.as_str().normalize()
  }
}

impl Normalize for [u8] {
  #[inline]
  fn normalize(&self) -> Result<CanonicalBytes<'_>, Error> {
    Ok(CanonicalBytes::borrowed(self))
  }
}

impl<const N: usize> Normalize for [u8; N] {
  #[inline]
  fn normalize(&self) -> Result<CanonicalBytes<'_>, Error> {
    Ok(CanonicalBytes::borrowed(self))
  }
}

impl Normalize for Vec<u8> {
  #[inline]
  fn normalize(&self) -> Result<CanonicalBytes<'_>, Error> {
    Ok(CanonicalBytes::borrowed(self))
  }
}

impl Normalize for CanonicalBytes<'_> {
  #[inline]
  fn normalize(&self) -> Result<CanonicalBytes<'_>, Error> {
    Ok(CanonicalBytes::borrowed(self.as_bytes()))
  }
}

impl<T: Normalize + ?Sized> Normalize for &T {
  #[inline]
  fn normalize(&self) -> Result<CanonicalBytes<'_>, Error> {
    (**self).normalize()
  }
}

#[cfg(test)]
mod tests {
  use alloc::{string::ToString, vec};

  use super::*;

  #[test]
  fn byte_inputs_are_borrowed() {
    let v = vec![1u8, 2, 3];
    let out = v.normalize().unwrap();
    assert!(out.is_borrowed());
    assert_eq!(out.as_ptr(), v.as_ptr());

    let arr = [9u8; 4];
    assert_eq!(arr.normalize().unwrap().as_bytes(), &arr);
    assert_eq!((&arr[..2]).normalize().unwrap().as_bytes(), &[9, 9]);
  }

  #[test]
  fn canonical_round_trips_without_copy() {
    let owned = CanonicalBytes::owned(vec![7, 8, 9]);
    let again = owned.normalize().unwrap();
    assert!(again.is_borrowed());
    assert_eq!(again, owned);
    assert_eq!(again.as_ptr(), owned.as_ptr());
  }

  #[test]
  fn text_is_utf8() {
    let s = "héllo wörld".to_string();
    assert_eq!(s.normalize().unwrap().as_bytes(), "héllo wörld".as_bytes());
    assert_eq!(normalize("").unwrap().len(), 0);
  }

  #[test]
  fn references_forward() {
    let s: &&str = &"abc";
    assert_eq!(normalize(s).unwrap().as_bytes(), b"abc");
  }
}
