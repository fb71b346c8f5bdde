//! The uniform per-model calling contract.
//!
//! A [`Calculator`] binds one model to the operations every registry entry
//! exposes: normalize the input, seed from `previous` (or the model's initial
//! value), run the recurrence, and return the result as unsigned or signed.

use core::fmt;

use traits::Error;

use crate::{
  crc1,
  dispatch,
  hasher::Hasher,
  input::Normalize,
  model::{Model, Params},
};

/// How a calculator turns bytes into a checksum.
#[derive(Clone, Copy)]
pub(crate) enum Engine {
  /// A table-driven polynomial CRC.
  Polynomial(&'static Model),
  /// The CRC-1 byte sum.
  Sum,
}

impl Engine {
  #[inline]
  pub(crate) const fn init(self) -> u32 {
    match self {
      Self::Polynomial(model) => model.init_accumulator(),
      Self::Sum => 0,
    }
  }

  #[inline]
  pub(crate) const fn resume(self, previous: u32) -> u32 {
    match self {
      Self::Polynomial(model) => model.resume(previous),
      Self::Sum => previous & 0xFF,
    }
  }

  #[inline]
  pub(crate) fn update(self, acc: u32, data: &[u8]) -> u32 {
    match self {
      Self::Polynomial(model) => model.update(acc, data),
      Self::Sum => u32::from(crc1::update(acc as u8, data)),
    }
  }

  #[inline]
  pub(crate) const fn finalize(self, acc: u32) -> u32 {
    match self {
      Self::Polynomial(model) => model.finalize(acc),
      Self::Sum => acc & 0xFF,
    }
  }

  #[inline]
  pub(crate) const fn seed(self, previous: Option<u32>) -> u32 {
    match previous {
      Some(previous) => self.resume(previous),
      None => self.init(),
    }
  }
}

/// A registry entry: one CRC model behind the uniform calling contract.
///
/// # Examples
///
/// ```
/// use checksum::CRC32;
///
/// let crc = CRC32.unsigned("hello world", None)?;
/// assert_eq!(crc, 0x0D4A_1185);
///
/// // Incremental: feed the previous result back in.
/// let head = CRC32.unsigned("hello ", None)?;
/// assert_eq!(CRC32.unsigned("world", Some(head))?, crc);
/// # Ok::<(), checksum::Error>(())
/// ```
pub struct Calculator {
  name: &'static str,
  model_name: &'static str,
  engine: Engine,
}

impl Calculator {
  /// Calculator for a polynomial model.
  #[must_use]
  pub const fn polynomial(name: &'static str, model_name: &'static str, model: &'static Model) -> Self {
    Self { name, model_name, engine: Engine::Polynomial(model) }
  }

  /// Calculator for the CRC-1 byte sum.
  #[must_use]
  pub(crate) const fn sum(name: &'static str, model_name: &'static str) -> Self {
    Self { name, model_name, engine: Engine::Sum }
  }

  /// Registry lookup by name; see [`registry::lookup`](crate::registry::lookup).
  ///
  /// # Errors
  ///
  /// Returns [`Error::UnknownModel`] if no calculator is registered under `name`.
  #[inline]
  pub fn from_name(name: &str) -> Result<&'static Self, Error> {
    crate::registry::lookup(name)
  }

  #[inline]
  pub(crate) const fn engine(&self) -> Engine {
    self.engine
  }

  /// Registry name, e.g. `crc32`.
  #[inline]
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// Model name used by reference tooling, e.g. `crc-32`.
  #[inline]
  #[must_use]
  pub const fn model(&self) -> &'static str {
    self.model_name
  }

  /// Public catalogue name, e.g. `CRC-32/ISO-HDLC`. `None` for CRC-1.
  #[inline]
  #[must_use]
  pub const fn catalog_name(&self) -> Option<&'static str> {
    match self.engine {
      Engine::Polynomial(model) => Some(model.name()),
      Engine::Sum => None,
    }
  }

  /// Model parameters. `None` for CRC-1, which is not a polynomial CRC.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> Option<&'static Params> {
    match self.engine {
      Engine::Polynomial(model) => Some(model.params()),
      Engine::Sum => None,
    }
  }

  /// The model descriptor. `None` for CRC-1.
  #[inline]
  #[must_use]
  pub const fn descriptor(&self) -> Option<&'static Model> {
    match self.engine {
      Engine::Polynomial(model) => Some(model),
      Engine::Sum => None,
    }
  }

  /// Number of significant result bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    match self.engine {
      Engine::Polynomial(model) => model.params().width,
      Engine::Sum => 8,
    }
  }

  /// Checksum of raw bytes, continuing from `previous` when given.
  #[inline]
  #[must_use]
  pub fn compute(&self, data: &[u8], previous: Option<u32>) -> u32 {
    let acc = self.engine.seed(previous);
    self.engine.finalize(self.engine.update(acc, data))
  }

  /// Checksum as a non-negative value.
  ///
  /// `previous` is a result returned by an earlier call on the same
  /// calculator; computing over `B` with the result of `A` equals computing
  /// over `A` followed by `B`. Bits above the model width are ignored.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidInputKind`] if `input` cannot be normalized.
  #[inline]
  pub fn unsigned<T: Normalize + ?Sized>(&self, input: &T, previous: Option<u32>) -> Result<u32, Error> {
    let bytes = input.normalize()?;
    Ok(self.compute(&bytes, previous))
  }

  /// Alias of [`unsigned`](Self::unsigned).
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidInputKind`] if `input` cannot be normalized.
  #[inline]
  pub fn checksum<T: Normalize + ?Sized>(&self, input: &T, previous: Option<u32>) -> Result<u32, Error> {
    self.unsigned(input, previous)
  }

  /// Checksum reinterpreted as a two's-complement 32-bit value.
  ///
  /// Identical to [`unsigned`](Self::unsigned) for models narrower than 32
  /// bits; negative for 32-bit results with the top bit set.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidInputKind`] if `input` cannot be normalized.
  #[inline]
  pub fn signed<T: Normalize + ?Sized>(&self, input: &T, previous: Option<i32>) -> Result<i32, Error> {
    self.unsigned(input, previous.map(|p| p as u32)).map(|crc| crc as i32)
  }

  /// Streaming hasher seeded with the model's initial value.
  #[inline]
  #[must_use]
  pub fn hasher(&'static self) -> Hasher {
    Hasher::new(self)
  }

  /// Streaming hasher continuing from a previously returned checksum.
  #[inline]
  #[must_use]
  pub fn hasher_with_previous(&'static self, previous: u32) -> Hasher {
    Hasher::resume(self, previous)
  }

  /// Name of the process-wide kernel selection.
  #[must_use]
  pub fn backend_name(&self) -> &'static str {
    match self.engine {
      Engine::Polynomial(_) => dispatch::backend_name(),
      Engine::Sum => crate::common::kernels::SUM,
    }
  }

  /// Kernel that would process a buffer of `len` bytes.
  ///
  /// Intended for debugging and benchmarking.
  #[must_use]
  pub fn kernel_name_for_len(&self, len: usize) -> &'static str {
    match self.engine {
      Engine::Polynomial(_) => dispatch::selected_kernel_name(len),
      Engine::Sum => crate::common::kernels::SUM,
    }
  }
}

impl fmt::Debug for Calculator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Calculator")
      .field("name", &self.name)
      .field("model", &self.model_name)
      .field("catalog", &self.catalog_name())
      .finish()
  }
}

impl fmt::Display for Calculator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name)
  }
}

#[cfg(test)]
mod tests {
  use traits::InvalidInput;

  use crate::{
    CRC1, CRC8, CRC16, CRC16XMODEM, CRC32, CRC32MPEG2, CRCJAM,
    input::{Encoding, Text},
  };

  #[test]
  fn hello_world() {
    assert_eq!(CRC32.unsigned("hello world", None), Ok(222_957_957));
    assert_eq!(CRC16.unsigned("hello world", None), Ok(14785));
    assert_eq!(CRC16XMODEM.unsigned("hello world", None), Ok(15332));
  }

  #[test]
  fn signed_reinterprets_32_bit_results() {
    assert_eq!(CRC32MPEG2.signed("hello world", None), Ok(-1_157_043_065));
    assert_eq!(CRCJAM.signed("hello world", None), Ok(-222_957_958));
    assert_eq!(CRC32.signed("hello world", None), Ok(222_957_957));
    assert_eq!(CRC8.signed("hello world", None), Ok(0xA8));
  }

  #[test]
  fn signed_previous_chains() {
    let head = CRCJAM.signed("hello ", None).unwrap();
    assert_eq!(CRCJAM.signed("world", Some(head)), CRCJAM.signed("hello world", None));
  }

  #[test]
  fn previous_chains_through_xorout() {
    let head = CRC32.unsigned("hello ", None).unwrap();
    assert_eq!(CRC32.unsigned("world", Some(head)), Ok(0x0D4A_1185));
  }

  #[test]
  fn text_and_bytes_agree() {
    let hex = Text::new("45a2dff1", Encoding::Hex);
    assert_eq!(CRC32.unsigned(&hex, None), CRC32.unsigned(&[0x45u8, 0xA2, 0xDF, 0xF1], None));
    assert_eq!(CRC32.unsigned(&hex, None), Ok(0x9B68_E547));
  }

  #[test]
  fn invalid_text_is_reported() {
    let bad = Text::new("xyz", Encoding::Hex);
    assert_eq!(CRC32.unsigned(&bad, None), Err(crate::Error::InvalidInputKind(InvalidInput::MalformedText("hex"))));
  }

  #[test]
  fn crc1_is_a_byte_sum() {
    assert_eq!(CRC1.unsigned("123456789", None), Ok(221));
    assert_eq!(CRC1.unsigned("", Some(300)), Ok(44));
    assert_eq!(CRC1.signed("", Some(-1)), Ok(255));
    assert_eq!(CRC1.catalog_name(), None);
    assert!(CRC1.params().is_none());
  }

  #[test]
  fn introspection() {
    assert!(core::ptr::eq(crate::Calculator::from_name("crc32").unwrap(), &CRC32));
    assert_eq!(crate::Calculator::from_name("crc33").unwrap_err(), crate::Error::UnknownModel);
    assert_eq!(CRC32.name(), "crc32");
    assert_eq!(CRC32.model(), "crc-32");
    assert_eq!(CRC32.catalog_name(), Some("CRC-32/ISO-HDLC"));
    assert_eq!(CRC32.width(), 32);
    assert_eq!(CRC32.params().map(|p| p.check), Some(0xCBF4_3926));
    assert_eq!(CRC1.backend_name(), "portable/sum");
    assert!(!CRC32.backend_name().is_empty());
    assert!(!CRC32.kernel_name_for_len(1024).is_empty());
  }
}
