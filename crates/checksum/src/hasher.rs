//! Streaming hashers.
//!
//! - [`Crc<A>`]: statically typed over a model, implements [`Checksum`]
//! - [`Hasher`]: bound at runtime to any registry entry
//!
//! Both carry the pre-`xorout` accumulator between `update` calls, so data
//! may be delivered in arbitrary chunks.

use core::{fmt, marker::PhantomData};

use traits::Checksum;

use crate::calculator::{Calculator, Engine};

/// A CRC model known at compile time.
pub trait Algorithm {
  /// Significant result bits.
  const WIDTH: u8;

  /// The registry entry implementing this model.
  fn calculator() -> &'static Calculator;
}

/// Typed streaming hasher.
///
/// ```
/// use checksum::{Checksum, Crc32};
///
/// let mut hasher = Crc32::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), 0x0D4A_1185);
/// assert_eq!(Crc32::checksum(b"hello world"), 0x0D4A_1185);
/// ```
pub struct Crc<A: Algorithm> {
  acc: u32,
  _algorithm: PhantomData<fn() -> A>,
}

impl<A: Algorithm> Crc<A> {
  #[inline]
  fn engine() -> Engine {
    A::calculator().engine()
  }

  /// Name of the process-wide kernel selection.
  #[must_use]
  pub fn backend_name() -> &'static str {
    A::calculator().backend_name()
  }

  /// Kernel the selector would choose for `len` bytes.
  #[must_use]
  pub fn kernel_name_for_len(len: usize) -> &'static str {
    A::calculator().kernel_name_for_len(len)
  }

  /// Effective kernel configuration (overrides + thresholds).
  #[must_use]
  pub fn config() -> crate::CrcConfig {
    crate::config::get()
  }
}

impl<A: Algorithm> Clone for Crc<A> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<A: Algorithm> Copy for Crc<A> {}

impl<A: Algorithm> Default for Crc<A> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<A: Algorithm> fmt::Debug for Crc<A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc").field("model", &A::calculator().name()).field("acc", &self.acc).finish()
  }
}

impl<A: Algorithm> Checksum for Crc<A> {
  const OUTPUT_SIZE: usize = (A::WIDTH as usize).div_ceil(8);
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Self { acc: Self::engine().init(), _algorithm: PhantomData }
  }

  #[inline]
  fn resume(previous: u32) -> Self {
    Self { acc: Self::engine().resume(previous), _algorithm: PhantomData }
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.acc = Self::engine().update(self.acc, data);
  }

  #[inline]
  fn finalize(&self) -> u32 {
    Self::engine().finalize(self.acc)
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::new();
  }
}

/// Streaming hasher bound to a registry entry at runtime.
///
/// ```
/// let calc = checksum::lookup("crc16modbus")?;
/// let mut hasher = calc.hasher();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), 0x4B37);
/// # Ok::<(), checksum::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct Hasher {
  calculator: &'static Calculator,
  acc: u32,
}

impl Hasher {
  #[inline]
  #[must_use]
  pub fn new(calculator: &'static Calculator) -> Self {
    Self { calculator, acc: calculator.engine().init() }
  }

  /// Continue a session from a previously returned checksum.
  #[inline]
  #[must_use]
  pub fn resume(calculator: &'static Calculator, previous: u32) -> Self {
    Self { calculator, acc: calculator.engine().resume(previous) }
  }

  #[inline]
  #[must_use]
  pub const fn calculator(&self) -> &'static Calculator {
    self.calculator
  }

  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.acc = self.calculator.engine().update(self.acc, data);
  }

  /// Checksum of everything fed so far. Does not consume the hasher.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> u32 {
    self.calculator.engine().finalize(self.acc)
  }

  #[inline]
  pub fn reset(&mut self) {
    self.acc = self.calculator.engine().init();
  }
}

impl fmt::Debug for Hasher {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Hasher").field("model", &self.calculator.name()).field("acc", &self.acc).finish()
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Hasher {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}
