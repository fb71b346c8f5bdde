//! The streaming checksum contract shared by every CRC model.

use core::fmt::Debug;

/// Running CRC state for one fixed model.
///
/// The state can be fed any number of chunks, read out at any point, and
/// restarted from a result obtained earlier, so a checksum over `A‖B` can be
/// computed as `resume(checksum(A))` followed by `update(B)`.
///
/// ```rust
/// use traits::Checksum;
///
/// /// Running sum of the input bytes, modulo 256.
/// #[derive(Clone, Default)]
/// struct Sum8(u8);
///
/// impl Checksum for Sum8 {
///   const OUTPUT_SIZE: usize = 1;
///   type Output = u8;
///
///   fn new() -> Self { Self(0) }
///   fn resume(previous: u8) -> Self { Self(previous) }
///   fn update(&mut self, data: &[u8]) {
///     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(b));
///   }
///   fn finalize(&self) -> u8 { self.0 }
///   fn reset(&mut self) { self.0 = 0; }
/// }
///
/// let whole = Sum8::checksum(b"123456789");
/// assert_eq!(whole, 221);
///
/// let mut state = Sum8::resume(Sum8::checksum(b"1234"));
/// state.update(b"56789");
/// assert_eq!(state.finalize(), whole);
/// assert_eq!(Sum8::checksum_vectored(&[&b"1234"[..], &b"56789"[..]]), whole);
/// ```
///
/// Implementations must keep `new()` equal to `Default::default()` and
/// `reset()` equal to replacing the state with `new()`. `finalize` leaves
/// the state untouched.
pub trait Checksum: Clone + Default {
  /// Bytes needed to hold a result: the model width rounded up to whole bytes.
  const OUTPUT_SIZE: usize;

  /// Result type; only the low `8 * OUTPUT_SIZE` bits are ever set.
  type Output: Copy + Eq + Debug + Default;

  /// Fresh state seeded with the model's initial register.
  #[must_use]
  fn new() -> Self;

  /// State that continues from a result returned by [`finalize`](Self::finalize).
  ///
  /// The model's output reflection and final XOR are undone before the
  /// register is loaded.
  #[must_use]
  fn resume(previous: Self::Output) -> Self;

  /// Absorb `data`.
  fn update(&mut self, data: &[u8]);

  /// Absorb each buffer in turn.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    bufs.iter().for_each(|buf| self.update(buf));
  }

  /// Result over everything absorbed so far.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Return to the state produced by [`new`](Self::new).
  fn reset(&mut self);

  /// One-shot checksum of `data`.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    Self::checksum_vectored(&[data])
  }

  /// One-shot checksum of the concatenation of `bufs`.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut state = Self::new();
    state.update_vectored(bufs);
    state.finalize()
  }

  /// Adapter that checksums everything read from `inner`.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self> {
    crate::io::ChecksumReader::new(inner)
  }

  /// Adapter that checksums everything written to `inner`.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::ChecksumWriter<W, Self> {
    crate::io::ChecksumWriter::new(inner)
  }
}
