//! `std::io` adapters that checksum the bytes passing through them.
//!
//! Only the bytes the wrapped reader or writer reports as transferred are fed
//! to the checksum, so short reads and partial writes stay consistent with
//! what actually moved.
//!
//! ```rust
//! # use traits::Checksum;
//! # #[derive(Clone, Default)]
//! # struct Mix(u32);
//! # impl Checksum for Mix {
//! #   const OUTPUT_SIZE: usize = 1;
//! #   type Output = u32;
//! #   fn new() -> Self { Self(0) }
//! #   fn resume(previous: u32) -> Self { Self(previous) }
//! #   fn update(&mut self, data: &[u8]) { self.0 = data.iter().fold(self.0, |a, &b| a ^ u32::from(b)); }
//! #   fn finalize(&self) -> u32 { self.0 }
//! #   fn reset(&mut self) { self.0 = 0; }
//! # }
//! let mut reader = Mix::reader(&b"\x0f\xf0"[..]);
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(reader.crc(), 0xFF);
//! # Ok::<(), std::io::Error>(())
//! ```

#![cfg(feature = "std")]

use std::io::{self, IoSlice, IoSliceMut, Read, Write};

use crate::Checksum;

/// Feed the first `n` bytes spread across `bufs` into `state`.
fn update_prefix<'a, C: Checksum>(state: &mut C, bufs: impl IntoIterator<Item = &'a [u8]>, mut n: usize) {
  for buf in bufs {
    if n == 0 {
      return;
    }
    let (head, _) = buf.split_at(n.min(buf.len()));
    state.update(head);
    n -= head.len();
  }
}

/// Wraps a reader; every byte read is added to the checksum.
#[derive(Clone)]
pub struct ChecksumReader<R, C: Checksum> {
  inner: R,
  state: C,
}

/// Wraps a writer; every byte the inner writer accepts is added to the checksum.
#[derive(Clone)]
pub struct ChecksumWriter<W, C: Checksum> {
  inner: W,
  state: C,
}

macro_rules! adapter_methods {
  ($ty:ident, $inner:ident) => {
    impl<$inner, C: Checksum> $ty<$inner, C> {
      #[inline]
      #[must_use]
      pub fn new(inner: $inner) -> Self {
        Self { inner, state: C::new() }
      }

      /// Start from a checksum returned by an earlier session.
      #[inline]
      #[must_use]
      pub fn resume(inner: $inner, previous: C::Output) -> Self {
        Self { inner, state: C::resume(previous) }
      }

      /// Checksum of everything transferred so far.
      #[inline]
      #[must_use]
      pub fn crc(&self) -> C::Output {
        self.state.finalize()
      }

      #[inline]
      pub fn get_ref(&self) -> &$inner {
        &self.inner
      }

      #[inline]
      pub fn get_mut(&mut self) -> &mut $inner {
        &mut self.inner
      }

      #[inline]
      pub fn into_inner(self) -> $inner {
        self.inner
      }

      /// Unwrap into the inner value and the final checksum.
      #[inline]
      pub fn into_parts(self) -> ($inner, C::Output) {
        let crc = self.state.finalize();
        (self.inner, crc)
      }
    }
  };
}

adapter_methods!(ChecksumReader, R);
adapter_methods!(ChecksumWriter, W);

impl<R: Read, C: Checksum> Read for ChecksumReader<R, C> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let n = self.inner.read(buf)?;
    update_prefix(&mut self.state, [&*buf], n);
    Ok(n)
  }

  fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
    let n = self.inner.read_vectored(bufs)?;
    update_prefix(&mut self.state, bufs.iter().map(|b| &**b), n);
    Ok(n)
  }
}

impl<W: Write, C: Checksum> Write for ChecksumWriter<W, C> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    let n = self.inner.write(buf)?;
    update_prefix(&mut self.state, [buf], n);
    Ok(n)
  }

  fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
    let n = self.inner.write_vectored(bufs)?;
    update_prefix(&mut self.state, bufs.iter().map(|b| &**b), n);
    Ok(n)
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }
}
