//! CRC model descriptors.
//!
//! A [`Model`] bundles the Rocksoft parameters of one catalogue entry with the
//! lookup tables derived from them. Models are `static` data: tables are built
//! by `const fn` at compile time and never mutated.

use core::fmt;

use crate::common::{reference, tables};

/// Rocksoft/RevEng model parameters.
///
/// `poly` and `init` are given in normal (MSB-first) form, exactly as the
/// public CRC catalogue lists them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Params {
  /// Register width in bits (8..=32).
  pub width: u8,
  /// Generator polynomial, normal form, without the implicit top bit.
  pub poly: u32,
  /// Register value before the first byte.
  pub init: u32,
  /// Input bytes are consumed least-significant bit first.
  pub refin: bool,
  /// The final register is bit-reversed before `xorout`.
  pub refout: bool,
  /// Mask XORed into the exposed result.
  pub xorout: u32,
  /// Checksum of ASCII `123456789`.
  pub check: u32,
}

impl Params {
  /// Mask covering the low `width` bits.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u32 {
    u32::MAX >> (32 - self.width as u32)
  }

  /// Polynomial in the layout the kernels consume.
  ///
  /// Reflected for `refin` models, top-aligned otherwise.
  #[inline]
  #[must_use]
  pub const fn kernel_poly(&self) -> u32 {
    let poly = self.poly & self.mask();
    if self.refin { reference::reflect(poly, self.width) } else { poly << (32 - self.width as u32) }
  }
}

impl fmt::Debug for Params {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = (self.width as usize).div_ceil(4);
    f.debug_struct("Params")
      .field("width", &self.width)
      .field("poly", &format_args!("{:#0w$x}", self.poly, w = digits + 2))
      .field("init", &format_args!("{:#0w$x}", self.init, w = digits + 2))
      .field("refin", &self.refin)
      .field("refout", &self.refout)
      .field("xorout", &format_args!("{:#0w$x}", self.xorout, w = digits + 2))
      .field("check", &format_args!("{:#0w$x}", self.check, w = digits + 2))
      .finish()
  }
}

/// A named CRC model with its precomputed tables.
pub struct Model {
  name: &'static str,
  params: Params,
  tables: tables::Tables,
}

impl Model {
  /// Build a model, generating its tables at compile time.
  #[must_use]
  pub const fn new(name: &'static str, params: Params) -> Self {
    Self { name, params, tables: tables::generate(&params) }
  }

  /// Catalogue name, e.g. `CRC-32/ISO-HDLC`.
  #[inline]
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  #[inline]
  #[must_use]
  pub const fn params(&self) -> &Params {
    &self.params
  }

  #[inline]
  #[must_use]
  pub(crate) const fn tables(&self) -> &tables::Tables {
    &self.tables
  }

  /// Accumulator seeded with the model's initial register value.
  #[inline]
  #[must_use]
  pub const fn init_accumulator(&self) -> u32 {
    reference::register_to_accumulator(&self.params, self.params.init)
  }

  /// Mix `data` into `acc` using the process-wide selected kernel.
  #[inline]
  #[must_use]
  pub fn update(&self, acc: u32, data: &[u8]) -> u32 {
    crate::dispatch::update(self, acc, data)
  }

  /// Mix `data` into `acc` one bit at a time.
  #[inline]
  #[must_use]
  pub const fn update_bitwise(&self, acc: u32, data: &[u8]) -> u32 {
    reference::update(&self.params, acc, data)
  }

  /// Apply `refout` and `xorout`, producing the exposed checksum.
  #[inline]
  #[must_use]
  pub const fn finalize(&self, acc: u32) -> u32 {
    reference::finalize(&self.params, acc)
  }

  /// Accumulator that continues a session from a previously exposed checksum.
  ///
  /// Inverse of [`finalize`](Self::finalize).
  #[inline]
  #[must_use]
  pub const fn resume(&self, checksum: u32) -> u32 {
    reference::resume(&self.params, checksum)
  }

  /// One-shot checksum from the model's initial value.
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> u32 {
    self.finalize(self.update(self.init_accumulator(), data))
  }
}

impl fmt::Debug for Model {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Model").field("name", &self.name).field("params", &self.params).finish_non_exhaustive()
  }
}
