//! Const-fn CRC lookup table generation for every width up to 32 bits.
//!
//! Tables are computed using `const fn` and embedded directly in the binary,
//! one set per model. Entries live in the same register layout the bitwise
//! reference uses (see [`super::reference`]), so every width shares a single
//! `u32` table type.
//!
//! # Table Strategies
//!
//! | Kernel | Tables used | Bytes/iter |
//! |--------|-------------|------------|
//! | slice-by-4 | `T0..T3` | 4 |
//! | slice-by-8 | `T0..T7` | 8 |
//!
//! Slice-by-4 reads the first four tables of the slice-by-8 set.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256, 0..N)
// or values masked to 0..=255. Clippy cannot prove this in const fn contexts.
#![allow(clippy::indexing_slicing)]

use crate::model::Params;

/// Number of tables generated per model.
pub const TABLE_COUNT: usize = 8;

/// Lookup tables for one model.
pub type Tables = [[u32; 256]; TABLE_COUNT];

/// CRC contribution of a single byte fed into an all-zero register.
#[must_use]
pub const fn table_entry(params: &Params, index: u8) -> u32 {
  let poly = params.kernel_poly();
  let mut bit = 0;
  if params.refin {
    let mut crc = index as u32;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    crc
  } else {
    let mut crc = (index as u32) << 24;
    while bit < 8 {
      crc = if crc & 0x8000_0000 != 0 { (crc << 1) ^ poly } else { crc << 1 };
      bit += 1;
    }
    crc
  }
}

/// Generate the slice-by-8 table set for a model.
///
/// `T[k][i]` is the contribution of byte `i` followed by `k` zero bytes.
#[must_use]
pub const fn generate(params: &Params) -> Tables {
  let mut tables = [[0u32; 256]; TABLE_COUNT];

  let mut i = 0usize;
  while i < 256 {
    tables[0][i] = table_entry(params, i as u8);
    i += 1;
  }

  let mut k = 1usize;
  while k < TABLE_COUNT {
    i = 0;
    while i < 256 {
      let prev = tables[k - 1][i];
      tables[k][i] = if params.refin {
        (prev >> 8) ^ tables[0][(prev & 0xFF) as usize]
      } else {
        (prev << 8) ^ tables[0][(prev >> 24) as usize]
      };
      i += 1;
    }
    k += 1;
  }

  tables
}
