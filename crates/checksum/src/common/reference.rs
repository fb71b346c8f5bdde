//! Bitwise reference implementation of the generic CRC recurrence.
//!
//! This module provides the canonical "source of truth" for CRC computation.
//! It processes one bit at a time, making it:
//!
//! - **Obviously correct**: The algorithm directly mirrors the mathematical definition
//! - **Audit-friendly**: one loop per bit order, no lookup tables
//! - **Const-evaluable**: check values are verified at compile time
//!
//! All table-driven kernels must produce identical accumulators.
//!
//! # Register Layout
//!
//! The accumulator is kept in the form the recurrence consumes most directly:
//!
//! | Model | Layout |
//! |-------|--------|
//! | `refin = true` | bit-reflected register in the low `width` bits, reflected polynomial |
//! | `refin = false` | register top-aligned in 32 bits, polynomial shifted to match |
//!
//! Both layouts let a byte be mixed in with a single XOR, for every width
//! from 8 to 32.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::model::Params;

/// Reflect the low `width` bits of `value`.
#[inline]
#[must_use]
pub const fn reflect(value: u32, width: u8) -> u32 {
  value.reverse_bits() >> (32 - width as u32)
}

/// Convert a canonical `width`-bit register into the accumulator layout.
#[inline]
#[must_use]
pub const fn register_to_accumulator(params: &Params, register: u32) -> u32 {
  let register = register & params.mask();
  if params.refin { reflect(register, params.width) } else { register << (32 - params.width as u32) }
}

/// Convert an accumulator back into the canonical `width`-bit register.
#[inline]
#[must_use]
pub const fn accumulator_to_register(params: &Params, acc: u32) -> u32 {
  if params.refin { reflect(acc & params.mask(), params.width) } else { acc >> (32 - params.width as u32) }
}

/// Bitwise CRC update.
///
/// Mixes `data` into the accumulator one bit at a time. `refout` and `xorout`
/// are not applied here; see [`finalize`].
#[must_use]
pub const fn update(params: &Params, acc: u32, data: &[u8]) -> u32 {
  let poly = params.kernel_poly();
  let mut crc = acc;
  let mut i: usize = 0;
  while i < data.len() {
    let mut bit: u32 = 0;
    if params.refin {
      crc ^= data[i] as u32;
      while bit < 8 {
        crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
        bit += 1;
      }
    } else {
      crc ^= (data[i] as u32) << 24;
      while bit < 8 {
        crc = if crc & 0x8000_0000 != 0 { (crc << 1) ^ poly } else { crc << 1 };
        bit += 1;
      }
    }
    i += 1;
  }
  crc
}

/// Expose an accumulator as a checksum: apply `refout`, then `xorout`.
#[inline]
#[must_use]
pub const fn finalize(params: &Params, acc: u32) -> u32 {
  let register = accumulator_to_register(params, acc);
  let out = if params.refout { reflect(register, params.width) } else { register };
  (out ^ params.xorout) & params.mask()
}

/// Inverse of [`finalize`]: recover the accumulator behind a returned checksum.
#[inline]
#[must_use]
pub const fn resume(params: &Params, checksum: u32) -> u32 {
  let out = (checksum ^ params.xorout) & params.mask();
  let register = if params.refout { reflect(out, params.width) } else { out };
  register_to_accumulator(params, register)
}

/// One-shot bitwise checksum from the model's initial value.
#[must_use]
pub const fn checksum(params: &Params, data: &[u8]) -> u32 {
  let acc = register_to_accumulator(params, params.init);
  finalize(params, update(params, acc, data))
}
