//! Kernel names and the kernel table shared by dispatch and introspection.
//!
//! # Kernel Tier System
//!
//! | Tier | Name | Description |
//! |------|------|-------------|
//! | 0 | Reference | Bitwise implementation - always available, for verification |
//! | 1 | Portable | Table-based slice-by-N - always available, production path |
//!
//! Every polynomial model runs on every kernel; CRC-1 has its own summing kernel.

use crate::model::Model;

/// Reference (bitwise) kernel name - canonical implementation for verification.
pub const REFERENCE: &str = "reference/bitwise";

/// Portable slice-by-4 kernel name.
pub const PORTABLE_SLICE4: &str = "portable/slice4";

/// Portable slice-by-8 kernel name.
pub const PORTABLE_SLICE8: &str = "portable/slice8";

/// Auto-selecting portable kernel (slice-by-4 below the threshold, slice-by-8 above).
pub const PORTABLE_AUTO: &str = "portable/auto";

/// Running byte sum used by CRC-1.
pub const SUM: &str = "portable/sum";

/// Kernel signature: model, seed accumulator, data -> accumulator.
pub type CrcKernelFn = fn(&Model, u32, &[u8]) -> u32;

/// Bitwise reference kernel.
#[inline]
pub fn reference(model: &Model, acc: u32, data: &[u8]) -> u32 {
  super::reference::update(model.params(), acc, data)
}

/// Slice-by-4 kernel.
#[inline]
pub fn slice4(model: &Model, acc: u32, data: &[u8]) -> u32 {
  if model.params().refin {
    super::portable::slice4_reflected(acc, data, model.tables())
  } else {
    super::portable::slice4_normal(acc, data, model.tables())
  }
}

/// Slice-by-8 kernel.
#[inline]
pub fn slice8(model: &Model, acc: u32, data: &[u8]) -> u32 {
  if model.params().refin {
    super::portable::slice8_reflected(acc, data, model.tables())
  } else {
    super::portable::slice8_normal(acc, data, model.tables())
  }
}

/// Every fixed kernel with its name, in tier order.
pub const ALL: [(&str, CrcKernelFn); 3] = [
  (REFERENCE, reference as CrcKernelFn),
  (PORTABLE_SLICE4, slice4 as CrcKernelFn),
  (PORTABLE_SLICE8, slice8 as CrcKernelFn),
];

/// Pick the slice width for a buffer length under the auto policy.
#[inline]
#[must_use]
pub const fn select_auto(len: usize, slice4_to_slice8: usize) -> (&'static str, CrcKernelFn) {
  if len < slice4_to_slice8 {
    (PORTABLE_SLICE4, slice4 as CrcKernelFn)
  } else {
    (PORTABLE_SLICE8, slice8 as CrcKernelFn)
  }
}
