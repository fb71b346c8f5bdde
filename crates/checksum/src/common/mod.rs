//! Common building blocks for CRC computation.
//!
//! This module provides:
//! - The bitwise reference recurrence (the "source of truth")
//! - Const-fn lookup table generation for every width up to 32 bits
//! - Portable slice-by-N kernels built on those tables
//! - Kernel names shared by dispatch and introspection

pub mod kernels;
pub mod portable;
pub mod reference;
pub mod tables;

#[cfg(all(test, not(miri)))]
mod proptests;
