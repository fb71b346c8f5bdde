//! Shared vocabulary for the crckit crates.
//!
//! [`Checksum`] is the streaming state every CRC model implements, [`Error`]
//! covers input normalization and lookups by name, and [`io`] wraps
//! `std::io` readers and writers (with the `std` feature). The crate is
//! `no_std` and has no dependencies.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;
pub mod io;

pub use checksum::Checksum;
pub use error::{Error, InvalidInput};
