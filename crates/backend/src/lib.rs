//! Backend crate: kernel dispatch primitives for crckit.
//!
//! The checksum engine ships several interchangeable kernels (bitwise
//! reference, slice-by-4, slice-by-8). This crate provides the machinery to
//! pick one once per process and call it cheaply afterwards:
//!
//! - [`Selected`]: a named kernel function
//! - [`Dispatcher`]: runs a selector on first use and caches the result
//! - [`OnceCache`]: the underlying write-once cell (works without `std`)
// Fallibility discipline: deny unwrap/expect in production, allow in tests.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod cache;
pub mod dispatch;

pub use cache::OnceCache;
pub use dispatch::{Dispatcher, Selected};
