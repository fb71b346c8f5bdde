//! CRC checksums for a catalogue of standard models.
//!
//! Every model is the same generic recurrence instantiated with different
//! Rocksoft parameters. Checksums are deterministic pure functions over
//! anything that normalizes to bytes, and chain: the result over `A` fed back
//! as `previous` while hashing `B` equals the result over `A‖B`.
//!
//! # Supported Models
//!
//! | Registry | Type | Catalogue | Width |
//! |----------|------|-----------|-------|
//! | `crc1` | [`Crc1`] | byte sum mod 256 | 8 |
//! | `crc8` | [`Crc8`] | CRC-8/SMBUS | 8 |
//! | `crc81wire` | [`Crc81Wire`] | CRC-8/MAXIM-DOW | 8 |
//! | `crc8dvbs2` | [`Crc8Dvbs2`] | CRC-8/DVB-S2 | 8 |
//! | `crc16` | [`Crc16`] | CRC-16/ARC | 16 |
//! | `crc16ccitt` | [`Crc16Ccitt`] | CRC-16/IBM-3740 | 16 |
//! | `crc16modbus` | [`Crc16Modbus`] | CRC-16/MODBUS | 16 |
//! | `crc16xmodem` | [`Crc16Xmodem`] | CRC-16/XMODEM | 16 |
//! | `crc16kermit` | [`Crc16Kermit`] | CRC-16/KERMIT | 16 |
//! | `crc24` | [`Crc24`] | CRC-24/OPENPGP | 24 |
//! | `crc32` | [`Crc32`] | CRC-32/ISO-HDLC | 32 |
//! | `crc32mpeg2` | [`Crc32Mpeg2`] | CRC-32/MPEG-2 | 32 |
//! | `crcjam` | [`CrcJam`] | CRC-32/JAMCRC | 32 |
//!
//! # Example
//!
//! ```rust
//! use checksum::{CRC32, Checksum, Crc32, Encoding, Text};
//!
//! // Registry-style calls accept text, bytes, or anything `Normalize`.
//! let crc = CRC32.unsigned("hello world", None)?;
//! assert_eq!(crc, 0x0D4A_1185);
//! assert_eq!(CRC32.unsigned(&Text::new("68656c6c6f20776f726c64", Encoding::Hex), None)?, crc);
//!
//! // Incremental computation.
//! let head = CRC32.unsigned("hello ", None)?;
//! assert_eq!(CRC32.unsigned("world", Some(head))?, crc);
//!
//! // Typed streaming.
//! let mut hasher = Crc32::new();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! assert_eq!(hasher.finalize(), crc);
//! # Ok::<(), checksum::Error>(())
//! ```
//!
//! # Kernels
//!
//! Three interchangeable kernels implement the recurrence: `reference/bitwise`,
//! `portable/slice4` and `portable/slice8`. One is selected per process on
//! first use; see [`config`] for the environment overrides.
//!
//! # no_std Support
//!
//! The engine needs only `alloc`. Disable default features for embedded use:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

#[doc(hidden)]
pub mod common;

mod calculator;
pub mod catalogue;
pub mod config;
mod crc1;
pub mod dispatch;
mod hasher;
pub mod input;
mod model;
pub mod registry;

pub use calculator::Calculator;
pub use catalogue::{
  CRC8, CRC8_DVB_S2, CRC8_MAXIM_DOW, CRC8_SMBUS, CRC8DVBS2, CRC16, CRC16_ARC, CRC16_IBM_3740, CRC16_KERMIT,
  CRC16_MODBUS, CRC16_XMODEM, CRC16CCITT, CRC16KERMIT, CRC16MODBUS, CRC16XMODEM, CRC24, CRC24_OPENPGP, CRC32,
  CRC32_ISO_HDLC, CRC32_JAMCRC, CRC32_MPEG_2, CRC32MPEG2, CRC81WIRE, CRCJAM, Crc8, Crc8Algorithm, Crc8Dvbs2,
  Crc8Dvbs2Algorithm, Crc16, Crc16Algorithm, Crc16Ccitt, Crc16CcittAlgorithm, Crc16Kermit, Crc16KermitAlgorithm,
  Crc16Modbus, Crc16ModbusAlgorithm, Crc16Xmodem, Crc16XmodemAlgorithm, Crc24, Crc24Algorithm, Crc32, Crc32Algorithm,
  Crc32Mpeg2, Crc32Mpeg2Algorithm, Crc81Wire, Crc81WireAlgorithm, CrcJam, CrcJamAlgorithm,
};
pub use config::{CrcConfig, CrcForce, CrcTunables};
pub use crc1::{CRC1, Crc1, Crc1Algorithm};
pub use hasher::{Algorithm, Crc, Hasher};
pub use input::{CanonicalBytes, Encoding, Normalize, Text, normalize};
pub use model::{Model, Params};
pub use registry::lookup;
// Re-export traits for convenience
pub use traits::{Checksum, Error, InvalidInput};
