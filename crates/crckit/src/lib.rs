//! CRC checksums for a catalogue of standard models.
//!
//! `crckit` computes CRC-8, CRC-16, CRC-24 and CRC-32 checksums (plus the
//! byte-sum CRC-1) over text, byte slices and other byte-like input. Every
//! model supports incremental computation: the result over one chunk is the
//! `previous` value for the next.
//!
//! # Example
//!
//! ```
//! use crckit::{CRC32, Checksum, Crc32};
//!
//! // Registry-style call
//! let crc = CRC32.unsigned("hello world", None)?;
//! assert_eq!(crc, 222_957_957);
//!
//! // Continue from a previous result
//! let head = CRC32.unsigned("hello ", None)?;
//! assert_eq!(CRC32.unsigned("world", Some(head))?, crc);
//!
//! // Streaming computation
//! let mut hasher = Crc32::new();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! assert_eq!(hasher.finalize(), crc);
//!
//! // Lookup by name
//! let modbus = crckit::lookup("crc16modbus")?;
//! assert_eq!(modbus.model(), "crc-16-modbus");
//! # Ok::<(), crckit::Error>(())
//! ```
//!
//! # Features
//!
//! All three are on by default.
//!
//! - `std`: `CRCKIT_*` environment overrides and the `io` adapters.
//! - `json`: accept a `serde_json::Value` as input.
//! - `tracing`: log which kernel was picked.
//!
//! With `default-features = false` the crate builds for `no_std` targets and
//! still computes every model over byte slices and text.
#![cfg_attr(not(feature = "std"), no_std)]

// Registry calculators.
pub use checksum::{
  CRC1, CRC8, CRC8DVBS2, CRC16, CRC16CCITT, CRC16KERMIT, CRC16MODBUS, CRC16XMODEM, CRC24, CRC32, CRC32MPEG2, CRC81WIRE,
  CRCJAM, Calculator, lookup, registry,
};

// Typed streaming state.
pub use checksum::{
  Algorithm, Checksum, Crc, Crc1, Crc8, Crc8Dvbs2, Crc16, Crc16Ccitt, Crc16Kermit, Crc16Modbus, Crc16Xmodem, Crc24,
  Crc32, Crc32Mpeg2, Crc81Wire, CrcJam, Hasher,
};
#[cfg(feature = "std")]
pub use traits::io::{ChecksumReader, ChecksumWriter};

// Model descriptors, configuration and input normalization.
pub use checksum::{
  CanonicalBytes, CrcConfig, CrcForce, CrcTunables, Encoding, Error, InvalidInput, Model, Normalize, Params, Text,
  catalogue, normalize,
};
