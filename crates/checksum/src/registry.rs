//! Read-only lookup of calculators by registry name.

use traits::Error;

use crate::{
  Calculator,
  catalogue::{
    CRC8, CRC8DVBS2, CRC16, CRC16CCITT, CRC16KERMIT, CRC16MODBUS, CRC16XMODEM, CRC24, CRC32, CRC32MPEG2, CRC81WIRE,
    CRCJAM,
  },
  crc1::CRC1,
};

/// Every registered calculator, in catalogue order.
pub static ALL: [&Calculator; 13] = [
  &CRC1,
  &CRC8,
  &CRC81WIRE,
  &CRC8DVBS2,
  &CRC16,
  &CRC16CCITT,
  &CRC16MODBUS,
  &CRC16XMODEM,
  &CRC16KERMIT,
  &CRC24,
  &CRC32,
  &CRC32MPEG2,
  &CRCJAM,
];

/// Look up a calculator by its registry name (e.g. `crc16modbus`).
///
/// Names are exact and case-sensitive.
///
/// # Errors
///
/// Returns [`Error::UnknownModel`] if no calculator is registered under `name`.
pub fn lookup(name: &str) -> Result<&'static Calculator, Error> {
  ALL.iter().copied().find(|calc| calc.name() == name).ok_or(Error::UnknownModel)
}

/// Iterate over every registered calculator.
pub fn all() -> impl ExactSizeIterator<Item = &'static Calculator> {
  ALL.iter().copied()
}

/// Iterate over every registry name.
pub fn names() -> impl ExactSizeIterator<Item = &'static str> {
  ALL.iter().map(|calc| calc.name())
}
