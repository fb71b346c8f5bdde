//! CRC-1: the byte-sum checksum.
//!
//! Not a polynomial CRC. The accumulator is the running sum of every input
//! byte reduced modulo 256, seeded from the previous result (default 0). No
//! reflection or final XOR is applied, so accumulator and result coincide and
//! the result does not depend on byte order.

use crate::Calculator;

/// Add `data` into a running byte sum.
#[inline]
#[must_use]
pub fn update(acc: u8, data: &[u8]) -> u8 {
  data.iter().fold(acc, |sum, &byte| sum.wrapping_add(byte))
}

/// The `crc1` calculator.
pub static CRC1: Calculator = Calculator::sum("crc1", "crc1");

/// Marker type for CRC-1.
#[derive(Debug, Clone, Copy)]
pub enum Crc1Algorithm {}

impl crate::Algorithm for Crc1Algorithm {
  const WIDTH: u8 = 8;

  #[inline]
  fn calculator() -> &'static Calculator {
    &CRC1
  }
}

/// Streaming CRC-1 hasher.
pub type Crc1 = crate::Crc<Crc1Algorithm>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sums_modulo_256() {
    assert_eq!(update(0, b""), 0);
    assert_eq!(update(0, b"123456789"), 221);
    assert_eq!(update(0, b"hello world"), 92);
    assert_eq!(update(0, &[0xFF, 0x02]), 1);
    assert_eq!(update(250, &[10]), 4);
  }

  #[test]
  fn order_independent() {
    assert_eq!(update(0, b"abc"), update(0, b"cba"));
  }
}
