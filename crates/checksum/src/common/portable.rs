//! Portable CRC implementations using lookup table algorithms.
//!
//! Slice-by-N processes N bytes per iteration using N precomputed lookup tables.
//! Each table contains 256 entries representing the CRC contribution of a single
//! byte at a specific position in the input stream.
//!
//! The algorithm XORs the current CRC with the leading input bytes, then combines
//! N table lookups (one per byte position) using XOR.
//!
//! Reflected models consume words little-endian from the low end of the
//! register; non-reflected models consume them big-endian from the top.

// SAFETY: All array indexing in this module uses bounded indices:
// - as_chunks guarantees chunk sizes
// - Table indices use `& 0xFF` (0..255) or `>> 24`
#![allow(clippy::indexing_slicing)]

use super::tables::Tables;

#[inline]
fn tail_reflected(mut crc: u32, data: &[u8], tables: &Tables) -> u32 {
  for &byte in data {
    crc = tables[0][((crc ^ byte as u32) & 0xFF) as usize] ^ (crc >> 8);
  }
  crc
}

#[inline]
fn tail_normal(mut crc: u32, data: &[u8], tables: &Tables) -> u32 {
  for &byte in data {
    crc = (crc << 8) ^ tables[0][((crc >> 24) ^ byte as u32) as usize];
  }
  crc
}

/// Update a reflected accumulator using slice-by-4.
#[inline]
pub fn slice4_reflected(mut crc: u32, data: &[u8], tables: &Tables) -> u32 {
  let (chunks, remainder) = data.as_chunks::<4>();

  for chunk in chunks {
    let a = crc ^ u32::from_le_bytes(*chunk);
    crc = tables[3][(a & 0xFF) as usize]
      ^ tables[2][((a >> 8) & 0xFF) as usize]
      ^ tables[1][((a >> 16) & 0xFF) as usize]
      ^ tables[0][(a >> 24) as usize];
  }

  tail_reflected(crc, remainder, tables)
}

/// Update a top-aligned accumulator using slice-by-4.
#[inline]
pub fn slice4_normal(mut crc: u32, data: &[u8], tables: &Tables) -> u32 {
  let (chunks, remainder) = data.as_chunks::<4>();

  for chunk in chunks {
    let a = crc ^ u32::from_be_bytes(*chunk);
    crc = tables[3][(a >> 24) as usize]
      ^ tables[2][((a >> 16) & 0xFF) as usize]
      ^ tables[1][((a >> 8) & 0xFF) as usize]
      ^ tables[0][(a & 0xFF) as usize];
  }

  tail_normal(crc, remainder, tables)
}

/// Update a reflected accumulator using slice-by-8.
#[inline]
pub fn slice8_reflected(mut crc: u32, data: &[u8], tables: &Tables) -> u32 {
  let (chunks, remainder) = data.as_chunks::<8>();

  for chunk in chunks {
    let a = crc ^ u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    let b = u32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);

    crc = tables[7][(a & 0xFF) as usize]
      ^ tables[6][((a >> 8) & 0xFF) as usize]
      ^ tables[5][((a >> 16) & 0xFF) as usize]
      ^ tables[4][(a >> 24) as usize]
      ^ tables[3][(b & 0xFF) as usize]
      ^ tables[2][((b >> 8) & 0xFF) as usize]
      ^ tables[1][((b >> 16) & 0xFF) as usize]
      ^ tables[0][(b >> 24) as usize];
  }

  tail_reflected(crc, remainder, tables)
}

/// Update a top-aligned accumulator using slice-by-8.
#[inline]
pub fn slice8_normal(mut crc: u32, data: &[u8], tables: &Tables) -> u32 {
  let (chunks, remainder) = data.as_chunks::<8>();

  for chunk in chunks {
    let a = crc ^ u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    let b = u32::from_be_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);

    crc = tables[7][(a >> 24) as usize]
      ^ tables[6][((a >> 16) & 0xFF) as usize]
      ^ tables[5][((a >> 8) & 0xFF) as usize]
      ^ tables[4][(a & 0xFF) as usize]
      ^ tables[3][(b >> 24) as usize]
      ^ tables[2][((b >> 16) & 0xFF) as usize]
      ^ tables[1][((b >> 8) & 0xFF) as usize]
      ^ tables[0][(b & 0xFF) as usize];
  }

  tail_normal(crc, remainder, tables)
}
