//! Unified property tests for every kernel and model.
//!
//! 1. **Kernel equivalence**: slice-by-4 and slice-by-8 produce the same
//!    accumulator as the bitwise reference for any seed and input
//! 2. **Chunking equivalence**: any chunking of input through the accumulator
//!    equals one-shot processing
//! 3. **Resume round trip**: `resume(finalize(acc)) == acc`
//!
//! The bitwise reference is the oracle throughout.

extern crate std;

use std::vec::Vec;

use proptest::prelude::*;

use super::kernels;
use crate::{Model, catalogue::*};

static MODELS: [&Model; 12] = [
  &CRC8_SMBUS,
  &CRC8_MAXIM_DOW,
  &CRC8_DVB_S2,
  &CRC16_ARC,
  &CRC16_IBM_3740,
  &CRC16_MODBUS,
  &CRC16_XMODEM,
  &CRC16_KERMIT,
  &CRC24_OPENPGP,
  &CRC32_ISO_HDLC,
  &CRC32_MPEG_2,
  &CRC32_JAMCRC,
];

fn any_model() -> impl Strategy<Value = &'static Model> {
  (0..MODELS.len()).prop_map(|i| MODELS[i])
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn kernels_match_reference(
    model in any_model(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    seed in any::<u32>(),
  ) {
    let acc = model.resume(seed);
    let expected = model.update_bitwise(acc, &data);
    for (name, kernel) in kernels::ALL {
      prop_assert_eq!(kernel(model, acc, &data), expected, "{} on {}", model.name(), name);
    }
  }

  #[test]
  fn chunking_matches_oneshot(
    model in any_model(),
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    chunk_sizes in proptest::collection::vec(1usize..=97, 1..=24),
  ) {
    let expected = model.update(model.init_accumulator(), &data);

    let mut acc = model.init_accumulator();
    let mut rest: &[u8] = &data;
    let mut sizes = chunk_sizes.iter().cycle();
    while !rest.is_empty() {
      let take = sizes.next().copied().unwrap_or(1).min(rest.len());
      let (head, tail) = rest.split_at(take);
      acc = model.update(acc, head);
      rest = tail;
    }
    prop_assert_eq!(acc, expected, "{}", model.name());
  }

  #[test]
  fn finalize_resume_round_trip(model in any_model(), data in proptest::collection::vec(any::<u8>(), 0..=256)) {
    let acc = model.update(model.init_accumulator(), &data);
    prop_assert_eq!(model.resume(model.finalize(acc)), acc);
  }

  #[test]
  fn split_result_chaining(
    model in any_model(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
    split in any::<usize>(),
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);
    let first = model.checksum(a);
    let chained = model.finalize(model.update(model.resume(first), b));
    prop_assert_eq!(chained, model.checksum(&data));
  }

  #[test]
  fn sum_kernel_is_permutation_invariant(mut data in proptest::collection::vec(any::<u8>(), 0..=256)) {
    let forward = crate::crc1::update(0, &data);
    data.reverse();
    prop_assert_eq!(crate::crc1::update(0, &data), forward);
    let wide: u32 = data.iter().map(|&b| u32::from(b)).sum();
    prop_assert_eq!(u32::from(forward), wide % 256);
  }
}

#[test]
fn every_kernel_handles_every_tail_length() {
  let data: Vec<u8> = (0..=40u8).map(|i| i.wrapping_mul(37)).collect();
  for model in MODELS {
    let acc = model.init_accumulator();
    for len in 0..=data.len() {
      let expected = model.update_bitwise(acc, &data[..len]);
      for (name, kernel) in kernels::ALL {
        assert_eq!(kernel(model, acc, &data[..len]), expected, "{} {name} len={len}", model.name());
      }
    }
  }
}
