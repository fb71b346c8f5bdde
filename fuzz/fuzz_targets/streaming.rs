//! Fuzz target for streaming and incremental computation.
//!
//! Arbitrary chunkings, fed through a dynamic hasher and through `previous`
//! chaining, must reproduce the one-shot result for every model.

#![no_main]

use arbitrary::Arbitrary;
use checksum::registry;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<u8>,
}

fuzz_target!(|input: Input| {
  for calc in registry::all() {
    let expected = calc.compute(&input.data, None);

    let mut hasher = calc.hasher();
    let mut previous = None;
    let mut rest = input.data.as_slice();
    let mut idx = 0;

    while !rest.is_empty() {
      let size = match input.chunk_sizes.get(idx % input.chunk_sizes.len().max(1)) {
        Some(&n) => usize::from(n).max(1),
        None => 1,
      };
      let (chunk, tail) = rest.split_at(size.min(rest.len()));
      hasher.update(chunk);
      previous = Some(calc.compute(chunk, previous));
      rest = tail;
      idx += 1;
    }

    assert_eq!(hasher.finalize(), expected, "{} streaming mismatch", calc.name());
    if let Some(chained) = previous {
      assert_eq!(chained, expected, "{} chaining mismatch", calc.name());
    }
  }
});
