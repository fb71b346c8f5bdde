//! Fuzz target for text normalization.
//!
//! Decoding arbitrary text must never panic, and whatever bytes it yields
//! must checksum the same as passing those bytes directly.

#![no_main]

use checksum::{CRC32, Encoding, Text, normalize};
use libfuzzer_sys::fuzz_target;

const ENCODINGS: [Encoding; 5] = [Encoding::Utf8, Encoding::Latin1, Encoding::Utf16Le, Encoding::Base64, Encoding::Hex];

fuzz_target!(|text: &str| {
  for encoding in ENCODINGS {
    let input = Text::new(text, encoding);
    if let Ok(bytes) = normalize(&input) {
      assert_eq!(CRC32.unsigned(&input, None), Ok(CRC32.compute(&bytes, None)), "{encoding}");
    }
  }
});
