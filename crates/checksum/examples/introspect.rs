//! Kernel selection introspection.
//!
//! Run with: `cargo run --example introspect -p checksum`
//!
//! Try `CRCKIT_FORCE=reference` or `CRCKIT_THRESHOLD_SLICE4_TO_SLICE8=16`.

use checksum::{CRC32, Crc32, registry};

fn main() {
  let cfg = Crc32::config();
  println!("requested force:   {}", cfg.requested_force.as_str());
  println!("slice4 -> slice8:  {} bytes", cfg.tunables.slice4_to_slice8);
  println!("backend:           {}", CRC32.backend_name());
  println!();

  for len in [0usize, 16, 63, 64, 4096] {
    println!("len {len:>5} -> {}", CRC32.kernel_name_for_len(len));
  }
  println!();

  for calc in registry::all() {
    match calc.params() {
      Some(params) => println!("{:<12} {:<16} {params:?}", calc.name(), calc.catalog_name().unwrap_or("-")),
      None => println!("{:<12} {:<16} byte sum", calc.name(), "-"),
    }
  }
}
