//! Basic checksum usage: registry calls, incremental results and streaming.
//!
//! Run with: `cargo run --example basic -p checksum`

use checksum::{CRC16MODBUS, CRC32, CRCJAM, Checksum, Crc24, Crc32, Encoding, Text, registry};

fn main() -> Result<(), checksum::Error> {
  println!("=== Checksum Basic Examples ===\n");

  every_model()?;
  incremental()?;
  streaming();
  encodings()?;
  Ok(())
}

/// Check value of every registered model.
fn every_model() -> Result<(), checksum::Error> {
  println!("--- Check Values ---\n");
  for calc in registry::all() {
    let crc = calc.unsigned("123456789", None)?;
    let width = usize::from(calc.width()).div_ceil(4);
    println!("{:<12} {:<14} 0x{crc:0width$X}", calc.name(), calc.model());
  }
  println!();
  Ok(())
}

/// Feed a previous result back in to continue over more data.
fn incremental() -> Result<(), checksum::Error> {
  println!("--- Incremental ---\n");

  let head = CRC32.unsigned("hello ", None)?;
  let full = CRC32.unsigned("world", Some(head))?;
  println!("crc32(\"hello \" then \"world\") = {full}");
  assert_eq!(full, 222_957_957);

  let signed = CRCJAM.signed("hello world", None)?;
  println!("crcjam signed                   = {signed}");
  assert_eq!(signed, -222_957_958);

  let frame = CRC16MODBUS.unsigned(&[0x01u8, 0x03, 0x00, 0x00, 0x00, 0x0A], None)?;
  println!("modbus frame check              = 0x{frame:04X}\n");
  Ok(())
}

/// Typed hashers implement the `Checksum` trait.
fn streaming() {
  println!("--- Streaming ---\n");

  let mut hasher = Crc32::new();
  for chunk in [&b"1234"[..], b"5", b"6789"] {
    hasher.update(chunk);
  }
  println!("CRC-32 streaming:  0x{:08X}", hasher.finalize());
  assert_eq!(hasher.finalize(), Crc32::checksum(b"123456789"));

  let resumed = {
    let mut h = Crc24::resume(Crc24::checksum(b"1234"));
    h.update(b"56789");
    h.finalize()
  };
  println!("CRC-24 resumed:    0x{resumed:06X}\n");
  assert_eq!(resumed, 0x21_CF02);
}

/// Text in other encodings.
fn encodings() -> Result<(), checksum::Error> {
  println!("--- Encodings ---\n");
  let from_hex = CRC32.unsigned(&Text::new("313233343536373839", Encoding::Hex), None)?;
  let from_b64 = CRC32.unsigned(&Text::new("MTIzNDU2Nzg5", Encoding::Base64), None)?;
  println!("hex:    0x{from_hex:08X}");
  println!("base64: 0x{from_b64:08X}");
  assert_eq!(from_hex, from_b64);
  Ok(())
}
