//! Differential fuzzing against the `crc` crate.

#![no_main]

use checksum::{CRC8, CRC16MODBUS, CRC16XMODEM, CRC24, CRC32, CRC32MPEG2};
use libfuzzer_sys::fuzz_target;

const CRC_8_SMBUS: crc::Crc<u8> = crc::Crc::<u8>::new(&crc::CRC_8_SMBUS);
const CRC_16_MODBUS: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_MODBUS);
const CRC_16_XMODEM: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_XMODEM);
const CRC_24_OPENPGP: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_24_OPENPGP);
const CRC_32_ISO_HDLC: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);
const CRC_32_MPEG_2: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_MPEG_2);

fuzz_target!(|data: &[u8]| {
  let pairs = [
    ("crc8", CRC8.compute(data, None), u32::from(CRC_8_SMBUS.checksum(data))),
    ("crc16modbus", CRC16MODBUS.compute(data, None), u32::from(CRC_16_MODBUS.checksum(data))),
    ("crc16xmodem", CRC16XMODEM.compute(data, None), u32::from(CRC_16_XMODEM.checksum(data))),
    ("crc24", CRC24.compute(data, None), CRC_24_OPENPGP.checksum(data)),
    ("crc32", CRC32.compute(data, None), CRC_32_ISO_HDLC.checksum(data)),
    ("crc32mpeg2", CRC32MPEG2.compute(data, None), CRC_32_MPEG_2.checksum(data)),
  ];
  for (name, ours, reference) in pairs {
    assert_eq!(ours, reference, "{name} differential mismatch: ours={ours:#x}, reference={reference:#x}, len={}", data.len());
  }
});
