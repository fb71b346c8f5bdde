//! Differential tests against the `crc` crate.

use checksum::{
  CRC8, CRC8DVBS2, CRC16, CRC16CCITT, CRC16KERMIT, CRC16MODBUS, CRC16XMODEM, CRC24, CRC32, CRC32MPEG2, CRC81WIRE, CRCJAM,
  Calculator,
};
use proptest::prelude::*;

const CRC_8_SMBUS: crc::Crc<u8> = crc::Crc::<u8>::new(&crc::CRC_8_SMBUS);
const CRC_8_MAXIM_DOW: crc::Crc<u8> = crc::Crc::<u8>::new(&crc::CRC_8_MAXIM_DOW);
const CRC_8_DVB_S2: crc::Crc<u8> = crc::Crc::<u8>::new(&crc::CRC_8_DVB_S2);
const CRC_16_ARC: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_ARC);
const CRC_16_IBM_3740: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_IBM_3740);
const CRC_16_MODBUS: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_MODBUS);
const CRC_16_XMODEM: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_XMODEM);
const CRC_16_KERMIT: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_KERMIT);
const CRC_24_OPENPGP: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_24_OPENPGP);
const CRC_32_ISO_HDLC: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);
const CRC_32_MPEG_2: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_MPEG_2);
const CRC_32_JAMCRC: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_JAMCRC);

fn external(calc: &Calculator, data: &[u8]) -> u32 {
  match calc.name() {
    "crc8" => u32::from(CRC_8_SMBUS.checksum(data)),
    "crc81wire" => u32::from(CRC_8_MAXIM_DOW.checksum(data)),
    "crc8dvbs2" => u32::from(CRC_8_DVB_S2.checksum(data)),
    "crc16" => u32::from(CRC_16_ARC.checksum(data)),
    "crc16ccitt" => u32::from(CRC_16_IBM_3740.checksum(data)),
    "crc16modbus" => u32::from(CRC_16_MODBUS.checksum(data)),
    "crc16xmodem" => u32::from(CRC_16_XMODEM.checksum(data)),
    "crc16kermit" => u32::from(CRC_16_KERMIT.checksum(data)),
    "crc24" => CRC_24_OPENPGP.checksum(data),
    "crc32" => CRC_32_ISO_HDLC.checksum(data),
    "crc32mpeg2" => CRC_32_MPEG_2.checksum(data),
    "crcjam" => CRC_32_JAMCRC.checksum(data),
    other => panic!("no external reference for {other}"),
  }
}

static POLYNOMIAL: [&Calculator; 12] = [
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

#[test]
fn catalogue_parameters_match() {
  let params = [
    (crc::CRC_8_SMBUS.poly as u32, crc::CRC_8_SMBUS.init as u32, crc::CRC_8_SMBUS.check as u32),
    (crc::CRC_8_MAXIM_DOW.poly as u32, crc::CRC_8_MAXIM_DOW.init as u32, crc::CRC_8_MAXIM_DOW.check as u32),
    (crc::CRC_8_DVB_S2.poly as u32, crc::CRC_8_DVB_S2.init as u32, crc::CRC_8_DVB_S2.check as u32),
    (crc::CRC_16_ARC.poly as u32, crc::CRC_16_ARC.init as u32, crc::CRC_16_ARC.check as u32),
    (crc::CRC_16_IBM_3740.poly as u32, crc::CRC_16_IBM_3740.init as u32, crc::CRC_16_IBM_3740.check as u32),
    (crc::CRC_16_MODBUS.poly as u32, crc::CRC_16_MODBUS.init as u32, crc::CRC_16_MODBUS.check as u32),
    (crc::CRC_16_XMODEM.poly as u32, crc::CRC_16_XMODEM.init as u32, crc::CRC_16_XMODEM.check as u32),
    (crc::CRC_16_KERMIT.poly as u32, crc::CRC_16_KERMIT.init as u32, crc::CRC_16_KERMIT.check as u32),
    (crc::CRC_24_OPENPGP.poly, crc::CRC_24_OPENPGP.init, crc::CRC_24_OPENPGP.check),
    (crc::CRC_32_ISO_HDLC.poly, crc::CRC_32_ISO_HDLC.init, crc::CRC_32_ISO_HDLC.check),
    (crc::CRC_32_MPEG_2.poly, crc::CRC_32_MPEG_2.init, crc::CRC_32_MPEG_2.check),
    (crc::CRC_32_JAMCRC.poly, crc::CRC_32_JAMCRC.init, crc::CRC_32_JAMCRC.check),
  ];
  for (calc, (poly, init, check)) in POLYNOMIAL.iter().zip(params) {
    let ours = calc.params().unwrap();
    assert_eq!((ours.poly, ours.init, ours.check), (poly, init, check), "{}", calc.name());
  }
}

#[test]
fn fixed_lengths_match() {
  let data: Vec<u8> = (0..4096u32).map(|i| (i.wrapping_mul(2_654_435_761) >> 13) as u8).collect();
  for calc in POLYNOMIAL {
    for len in [0, 1, 3, 4, 5, 7, 8, 9, 15, 16, 17, 63, 64, 65, 127, 128, 1000, 4096] {
      assert_eq!(calc.compute(&data[..len], None), external(calc, &data[..len]), "{} len={len}", calc.name());
    }
  }
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(128))]

  #[test]
  fn random_inputs_match(data in proptest::collection::vec(any::<u8>(), 0..=2048)) {
    for calc in POLYNOMIAL {
      prop_assert_eq!(calc.compute(&data, None), external(calc, &data), "{}", calc.name());
    }
  }

  #[test]
  fn streaming_matches_external_digest(
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    split in any::<usize>(),
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let mut digest = CRC_32_ISO_HDLC.digest();
    digest.update(a);
    digest.update(b);
    let expected = digest.finalize();

    let mut hasher = CRC32.hasher();
    hasher.update(a);
    hasher.update(b);
    prop_assert_eq!(hasher.finalize(), expected);
    prop_assert_eq!(CRC32.compute(b, Some(CRC32.compute(a, None))), expected);
  }
}
