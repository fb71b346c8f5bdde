//! The polynomial model catalogue.
//!
//! | Registry | Model | Catalogue | Width | Poly | Init | RefIn/Out | XorOut |
//! |----------|-------|-----------|-------|------|------|-----------|--------|
//! | `crc8` | `crc-8` | CRC-8/SMBUS | 8 | 0x07 | 0x00 | no | 0x00 |
//! | `crc81wire` | `dallas-1-wire` | CRC-8/MAXIM-DOW | 8 | 0x31 | 0x00 | yes | 0x00 |
//! | `crc8dvbs2` | `crc-8-dvbs2` | CRC-8/DVB-S2 | 8 | 0xD5 | 0x00 | no | 0x00 |
//! | `crc16` | `crc-16` | CRC-16/ARC | 16 | 0x8005 | 0x0000 | yes | 0x0000 |
//! | `crc16ccitt` | `ccitt` | CRC-16/IBM-3740 | 16 | 0x1021 | 0xFFFF | no | 0x0000 |
//! | `crc16modbus` | `crc-16-modbus` | CRC-16/MODBUS | 16 | 0x8005 | 0xFFFF | yes | 0x0000 |
//! | `crc16xmodem` | `xmodem` | CRC-16/XMODEM | 16 | 0x1021 | 0x0000 | no | 0x0000 |
//! | `crc16kermit` | `kermit` | CRC-16/KERMIT | 16 | 0x1021 | 0x0000 | yes | 0x0000 |
//! | `crc24` | `crc-24` | CRC-24/OPENPGP | 24 | 0x864CFB | 0xB704CE | no | 0x000000 |
//! | `crc32` | `crc-32` | CRC-32/ISO-HDLC | 32 | 0x04C11DB7 | 0xFFFFFFFF | yes | 0xFFFFFFFF |
//! | `crc32mpeg2` | `crc-32-mpeg` | CRC-32/MPEG-2 | 32 | 0x04C11DB7 | 0xFFFFFFFF | no | 0x00000000 |
//! | `crcjam` | `jam` | CRC-32/JAMCRC | 32 | 0x04C11DB7 | 0xFFFFFFFF | yes | 0x00000000 |
//!
//! Check values are asserted against the bitwise recurrence at compile time.

define_model! {
  /// CRC-8 as used by SMBus packet error checking.
  CRC8_SMBUS, CRC8, Crc8Algorithm, Crc8 {
    registry: "crc8",
    model: "crc-8",
    catalogue: "CRC-8/SMBUS",
    width: 8,
    poly: 0x07,
    init: 0x00,
    refin: false,
    refout: false,
    xorout: 0x00,
    check: 0xF4,
  }
}

define_model! {
  /// Dallas/Maxim 1-Wire CRC-8.
  CRC8_MAXIM_DOW, CRC81WIRE, Crc81WireAlgorithm, Crc81Wire {
    registry: "crc81wire",
    model: "dallas-1-wire",
    catalogue: "CRC-8/MAXIM-DOW",
    width: 8,
    poly: 0x31,
    init: 0x00,
    refin: true,
    refout: true,
    xorout: 0x00,
    check: 0xA1,
  }
}

define_model! {
  /// CRC-8 from the DVB-S2 baseband frame header.
  CRC8_DVB_S2, CRC8DVBS2, Crc8Dvbs2Algorithm, Crc8Dvbs2 {
    registry: "crc8dvbs2",
    model: "crc-8-dvbs2",
    catalogue: "CRC-8/DVB-S2",
    width: 8,
    poly: 0xD5,
    init: 0x00,
    refin: false,
    refout: false,
    xorout: 0x00,
    check: 0xBC,
  }
}

define_model! {
  /// The classic ARC/LHA CRC-16.
  CRC16_ARC, CRC16, Crc16Algorithm, Crc16 {
    registry: "crc16",
    model: "crc-16",
    catalogue: "CRC-16/ARC",
    width: 16,
    poly: 0x8005,
    init: 0x0000,
    refin: true,
    refout: true,
    xorout: 0x0000,
    check: 0xBB3D,
  }
}

define_model! {
  /// CCITT-FALSE: IBM 3740 diskette format.
  CRC16_IBM_3740, CRC16CCITT, Crc16CcittAlgorithm, Crc16Ccitt {
    registry: "crc16ccitt",
    model: "ccitt",
    catalogue: "CRC-16/IBM-3740",
    width: 16,
    poly: 0x1021,
    init: 0xFFFF,
    refin: false,
    refout: false,
    xorout: 0x0000,
    check: 0x29B1,
  }
}

define_model! {
  /// Modbus RTU frame check.
  CRC16_MODBUS, CRC16MODBUS, Crc16ModbusAlgorithm, Crc16Modbus {
    registry: "crc16modbus",
    model: "crc-16-modbus",
    catalogue: "CRC-16/MODBUS",
    width: 16,
    poly: 0x8005,
    init: 0xFFFF,
    refin: true,
    refout: true,
    xorout: 0x0000,
    check: 0x4B37,
  }
}

define_model! {
  /// XMODEM / ZMODEM block check.
  CRC16_XMODEM, CRC16XMODEM, Crc16XmodemAlgorithm, Crc16Xmodem {
    registry: "crc16xmodem",
    model: "xmodem",
    catalogue: "CRC-16/XMODEM",
    width: 16,
    poly: 0x1021,
    init: 0x0000,
    refin: false,
    refout: false,
    xorout: 0x0000,
    check: 0x31C3,
  }
}

define_model! {
  /// Kermit protocol block check.
  CRC16_KERMIT, CRC16KERMIT, Crc16KermitAlgorithm, Crc16Kermit {
    registry: "crc16kermit",
    model: "kermit",
    catalogue: "CRC-16/KERMIT",
    width: 16,
    poly: 0x1021,
    init: 0x0000,
    refin: true,
    refout: true,
    xorout: 0x0000,
    check: 0x2189,
  }
}

define_model! {
  /// OpenPGP ASCII armor checksum (RFC 4880).
  CRC24_OPENPGP, CRC24, Crc24Algorithm, Crc24 {
    registry: "crc24",
    model: "crc-24",
    catalogue: "CRC-24/OPENPGP",
    width: 24,
    poly: 0x86_4CFB,
    init: 0xB7_04CE,
    refin: false,
    refout: false,
    xorout: 0x00_0000,
    check: 0x21_CF02,
  }
}

define_model! {
  /// The ubiquitous CRC-32 of Ethernet, gzip, zip and PNG.
  CRC32_ISO_HDLC, CRC32, Crc32Algorithm, Crc32 {
    registry: "crc32",
    model: "crc-32",
    catalogue: "CRC-32/ISO-HDLC",
    width: 32,
    poly: 0x04C1_1DB7,
    init: 0xFFFF_FFFF,
    refin: true,
    refout: true,
    xorout: 0xFFFF_FFFF,
    check: 0xCBF4_3926,
  }
}

define_model! {
  /// MPEG-2 transport stream section CRC.
  CRC32_MPEG_2, CRC32MPEG2, Crc32Mpeg2Algorithm, Crc32Mpeg2 {
    registry: "crc32mpeg2",
    model: "crc-32-mpeg",
    catalogue: "CRC-32/MPEG-2",
    width: 32,
    poly: 0x04C1_1DB7,
    init: 0xFFFF_FFFF,
    refin: false,
    refout: false,
    xorout: 0x0000_0000,
    check: 0x0376_E6E7,
  }
}

define_model! {
  /// CRC-32 without the final inversion.
  CRC32_JAMCRC, CRCJAM, CrcJamAlgorithm, CrcJam {
    registry: "crcjam",
    model: "jam",
    catalogue: "CRC-32/JAMCRC",
    width: 32,
    poly: 0x04C1_1DB7,
    init: 0xFFFF_FFFF,
    refin: true,
    refout: true,
    xorout: 0x0000_0000,
    check: 0x340B_C6D9,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Model;

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

  #[test]
  fn check_values_hold_on_every_kernel() {
    for model in MODELS {
      let check = model.params().check;
      let acc = model.init_accumulator();
      for (name, kernel) in crate::common::kernels::ALL {
        let got = model.finalize(kernel(model, acc, b"123456789"));
        assert_eq!(got, check, "{} on {name}", model.name());
      }
    }
  }

  #[test]
  fn hello_world_vectors() {
    let expected: [u32; 12] = [
      0xA8, 0x31, 0x3B, 0x39C1, 0xEFEB, 0xDDC7, 0x3BE4, 0xA1D2, 0xB0_3CB7, 0x0D4A_1185, 0xBB08_EC87, 0xF2B5_EE7A,
    ];
    for (model, want) in MODELS.iter().zip(expected) {
      assert_eq!(model.checksum(b"hello world"), want, "{}", model.name());
    }
  }

  #[test]
  fn empty_input_is_init_through_finalize() {
    let expected: [u32; 12] = [0, 0, 0, 0, 0xFFFF, 0xFFFF, 0, 0, 0xB7_04CE, 0, 0xFFFF_FFFF, 0xFFFF_FFFF];
    for (model, want) in MODELS.iter().zip(expected) {
      assert_eq!(model.checksum(b""), want, "{}", model.name());
    }
  }

  #[test]
  fn results_fit_width() {
    let data: [u8; 37] = core::array::from_fn(|i| (i as u8).wrapping_mul(151).wrapping_add(7));
    for model in MODELS {
      assert_eq!(model.checksum(&data) & !model.params().mask(), 0, "{}", model.name());
    }
  }
}
