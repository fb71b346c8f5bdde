//! Text encodings.
//!
//! Text is turned into bytes through one of a closed set of encodings. UTF-8
//! is the default and borrows; every other encoding allocates.

use alloc::vec::Vec;
use core::{fmt, str::FromStr};

use base64::{
  Engine as _, alphabet,
  engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use traits::{Error, InvalidInput};

use super::{CanonicalBytes, Normalize};

const BASE64_CONFIG: GeneralPurposeConfig = GeneralPurposeConfig::new()
  .with_decode_padding_mode(DecodePaddingMode::Indifferent)
  .with_decode_allow_trailing_bits(true);

const BASE64_STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, BASE64_CONFIG);
const BASE64_URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, BASE64_CONFIG);

/// Text encoding used to turn a string into bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
  /// The UTF-8 bytes of the string.
  #[default]
  Utf8,
  /// Low byte of each UTF-16 code unit.
  Latin1,
  /// UTF-16 code units, little endian.
  Utf16Le,
  /// Standard or URL-safe alphabet; padding optional, ASCII whitespace ignored.
  Base64,
  /// Pairs of hex digits, either case.
  Hex,
}

impl Encoding {
  /// Canonical lowercase name.
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Utf8 => "utf8",
      Self::Latin1 => "latin1",
      Self::Utf16Le => "utf16le",
      Self::Base64 => "base64",
      Self::Hex => "hex",
    }
  }

  /// Encode `text` into bytes.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidInput::MalformedText`] when `text` is not valid Base64
  /// or Hex for those encodings.
  pub fn encode(self, text: &str) -> Result<CanonicalBytes<'_>, Error> {
    let bytes = match self {
      Self::Utf8 => return Ok(CanonicalBytes::borrowed(text.as_bytes())),
      Self::Latin1 => text.encode_utf16().map(|unit| unit as u8).collect(),
      Self::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
      Self::Base64 => decode_base64(text)?,
      Self::Hex => hex::decode(text).map_err(|_| InvalidInput::MalformedText(self.as_str()))?,
    };
    Ok(CanonicalBytes::owned(bytes))
  }
}

fn decode_base64(text: &str) -> Result<Vec<u8>, InvalidInput> {
  let compact: Vec<u8> = text.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
  BASE64_STANDARD
    .decode(&compact)
    .or_else(|_| BASE64_URL_SAFE.decode(&compact))
    .map_err(|_| InvalidInput::MalformedText(Encoding::Base64.as_str()))
}

impl fmt::Display for Encoding {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Encoding {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    const NAMES: [(&str, Encoding); 13] = [
      ("utf8", Encoding::Utf8),
      ("utf-8", Encoding::Utf8),
      ("latin1", Encoding::Latin1),
      ("binary", Encoding::Latin1),
      ("ascii", Encoding::Latin1),
      ("utf16le", Encoding::Utf16Le),
      ("utf-16le", Encoding::Utf16Le),
      ("ucs2", Encoding::Utf16Le),
      ("ucs-2", Encoding::Utf16Le),
      ("base64", Encoding::Base64),
      ("base64url", Encoding::Base64),
      ("hex", Encoding::Hex),
      ("hexadecimal", Encoding::Hex),
    ];
    NAMES
      .iter()
      .find(|(name, _)| name.eq_ignore_ascii_case(s))
      .map(|&(_, encoding)| encoding)
      .ok_or(Error::UnknownEncoding)
  }
}

/// A string paired with the encoding that turns it into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Text<'a> {
  text: &'a str,
  encoding: Encoding,
}

impl<'a> Text<'a> {
  #[inline]
  #[must_use]
  pub const fn new(text: &'a str, encoding: Encoding) -> Self {
    Self { text, encoding }
  }

  #[inline]
  #[must_use]
  pub const fn utf8(text: &'a str) -> Self {
    Self::new(text, Encoding::Utf8)
  }

  #[inline]
  #[must_use]
  pub const fn text(&self) -> &'a str {
    self.text
  }

  #[inline]
  #[must_use]
  pub const fn encoding(&self) -> Encoding {
    self.encoding
  }

  /// Decode into bytes that may borrow from the wrapped string.
  ///
  /// Unlike [`Normalize::normalize`], the result outlives the `Text` value
  /// itself.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidInputKind`] if the text is malformed for its encoding.
  #[inline]
  pub fn to_bytes(self) -> Result<CanonicalBytes<'a>, Error> {
    self.encoding.encode(self.text)
  }
}

impl Normalize for Text<'_> {
  #[inline]
  fn normalize(&self) -> Result<CanonicalBytes<'_>, Error> {
    self.encoding.encode(self.text)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_names() {
    assert_eq!("UTF-8".parse::<Encoding>(), Ok(Encoding::Utf8));
    assert_eq!("binary".parse::<Encoding>(), Ok(Encoding::Latin1));
    assert_eq!("UCS2".parse::<Encoding>(), Ok(Encoding::Utf16Le));
    assert_eq!("base64url".parse::<Encoding>(), Ok(Encoding::Base64));
    assert_eq!("Hex".parse::<Encoding>(), Ok(Encoding::Hex));
    assert_eq!("ebcdic".parse::<Encoding>(), Err(Error::UnknownEncoding));
    assert_eq!(Encoding::default(), Encoding::Utf8);
  }

  #[test]
  fn utf8_borrows() {
    let out = Text::utf8("héllo").to_bytes().unwrap();
    assert!(out.is_borrowed());
    assert_eq!(out.as_bytes(), "héllo".as_bytes());
  }

  #[test]
  fn latin1_takes_low_byte() {
    let out = Text::new("héllo", Encoding::Latin1).to_bytes().unwrap();
    assert_eq!(out.as_bytes(), &[b'h', 0xE9, b'l', b'l', b'o']);
    let out = Text::new("€", Encoding::Latin1).to_bytes().unwrap();
    assert_eq!(out.as_bytes(), &[0xAC]);
  }

  #[test]
  fn utf16le_units() {
    let out = Text::new("aé", Encoding::Utf16Le).to_bytes().unwrap();
    assert_eq!(out.as_bytes(), &[0x61, 0x00, 0xE9, 0x00]);
  }

  #[test]
  fn base64_variants() {
    let padded = Text::new("RaLf8Q==", Encoding::Base64).to_bytes().unwrap();
    let bare = Text::new("RaLf8Q", Encoding::Base64).to_bytes().unwrap();
    let spaced = Text::new(" RaLf\n8Q== ", Encoding::Base64).to_bytes().unwrap();
    assert_eq!(padded.as_bytes(), &[0x45, 0xA2, 0xDF, 0xF1]);
    assert_eq!(bare, padded);
    assert_eq!(spaced, padded);

    let url = Text::new("-_8", Encoding::Base64).to_bytes().unwrap();
    let std = Text::new("+/8", Encoding::Base64).to_bytes().unwrap();
    assert_eq!(url, std);
  }

  #[test]
  fn hex_either_case() {
    let lower = Text::new("45a2dff1", Encoding::Hex).to_bytes().unwrap();
    let upper = Text::new("45A2DFF1", Encoding::Hex).to_bytes().unwrap();
    assert_eq!(lower.as_bytes(), &[0x45, 0xA2, 0xDF, 0xF1]);
    assert_eq!(lower, upper);
  }

  #[test]
  fn decoded_bytes_outlive_the_wrapper() {
    let source = alloc::string::String::from("utf-8 text");
    let bytes = {
      let text = Text::utf8(&source);
      text.to_bytes().unwrap()
    };
    assert!(bytes.is_borrowed());
    assert_eq!(bytes.as_bytes(), source.as_bytes());

    let text = Text::new("45a2", Encoding::Hex);
    assert_eq!(text.normalize().unwrap(), text.to_bytes().unwrap());
  }

  #[test]
  fn malformed_text_is_rejected() {
    let err = Text::new("abc", Encoding::Hex).to_bytes().unwrap_err();
    assert_eq!(err, Error::InvalidInputKind(InvalidInput::MalformedText("hex")));
    let err = Text::new("zz", Encoding::Hex).to_bytes().unwrap_err();
    assert_eq!(err, Error::InvalidInputKind(InvalidInput::MalformedText("hex")));
    let err = Text::new("*!", Encoding::Base64).to_bytes().unwrap_err();
    assert_eq!(err, Error::InvalidInputKind(InvalidInput::MalformedText("base64")));
  }
}
