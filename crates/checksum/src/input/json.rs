//! Normalization of dynamically shaped JSON values.
//!
//! Numeric arrays follow typed-array conversion: fractional values truncate
//! toward zero, then every element wraps modulo 256.

use alloc::{string::String, vec::Vec};

use serde_json::{Number, Value};
use traits::{Error, InvalidInput};

use super::{CanonicalBytes, Normalize};

fn wrap_byte(n: &Number) -> u8 {
  if let Some(v) = n.as_i64() {
    return v.rem_euclid(256) as u8;
  }
  if let Some(v) = n.as_u64() {
    return v as u8;
  }
  // `%` is exact for floats, so reduce before truncating; a plain `as` cast
  // would saturate at the integer bounds. NaN and infinities become 0.
  n.as_f64().map_or(0, |f| ((f % 256.0) as i64).rem_euclid(256) as u8)
}

fn array_bytes(items: &[Value]) -> Result<Vec<u8>, InvalidInput> {
  items
    .iter()
    .map(|item| match item {
      Value::Number(n) => Ok(wrap_byte(n)),
      _ => Err(InvalidInput::NonNumericElement),
    })
    .collect()
}

/// `{"type": "Buffer", "data": [..]}`, the serialized form of a byte buffer.
fn buffer_data(map: &serde_json::Map<String, Value>) -> Option<&[Value]> {
  match (map.get("type"), map.get("data")) {
    (Some(Value::String(kind)), Some(Value::Array(data))) if kind == "Buffer" => Some(data),
    _ => None,
  }
}

impl Normalize for Value {
  fn normalize(&self) -> Result<CanonicalBytes<'_>, Error> {
    match self {
      Self::String(s) => Ok(CanonicalBytes::borrowed(s.as_bytes())),
      Self::Array(items) => Ok(CanonicalBytes::owned(array_bytes(items)?)),
      Self::Object(map) => match buffer_data(map) {
        Some(data) => Ok(CanonicalBytes::owned(array_bytes(data)?)),
        None => Err(InvalidInput::Object.into()),
      },
      Self::Null => Err(InvalidInput::Null.into()),
      Self::Bool(_) => Err(InvalidInput::Bool.into()),
      Self::Number(_) => Err(InvalidInput::Number.into()),
    }
  }
}
