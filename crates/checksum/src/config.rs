//! CRC runtime configuration (kernel overrides + thresholds).
//!
//! This module centralizes the kernel selection knobs shared by every model:
//! - an optional forced kernel
//! - the buffer length where slice-by-8 takes over from slice-by-4
//!
//! Overrides come from the environment and are read once per process:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `CRCKIT_FORCE` | `auto`, `reference`/`bitwise`, `slice4`, `slice8` |
//! | `CRCKIT_THRESHOLD_SLICE4_TO_SLICE8` | bytes |
//!
//! Without `std`, defaults apply.

/// Forced kernel selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CrcForce {
  /// Slice-by-4 for short buffers, slice-by-8 for long ones.
  #[default]
  Auto,
  /// Force the bitwise reference kernel.
  Reference,
  /// Force the slice-by-4 kernel.
  Slice4,
  /// Force the slice-by-8 kernel.
  Slice8,
}

impl CrcForce {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Reference => "reference",
      Self::Slice4 => "slice4",
      Self::Slice8 => "slice8",
    }
  }

  /// Parse an override value (case-insensitive, surrounding whitespace ignored).
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") || value.eq_ignore_ascii_case("portable") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("reference") || value.eq_ignore_ascii_case("bitwise") {
      return Some(Self::Reference);
    }
    if value.eq_ignore_ascii_case("slice4") {
      return Some(Self::Slice4);
    }
    if value.eq_ignore_ascii_case("slice8") {
      return Some(Self::Slice8);
    }
    None
  }
}

/// Kernel selection tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcTunables {
  /// Bytes where slice-by-8 becomes faster than slice-by-4.
  pub slice4_to_slice8: usize,
}

impl CrcTunables {
  pub const DEFAULT: Self = Self { slice4_to_slice8: 64 };
}

impl Default for CrcTunables {
  #[inline]
  fn default() -> Self {
    Self::DEFAULT
  }
}

/// Full CRC runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CrcConfig {
  /// Requested force mode.
  pub requested_force: CrcForce,
  /// Thresholds used by the auto selector.
  pub tunables: CrcTunables,
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  force: CrcForce,
  slice4_to_slice8: Option<usize>,
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn var(name: &str) -> Option<std::string::String> {
    let value = std::env::var(name).ok()?;
    if value.trim().is_empty() { None } else { Some(value) }
  }

  let force = var("CRCKIT_FORCE").and_then(|value| {
    let parsed = CrcForce::parse(&value);
    if parsed.is_none() {
      warn_event!(variable = "CRCKIT_FORCE", value = %value, "ignoring unrecognized kernel override");
    }
    parsed
  });

  let slice4_to_slice8 = var("CRCKIT_THRESHOLD_SLICE4_TO_SLICE8").and_then(|value| {
    let parsed = value.trim().parse::<usize>().ok();
    if parsed.is_none() {
      warn_event!(variable = "CRCKIT_THRESHOLD_SLICE4_TO_SLICE8", value = %value, "ignoring non-numeric threshold");
    }
    parsed
  });

  Overrides { force: force.unwrap_or_default(), slice4_to_slice8 }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

fn apply(ov: Overrides) -> CrcConfig {
  let mut tunables = CrcTunables::DEFAULT;
  if let Some(v) = ov.slice4_to_slice8 {
    tunables.slice4_to_slice8 = v;
  }
  CrcConfig { requested_force: ov.force, tunables }
}

/// Get the effective CRC configuration.
#[inline]
#[must_use]
pub fn get() -> CrcConfig {
  apply(overrides())
}
