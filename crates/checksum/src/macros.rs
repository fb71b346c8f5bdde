//! Internal macros for CRC model generation and diagnostics.
//!
//! [`define_model!`] eliminates the boilerplate of declaring a catalogue
//! entry: every model is the same generic engine fed different parameters.

/// Declare a polynomial CRC model.
///
/// This macro creates:
/// - a `static` [`Model`](crate::Model) with compile-time tables
/// - a compile-time assertion that the bitwise check value matches
/// - a `static` [`Calculator`](crate::Calculator) bound to the registry name
/// - a marker type implementing [`Algorithm`](crate::Algorithm)
/// - a streaming hasher alias `Crc<Marker>`
macro_rules! define_model {
  (
    $(#[$outer:meta])*
    $model:ident, $calculator:ident, $marker:ident, $alias:ident {
      registry: $registry:literal,
      model: $model_name:literal,
      catalogue: $catalogue:literal,
      width: $width:literal,
      poly: $poly:literal,
      init: $init:literal,
      refin: $refin:literal,
      refout: $refout:literal,
      xorout: $xorout:literal,
      check: $check:literal $(,)?
    }
  ) => {
    #[doc = concat!("`", $catalogue, "` model descriptor.")]
    pub static $model: $crate::Model = $crate::Model::new($catalogue, $crate::Params {
      width: $width,
      poly: $poly,
      init: $init,
      refin: $refin,
      refout: $refout,
      xorout: $xorout,
      check: $check,
    });

    const _: () = {
      const PARAMS: $crate::Params = $crate::Params {
        width: $width,
        poly: $poly,
        init: $init,
        refin: $refin,
        refout: $refout,
        xorout: $xorout,
        check: $check,
      };
      assert!(
        $crate::common::reference::checksum(&PARAMS, b"123456789") == PARAMS.check,
        concat!($catalogue, " check value mismatch")
      );
    };

    $(#[$outer])*
    pub static $calculator: $crate::Calculator = $crate::Calculator::polynomial($registry, $model_name, &$model);

    #[doc = concat!("Marker type for `", $catalogue, "`.")]
    #[derive(Debug, Clone, Copy)]
    pub enum $marker {}

    impl $crate::Algorithm for $marker {
      const WIDTH: u8 = $width;

      #[inline]
      fn calculator() -> &'static $crate::Calculator {
        &$calculator
      }
    }

    #[doc = concat!("Streaming `", $catalogue, "` hasher.")]
    pub type $alias = $crate::Crc<$marker>;
  };
}

/// Emit a `tracing` debug event when the `tracing` feature is enabled.
macro_rules! debug_event {
  ($($arg:tt)*) => {
    #[cfg(feature = "tracing")]
    {
      ::tracing::debug!($($arg)*);
    }
  };
}

/// Emit a `tracing` warning when the `tracing` feature is enabled.
#[cfg_attr(not(feature = "std"), allow(unused_macros))]
macro_rules! warn_event {
  ($($arg:tt)*) => {
    #[cfg(feature = "tracing")]
    {
      ::tracing::warn!($($arg)*);
    }
  };
}
