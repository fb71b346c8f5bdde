//! Process-wide kernel choice.
//!
//! A [`Dispatcher`] owns a selector function. The first call runs it and
//! stores the returned [`Selected`] kernel; every later call reuses it.
//!
//! ```ignore
//! use backend::dispatch::{Dispatcher, Selected};
//!
//! type Kernel = fn(&Model, u32, &[u8]) -> u32;
//!
//! fn choose() -> Selected<Kernel> {
//!   if config().force == CrcForce::Reference {
//!     Selected::new("reference/bitwise", reference)
//!   } else {
//!     Selected::new("portable/auto", auto)
//!   }
//! }
//!
//! static KERNEL: Dispatcher<Kernel> = Dispatcher::new(choose);
//!
//! let acc = KERNEL.call_with(|kernel| kernel(model, acc, data));
//! ```

use crate::cache::OnceCache;

/// A kernel paired with the name reported for diagnostics.
#[derive(Clone, Copy, Debug)]
pub struct Selected<F> {
  pub name: &'static str,
  pub func: F,
}

impl<F> Selected<F> {
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, func: F) -> Self {
    Self { name, func }
  }
}

/// Lazily selected kernel of type `F`, usually a function pointer.
pub struct Dispatcher<F: Copy + 'static> {
  selector: fn() -> Selected<F>,
  chosen: OnceCache<Selected<F>>,
}

impl<F: Copy + Send + Sync + 'static> Dispatcher<F> {
  #[must_use]
  pub const fn new(selector: fn() -> Selected<F>) -> Self {
    Self { selector, chosen: OnceCache::new() }
  }

  /// The selection, running the selector if nothing is stored yet.
  #[inline]
  #[must_use]
  pub fn get(&self) -> Selected<F> {
    self.chosen.get_or_init(self.selector)
  }

  #[inline]
  #[must_use]
  pub fn backend_name(&self) -> &'static str {
    self.get().name
  }

  #[inline]
  #[must_use]
  pub fn kernel(&self) -> F {
    self.get().func
  }

  #[inline]
  pub fn call_with<R>(&self, f: impl FnOnce(F) -> R) -> R {
    f(self.kernel())
  }
}

#[cfg(test)]
mod tests {
  use super::{Dispatcher, Selected};

  type Kernel = fn(u32, &[u8]) -> u32;

  fn xor_fold(acc: u32, data: &[u8]) -> u32 {
    data.iter().fold(acc, |a, &b| a ^ u32::from(b))
  }

  fn add_fold(acc: u32, data: &[u8]) -> u32 {
    data.iter().fold(acc, |a, &b| a.wrapping_add(u32::from(b)))
  }

  fn pick_add() -> Selected<Kernel> {
    Selected::new("test/add", add_fold)
  }

  #[test]
  fn selected_calls_through() {
    let xor: Selected<Kernel> = Selected::new("test/xor", xor_fold);
    assert_eq!(xor.name, "test/xor");
    assert_eq!((xor.func)(0xF0, &[0x0F]), 0xFF);
  }

  #[test]
  fn selection_is_stable() {
    static KERNEL: Dispatcher<Kernel> = Dispatcher::new(pick_add);
    assert_eq!(KERNEL.backend_name(), "test/add");
    assert_eq!(KERNEL.get().name, KERNEL.backend_name());
    assert_eq!(KERNEL.call_with(|k| k(1, b"\x01\x02")), 4);
  }

  #[test]
  fn dispatcher_is_shareable() {
    fn shareable<T: Send + Sync>() {}
    shareable::<Dispatcher<Kernel>>();
  }
}
