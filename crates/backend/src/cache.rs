//! Write-once storage for kernel selections and tunables.
//!
//! With `std` this is a thin wrapper over [`std::sync::OnceLock`]. Without
//! `std`, targets that have pointer-sized atomics publish the value through a
//! small state word; targets without atomics recompute on every call.

#[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
mod spin {
  use core::{
    cell::UnsafeCell,
    mem::MaybeUninit,
    sync::atomic::{AtomicU8, Ordering},
  };

  const EMPTY: u8 = 0;
  const WRITING: u8 = 1;
  const FILLED: u8 = 2;

  pub(super) struct Slot<T> {
    state: AtomicU8,
    value: UnsafeCell<MaybeUninit<T>>,
  }

  impl<T: Copy> Slot<T> {
    pub(super) const fn new() -> Self {
      Self { state: AtomicU8::new(EMPTY), value: UnsafeCell::new(MaybeUninit::uninit()) }
    }

    #[inline]
    fn read(&self) -> T {
      // SAFETY: only called after observing FILLED with Acquire ordering.
      #[allow(unsafe_code)]
      unsafe {
        (*self.value.get()).assume_init()
      }
    }

    #[inline]
    pub(super) fn get(&self) -> Option<T> {
      (self.state.load(Ordering::Acquire) == FILLED).then(|| self.read())
    }

    pub(super) fn get_or_init(&self, f: impl FnOnce() -> T) -> T {
      if let Some(value) = self.get() {
        return value;
      }

      match self.state.compare_exchange(EMPTY, WRITING, Ordering::AcqRel, Ordering::Acquire) {
        Ok(_) => {
          let value = f();
          // SAFETY: the EMPTY -> WRITING transition grants this thread sole access.
          #[allow(unsafe_code)]
          unsafe {
            (*self.value.get()).write(value);
          }
          self.state.store(FILLED, Ordering::Release);
          value
        }
        Err(_) => {
          while self.state.load(Ordering::Acquire) != FILLED {
            core::hint::spin_loop();
          }
          self.read()
        }
      }
    }
  }
}

/// A value computed at most once and then copied out on every read.
pub struct OnceCache<T: Copy> {
  #[cfg(feature = "std")]
  slot: std::sync::OnceLock<T>,

  #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
  slot: spin::Slot<T>,

  #[cfg(all(not(feature = "std"), not(target_has_atomic = "ptr")))]
  slot: core::marker::PhantomData<*const T>,
}

// SAFETY: `OnceLock` and the spin slot both publish the value with
// release/acquire ordering; targets without atomics have a single thread.
#[allow(unsafe_code)]
unsafe impl<T: Copy + Send + Sync> Send for OnceCache<T> {}
#[allow(unsafe_code)]
unsafe impl<T: Copy + Send + Sync> Sync for OnceCache<T> {}

impl<T: Copy> OnceCache<T> {
  /// An empty cache, usable in a `static`.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      #[cfg(feature = "std")]
      slot: std::sync::OnceLock::new(),
      #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
      slot: spin::Slot::new(),
      #[cfg(all(not(feature = "std"), not(target_has_atomic = "ptr")))]
      slot: core::marker::PhantomData,
    }
  }

  /// Returns the stored value, running `f` to produce it on first use.
  #[inline]
  pub fn get_or_init(&self, f: impl FnOnce() -> T) -> T {
    #[cfg(feature = "std")]
    return *self.slot.get_or_init(f);

    #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
    return self.slot.get_or_init(f);

    #[cfg(all(not(feature = "std"), not(target_has_atomic = "ptr")))]
    return f();
  }

  /// The stored value, if one has been produced.
  #[inline]
  #[must_use]
  pub fn get(&self) -> Option<T> {
    #[cfg(feature = "std")]
    return self.slot.get().copied();

    #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
    return self.slot.get();

    #[cfg(all(not(feature = "std"), not(target_has_atomic = "ptr")))]
    return None;
  }
}

impl<T: Copy> Default for OnceCache<T> {
  fn default() -> Self {
    Self::new()
  }
}
