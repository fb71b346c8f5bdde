//! Process-wide kernel selection.
//!
//! The kernel is chosen once, on first use, from [`crate::config`] and cached
//! in a [`backend::Dispatcher`]. Every polynomial model shares the same
//! dispatcher: kernels are generic over the model descriptor.

use backend::{Dispatcher, OnceCache, Selected};

use crate::{
  common::kernels::{self, CrcKernelFn},
  config::{self, CrcForce},
  model::Model,
};

static CRC_DISPATCHER: Dispatcher<CrcKernelFn> = Dispatcher::new(select_kernel);

static SLICE4_TO_SLICE8: OnceCache<usize> = OnceCache::new();

#[inline]
fn threshold() -> usize {
  SLICE4_TO_SLICE8.get_or_init(|| config::get().tunables.slice4_to_slice8)
}

fn auto(model: &Model, acc: u32, data: &[u8]) -> u32 {
  let (_, kernel) = kernels::select_auto(data.len(), threshold());
  kernel(model, acc, data)
}

fn select_kernel() -> Selected<CrcKernelFn> {
  let cfg = config::get();
  let selected = match cfg.requested_force {
    CrcForce::Auto => Selected::new(kernels::PORTABLE_AUTO, auto as CrcKernelFn),
    CrcForce::Reference => Selected::new(kernels::REFERENCE, kernels::reference as CrcKernelFn),
    CrcForce::Slice4 => Selected::new(kernels::PORTABLE_SLICE4, kernels::slice4 as CrcKernelFn),
    CrcForce::Slice8 => Selected::new(kernels::PORTABLE_SLICE8, kernels::slice8 as CrcKernelFn),
  };
  debug_event!(
    kernel = selected.name,
    force = cfg.requested_force.as_str(),
    slice4_to_slice8 = cfg.tunables.slice4_to_slice8,
    "selected CRC kernel"
  );
  selected
}

/// Mix `data` into `acc` with the selected kernel.
#[inline]
pub(crate) fn update(model: &Model, acc: u32, data: &[u8]) -> u32 {
  CRC_DISPATCHER.call_with(|kernel| kernel(model, acc, data))
}

/// Name of the dispatcher's selection (e.g. `portable/auto`).
#[inline]
#[must_use]
pub fn backend_name() -> &'static str {
  CRC_DISPATCHER.backend_name()
}

/// Name of the kernel that would process a buffer of `len` bytes.
#[must_use]
pub fn selected_kernel_name(len: usize) -> &'static str {
  match CRC_DISPATCHER.backend_name() {
    kernels::PORTABLE_AUTO => kernels::select_auto(len, threshold()).0,
    name => name,
  }
}
