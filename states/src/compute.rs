use std::any::{Any, TypeId, type_name};

use crate::{Dep, Updater};

/// `(state dependencies, compute dependencies)` of a compute.
pub type ComputeDeps = (Vec<TypeId>, Vec<TypeId>);

/// A value derived from states and other computes.
///
/// `compute` runs inside `StateCtx::run_computed` whenever one of the
/// dependencies changed since the last run. It publishes its result through
/// the `Updater`; the context applies it before running later computes, so a
/// compute must be recorded after everything it depends on.
///
/// Side effects (network, timers) do not belong here. Use a
/// [`Command`](crate::Command) instead.
pub trait Compute: Any {
    fn as_any(&self) -> &dyn Any;

    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body for computes.
pub fn assign_impl<T: Compute>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(new_self) => *this = *new_self,
        Err(_) => log::warn!("Ignored update with mismatched type for {}", type_name::<T>()),
    }
}
