use std::any::{TypeId, type_name};
use std::collections::BTreeMap;

use crate::ctx::{ComputeEntry, StateEntry};
use crate::{Compute, Error, State};

/// Read-only view of the context handed to [`Compute::compute`].
pub struct Dep<'a> {
    states: &'a BTreeMap<TypeId, StateEntry>,
    computes: &'a [ComputeEntry],
}

impl<'a> Dep<'a> {
    pub(crate) fn new(
        states: &'a BTreeMap<TypeId, StateEntry>,
        computes: &'a [ComputeEntry],
    ) -> Self {
        Self { states, computes }
    }

    pub fn try_state<T: State>(&self) -> Result<&'a T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.value.as_any().downcast_ref::<T>())
            .ok_or(Error::StateNotFound {
                name: type_name::<T>(),
            })
    }

    /// # Panics
    /// Panics if `T` is not registered.
    pub fn state<T: State>(&self) -> &'a T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_compute<T: Compute>(&self) -> Result<&'a T, Error> {
        self.computes
            .iter()
            .find(|entry| entry.id == TypeId::of::<T>())
            .and_then(|entry| entry.value.as_any().downcast_ref::<T>())
            .ok_or(Error::ComputeNotFound {
                name: type_name::<T>(),
            })
    }

    /// # Panics
    /// Panics if `T` is not recorded.
    pub fn compute<T: Compute>(&self) -> &'a T {
        self.try_compute::<T>().unwrap_or_else(|err| panic!("{err}"))
    }
}
