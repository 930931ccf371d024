use std::any::{Any, type_name};

/// A piece of application state owned by [`StateCtx`](crate::StateCtx).
///
/// States are mutated synchronously on the UI thread through
/// `StateCtx::state_mut`, or asynchronously by commands through an
/// [`Updater`](crate::Updater), in which case the new value is applied on the
/// next `StateCtx::sync_computes`.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Cloned copy handed to commands.
    ///
    /// States holding UI-only handles keep the default and are left out of
    /// command snapshots.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    /// Replace `self` with a value delivered through an `Updater`.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body for states.
pub fn state_assign_impl<T: State>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(new_self) => *this = *new_self,
        Err(_) => log::warn!("Ignored update with mismatched type for {}", type_name::<T>()),
    }
}
