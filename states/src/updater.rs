use std::any::{Any, TypeId, type_name};
use std::fmt;

use flume::Sender;

pub(crate) type Update = (TypeId, Box<dyn Any + Send>);

/// Write handle for states and computes.
///
/// Values are queued and applied by `StateCtx::sync_computes`. Once the
/// context is gone, updates are dropped instead of touching torn-down state.
#[derive(Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>) -> Self {
        Self { send }
    }

    pub fn set<T: Any + Send>(&self, value: T) {
        if self
            .send
            .send((TypeId::of::<T>(), Box::new(value)))
            .is_err()
        {
            log::debug!(
                "Dropped update for {}, state context was torn down",
                type_name::<T>()
            );
        }
    }
}

impl fmt::Debug for Updater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Updater")
            .field("pending", &self.send.len())
            .finish()
    }
}
