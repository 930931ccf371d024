use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, Updater};

/// Future returned by [`Command::run`].
///
/// Native builds spawn commands onto the Tokio runtime, so the future must be `Send`.
/// On wasm32 commands run on the JS event loop through `spawn_local`.
#[cfg(not(target_arch = "wasm32"))]
pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

#[cfg(target_arch = "wasm32")]
pub type CommandFuture = Pin<Box<dyn Future<Output = ()>>>;

/// Explicitly dispatched unit of (possibly async) work.
///
/// A command reads a snapshot of the states taken at dispatch time and writes
/// results back through the `Updater`. Dispatching the same command again
/// cancels the previous run, and dropping the `StateCtx` cancels every
/// in-flight run, so `cancel` must be honored around every suspension point.
pub trait Command: Any {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> CommandFuture;
}
