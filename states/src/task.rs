//! Task bookkeeping for dispatched commands.
//!
//! Each command type has at most one live [`TaskHandle`]. Dispatching the
//! command again cancels the previous handle, and tearing down the context
//! cancels all of them. Commands observe cancellation through the
//! `CancellationToken` passed to `Command::run`.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// Identifies one run of a command: its type plus a generation counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Higher generations were dispatched later.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A dispatched command run together with its cancellation token.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    /// Token handed to the running command.
    pub fn token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }
}
