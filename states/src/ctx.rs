use std::any::{TypeId, type_name};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use flume::{Receiver, Sender};
use tokio_util::sync::CancellationToken;

use crate::task::{TaskHandle, TaskId};
use crate::updater::Update;
use crate::{
    Command, CommandFuture, CommandSnapshot, Compute, ComputeDeps, Dep, Error, State,
    StateSyncStatus, Updater,
};

pub(crate) struct StateEntry {
    pub(crate) value: Box<dyn State>,
}

pub(crate) struct ComputeEntry {
    pub(crate) id: TypeId,
    pub(crate) value: Box<dyn Compute>,
    deps: ComputeDeps,
    status: StateSyncStatus,
}

impl ComputeEntry {
    fn needs_run(&self, changed: &BTreeSet<TypeId>) -> bool {
        let (states, computes) = &self.deps;
        self.status.is_stale() || states.iter().chain(computes).any(|id| changed.contains(id))
    }
}

/// Owner of every state, compute and command of the application.
///
/// Frame loop contract:
/// 1. `sync_computes` applies values published by commands,
/// 2. the UI reads and mutates states,
/// 3. `run_computed` re-derives computes whose dependencies changed.
pub struct StateCtx {
    states: BTreeMap<TypeId, StateEntry>,
    computes: Vec<ComputeEntry>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
    command_queue: Vec<TypeId>,
    handles: BTreeMap<TypeId, TaskHandle>,
    generation: u64,
    // ids whose value changed since the last `run_computed`
    changed: BTreeSet<TypeId>,
    send: Sender<Update>,
    recv: Receiver<Update>,
    #[cfg(not(target_arch = "wasm32"))]
    tasks: tokio::task::JoinSet<()>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("in_flight", &self.handles.len())
            .field("changed", &self.changed.len())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            states: BTreeMap::new(),
            computes: Vec::new(),
            commands: BTreeMap::new(),
            command_queue: Vec::new(),
            handles: BTreeMap::new(),
            generation: 0,
            changed: BTreeSet::new(),
            send,
            recv,
            #[cfg(not(target_arch = "wasm32"))]
            tasks: tokio::task::JoinSet::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        self.states.insert(
            id,
            StateEntry {
                value: Box::new(state),
            },
        );
        self.changed.insert(id);
    }

    /// Computes run in recording order, so record dependencies first.
    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        let entry = ComputeEntry {
            id,
            deps: compute.deps(),
            value: Box::new(compute),
            status: StateSyncStatus::Init,
        };
        match self.computes.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => *existing = entry,
            None => self.computes.push(entry),
        }
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.value.as_any().downcast_ref::<T>())
            .ok_or(Error::StateNotFound {
                name: type_name::<T>(),
            })
    }

    /// # Panics
    /// Panics if `T` is not registered.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutable access marks the state as changed for the next `run_computed`.
    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        let id = TypeId::of::<T>();
        let entry = self.states.get_mut(&id).ok_or(Error::StateNotFound {
            name: type_name::<T>(),
        })?;
        self.changed.insert(id);
        entry
            .value
            .as_any_mut()
            .downcast_mut::<T>()
            .ok_or(Error::StateNotFound {
                name: type_name::<T>(),
            })
    }

    /// # Panics
    /// Panics if `T` is not registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.try_state_mut::<T>()
            .unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_cached<T: Compute>(&self) -> Result<&T, Error> {
        self.computes
            .iter()
            .find(|entry| entry.id == TypeId::of::<T>())
            .and_then(|entry| entry.value.as_any().downcast_ref::<T>())
            .ok_or(Error::ComputeNotFound {
                name: type_name::<T>(),
            })
    }

    /// Latest value of a compute.
    ///
    /// # Panics
    /// Panics if `T` is not recorded.
    pub fn cached<T: Compute>(&self) -> &T {
        self.try_cached::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    /// Queue a command; it starts on the next `flush_commands`.
    pub fn enqueue_command<T: Command>(&mut self) {
        self.command_queue.push(TypeId::of::<T>());
    }

    /// Queue and immediately start a command.
    pub fn dispatch<T: Command>(&mut self) {
        self.enqueue_command::<T>();
        self.flush_commands();
    }

    pub fn flush_commands(&mut self) {
        for id in std::mem::take(&mut self.command_queue) {
            let Some(command) = self.commands.get(&id) else {
                log::warn!("Dropped dispatch of unregistered command {id:?}");
                continue;
            };

            if let Some(previous) = self.handles.remove(&id) {
                log::debug!("Cancelling previous run {:?}", previous.id());
                previous.cancel();
            }

            self.generation += 1;
            let handle = TaskHandle::new(TaskId::new(id, self.generation), CancellationToken::new());
            let future = command.run(self.snapshot(), self.updater(), handle.token());
            self.handles.insert(id, handle);
            self.spawn(future);
        }
    }

    /// Apply values published through updaters since the last call.
    pub fn sync_computes(&mut self) {
        self.apply_updates();

        #[cfg(not(target_arch = "wasm32"))]
        while let Some(result) = self.tasks.try_join_next() {
            if let Err(err) = result
                && err.is_panic()
            {
                log::error!("Command task panicked: {err}");
            }
        }
    }

    /// Re-derive every compute whose dependencies changed since the last run.
    pub fn run_computed(&mut self) {
        let mut changed = std::mem::take(&mut self.changed);

        for index in 0..self.computes.len() {
            let entry = &self.computes[index];
            if !entry.needs_run(&changed) {
                continue;
            }

            let id = entry.id;
            entry
                .value
                .compute(Dep::new(&self.states, &self.computes), self.updater());
            self.computes[index].status = StateSyncStatus::Clean;
            changed.insert(id);

            // Results of computes feed later computes in this same pass.
            for applied in self.apply_updates() {
                if self.computes.iter().any(|entry| entry.id == applied) {
                    self.changed.remove(&applied);
                    changed.insert(applied);
                }
            }
        }
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.changed.is_empty() || !self.recv.is_empty()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn task_set_mut(&mut self) -> &mut tokio::task::JoinSet<()> {
        &mut self.tasks
    }

    fn cancel_all(&mut self) {
        for (_, handle) in std::mem::take(&mut self.handles) {
            handle.cancel();
        }
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::new();
        for (id, entry) in &self.states {
            if let Some(cloned) = entry.value.snapshot() {
                snap.insert_cloned(*id, cloned);
            }
        }
        snap
    }

    fn apply_updates(&mut self) -> Vec<TypeId> {
        let mut applied = Vec::new();
        while let Ok((id, value)) = self.recv.try_recv() {
            if let Some(entry) = self.states.get_mut(&id) {
                entry.value.assign_box(value);
            } else if let Some(entry) = self.computes.iter_mut().find(|entry| entry.id == id) {
                entry.value.assign_box(value);
            } else {
                log::warn!("Dropped update for unregistered type {id:?}");
                continue;
            }
            self.changed.insert(id);
            applied.push(id);
        }
        applied
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn(&mut self, future: CommandFuture) {
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                self.tasks.spawn_on(future, &runtime);
            }
            Err(err) => log::error!("Cannot run command without a Tokio runtime: {err}"),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn(&mut self, future: CommandFuture) {
        wasm_bindgen_futures::spawn_local(future);
    }
}

impl Drop for StateCtx {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{assign_impl, state_assign_impl};

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Counter(u32);

    impl State for Counter {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }

        fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
            Some(Box::new(self.clone()))
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            state_assign_impl(self, new_self);
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Doubled(u32);

    impl Compute for Doubled {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn deps(&self) -> ComputeDeps {
            (vec![TypeId::of::<Counter>()], vec![])
        }

        fn compute(&self, deps: Dep<'_>, updater: Updater) {
            updater.set(Doubled(deps.state::<Counter>().0 * 2));
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            assign_impl(self, new_self);
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Quadrupled(u32);

    impl Compute for Quadrupled {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn deps(&self) -> ComputeDeps {
            (vec![], vec![TypeId::of::<Doubled>()])
        }

        fn compute(&self, deps: Dep<'_>, updater: Updater) {
            updater.set(Quadrupled(deps.compute::<Doubled>().0 * 2));
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            assign_impl(self, new_self);
        }
    }

    /// Publishes `Counter(snapshot + 10)` and records every token it receives.
    #[derive(Default)]
    struct BumpCommand {
        tokens: Arc<Mutex<Vec<CancellationToken>>>,
    }

    impl Command for BumpCommand {
        fn run(
            &self,
            snap: CommandSnapshot,
            updater: Updater,
            cancel: CancellationToken,
        ) -> CommandFuture {
            if let Ok(mut tokens) = self.tokens.lock() {
                tokens.push(cancel.clone());
            }
            let current = snap.state::<Counter>().0;
            Box::pin(async move {
                if !cancel.is_cancelled() {
                    updater.set(Counter(current + 10));
                }
            })
        }
    }

    fn ctx_with_computes() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter(1));
        ctx.record_compute(Doubled::default());
        ctx.record_compute(Quadrupled::default());
        ctx
    }

    #[test]
    fn run_computed_derives_chained_computes() {
        let mut ctx = ctx_with_computes();
        ctx.run_computed();

        assert_eq!(ctx.cached::<Doubled>(), &Doubled(2));
        assert_eq!(ctx.cached::<Quadrupled>(), &Quadrupled(4));
    }

    #[test]
    fn state_mut_triggers_recompute() {
        let mut ctx = ctx_with_computes();
        ctx.run_computed();

        ctx.state_mut::<Counter>().0 = 5;
        ctx.run_computed();

        assert_eq!(ctx.cached::<Doubled>(), &Doubled(10));
        assert_eq!(ctx.cached::<Quadrupled>(), &Quadrupled(20));
        assert!(!ctx.has_pending_changes());
    }

    #[test]
    fn missing_state_reports_type_name() {
        let ctx = StateCtx::new();
        let err = ctx.try_state::<Counter>().unwrap_err();
        assert!(err.to_string().contains("Counter"));
    }

    #[tokio::test]
    async fn command_update_lands_on_sync() {
        let mut ctx = ctx_with_computes();
        ctx.record_command(BumpCommand::default());
        ctx.dispatch::<BumpCommand>();

        while ctx.task_set_mut().join_next().await.is_some() {}
        ctx.sync_computes();
        ctx.run_computed();

        assert_eq!(ctx.state::<Counter>(), &Counter(11));
        assert_eq!(ctx.cached::<Doubled>(), &Doubled(22));
    }

    #[tokio::test]
    async fn redispatch_cancels_previous_run() {
        let tokens = Arc::new(Mutex::new(Vec::new()));
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter(0));
        ctx.record_command(BumpCommand {
            tokens: Arc::clone(&tokens),
        });

        ctx.dispatch::<BumpCommand>();
        ctx.dispatch::<BumpCommand>();

        let tokens = tokens.lock().unwrap().clone();
        assert_eq!(tokens.len(), 2);
        assert!(tokens[0].is_cancelled());
        assert!(!tokens[1].is_cancelled());
    }

    #[tokio::test]
    async fn drop_cancels_in_flight_commands() {
        let tokens = Arc::new(Mutex::new(Vec::new()));
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter(0));
        ctx.record_command(BumpCommand {
            tokens: Arc::clone(&tokens),
        });
        ctx.dispatch::<BumpCommand>();
        let updater = ctx.updater();

        drop(ctx);

        assert!(tokens.lock().unwrap()[0].is_cancelled());
        // Late updates after teardown are dropped silently.
        updater.set(Counter(99));
    }
}
