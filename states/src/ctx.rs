use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::command::{Command, CommandSnapshot, Updater};
use crate::compute::Compute;
use crate::error::StateError;
use crate::runtime::StateRuntime;
use crate::state::State;

/// The process-wide command executor. A static so ctx instances stay cheap to
/// create and drop (tests create many), and so dropping a ctx inside an async
/// context never tears down a runtime.
#[cfg(not(target_arch = "wasm32"))]
fn executor() -> &'static tokio::runtime::Runtime {
    static EXECUTOR: std::sync::OnceLock<tokio::runtime::Runtime> = std::sync::OnceLock::new();
    EXECUTOR.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("StateCtx: failed to start the command executor")
    })
}

/// Owner of all registered states, computes and commands.
///
/// Lives on the UI thread. The app loop is expected to call
/// [`sync_computes`](Self::sync_computes) once per frame so command results
/// become visible, and [`shutdown`](Self::shutdown) when the window closes.
pub struct StateCtx {
    states: HashMap<TypeId, Box<dyn State>>,
    computes: HashSet<TypeId>,
    commands: HashMap<TypeId, Arc<dyn Command>>,
    runtime: StateRuntime,
    cancel: CancellationToken,
}

impl StateCtx {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            computes: HashSet::new(),
            commands: HashMap::new(),
            runtime: StateRuntime::new(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    /// Register a compute-shaped cache. Readable via [`cached`](Self::cached).
    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(TypeId::of::<T>());
        self.states.insert(TypeId::of::<T>(), Box::new(compute));
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Arc::new(command));
    }

    pub fn try_state<T: State>(&self) -> Result<&T, StateError> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or(StateError::Missing(std::any::type_name::<T>()))
    }

    /// Panics when the state was never registered; that is a wiring bug.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|err| panic!("StateCtx::state: {err}"))
    }

    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| {
                panic!(
                    "StateCtx::state_mut: state `{}` is not registered in the ctx",
                    std::any::type_name::<T>()
                )
            })
    }

    /// Mutate a registered state in place.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// Read a compute cache. `None` until [`record_compute`](Self::record_compute)
    /// has run for `T`.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        if !self.computes.contains(&TypeId::of::<T>()) {
            return None;
        }
        self.try_state::<T>().ok()
    }

    /// Snapshot the snapshotable states, e.g. to drive a command manually in
    /// tests.
    pub fn snapshot(&self) -> CommandSnapshot {
        CommandSnapshot::capture(&self.states)
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.runtime.sender())
    }

    /// Spawn a registered command off the UI thread.
    ///
    /// Dispatching an unregistered command logs and does nothing; the UI
    /// stays alive either way.
    pub fn dispatch<C: Command>(&self) {
        let Some(command) = self.commands.get(&TypeId::of::<C>()) else {
            log::error!(
                "dispatch: command `{}` is not registered",
                std::any::type_name::<C>()
            );
            return;
        };

        let snap = CommandSnapshot::capture(&self.states);
        let fut = command.run(snap, self.updater(), self.cancel.child_token());

        #[cfg(not(target_arch = "wasm32"))]
        {
            executor().spawn(fut);
        }

        #[cfg(target_arch = "wasm32")]
        {
            wasm_bindgen_futures::spawn_local(fut);
        }
    }

    /// Apply all pending command results. Call once per frame, before any
    /// widget reads states or computes.
    pub fn sync_computes(&mut self) {
        for update in self.runtime.try_iter() {
            match self.states.get_mut(&update.type_id) {
                Some(slot) => slot.assign_box(update.value),
                None => log::warn!("sync_computes: dropping update for unregistered state"),
            }
        }
    }

    /// Cancel every in-flight command.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}
