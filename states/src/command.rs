use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::State;
use crate::error::StateError;
use crate::runtime::StateUpdate;

/// The future a [`Command`] hands back to be spawned.
pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// An async unit of work dispatched through the ctx.
///
/// Commands are registered once
/// ([`StateCtx::record_command`](crate::StateCtx::record_command)) and
/// dispatched by type ([`StateCtx::dispatch`](crate::StateCtx::dispatch)).
/// Inputs come from the snapshot, results go out through the updater; the
/// command never sees the live states.
pub trait Command: Any + Send + Sync {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> BoxFuture;
}

/// Clones of the snapshotable states, captured at dispatch time.
///
/// Only states whose [`State::snapshot`] returns `Some` are present.
pub struct CommandSnapshot {
    states: HashMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub(crate) fn capture(states: &HashMap<TypeId, Box<dyn State>>) -> Self {
        let states = states
            .iter()
            .filter_map(|(type_id, state)| state.snapshot().map(|snap| (*type_id, snap)))
            .collect();
        Self { states }
    }

    pub fn try_state<T: State>(&self) -> Result<&T, StateError> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .ok_or(StateError::NotSnapshotable(std::any::type_name::<T>()))
    }

    /// Panics when the state is missing from the snapshot; that is a
    /// registration bug, not a runtime condition.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|err| panic!("CommandSnapshot::state: {err}"))
    }
}

/// Publishes replacement states from a command task.
///
/// `set` is last-write-wins per type: the ctx applies updates in channel
/// order during [`sync_computes`](crate::StateCtx::sync_computes), so the
/// newest value a command sends is the one that sticks.
#[derive(Clone)]
pub struct Updater {
    tx: flume::Sender<StateUpdate>,
}

impl Updater {
    pub(crate) fn new(tx: flume::Sender<StateUpdate>) -> Self {
        Self { tx }
    }

    pub fn set<T: State>(&self, value: T) {
        let update = StateUpdate {
            type_id: TypeId::of::<T>(),
            value: Box::new(value),
        };
        // A closed channel means the ctx is gone (shutdown); drop silently.
        let _ = self.tx.send(update);
    }
}
