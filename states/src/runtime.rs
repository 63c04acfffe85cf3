use std::any::{Any, TypeId};

use flume::{Receiver, Sender};

/// One pending state replacement, produced by an
/// [`Updater`](crate::Updater) on a command task.
pub(crate) struct StateUpdate {
    pub(crate) type_id: TypeId,
    pub(crate) value: Box<dyn Any + Send>,
}

/// The channel pair carrying command results back to the UI thread.
///
/// Senders are cloned into every spawned command; the single receiver is
/// drained by [`StateCtx::sync_computes`](crate::StateCtx::sync_computes)
/// once per frame.
pub struct StateRuntime {
    tx: Sender<StateUpdate>,
    rx: Receiver<StateUpdate>,
}

impl StateRuntime {
    pub fn new() -> Self {
        let (tx, rx) = flume::unbounded();
        Self { tx, rx }
    }

    pub(crate) fn sender(&self) -> Sender<StateUpdate> {
        self.tx.clone()
    }

    pub(crate) fn try_iter(&self) -> flume::TryIter<'_, StateUpdate> {
        self.rx.try_iter()
    }
}

impl Default for StateRuntime {
    fn default() -> Self {
        Self::new()
    }
}
