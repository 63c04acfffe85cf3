use thiserror::Error;

/// Wiring errors surfaced by the state context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("state `{0}` is not registered in the ctx")]
    Missing(&'static str),

    #[error("state `{0}` does not provide a snapshot")]
    NotSnapshotable(&'static str),
}
