//! Typed state context for the Aisle UI.
//!
//! The crate provides the plumbing the business layer and the UI communicate
//! through:
//! - [`State`]: anything stored in the [`StateCtx`] and mutated on the UI thread.
//! - [`Compute`]: cache-shaped states that commands fill in asynchronously and
//!   the UI reads via [`StateCtx::cached`].
//! - [`Command`]: async units of work (network calls, mostly). A command gets a
//!   [`CommandSnapshot`] of its inputs, runs off the UI thread, and publishes
//!   results through an [`Updater`]. Results land back in the ctx when the app
//!   loop calls [`StateCtx::sync_computes`] at the start of a frame.
//!
//! There is intentionally no locking: states are owned by the UI thread, and
//! the only cross-thread traffic is boxed updates over a `flume` channel.

mod basic_states;
mod command;
mod compute;
mod ctx;
mod error;
mod runtime;
mod state;

pub use basic_states::Time;
pub use command::{BoxFuture, Command, CommandSnapshot, Updater};
pub use compute::Compute;
pub use ctx::StateCtx;
pub use error::StateError;
pub use runtime::StateRuntime;
pub use state::{State, state_assign_impl};

pub use tokio_util::sync::CancellationToken;
