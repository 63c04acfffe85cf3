//! Guest-list domain module.
//!
//! Single home for:
//! - panel/modal state stored in the `StateCtx`
//! - compute-shaped caches for the list and for mutating actions
//! - API helpers for `/api/guests` endpoints
//!
//! UI code reads via `ctx.cached::<T>()` / `ctx.state::<T>()` and triggers
//! work by setting an input state and dispatching the matching command.

pub mod action_compute;
pub mod api;
pub mod list_compute;
pub mod state;

pub use action_compute::{
    GuestActionCompute, GuestActionCommand, GuestActionInput, GuestActionKind,
    GuestActionRequest, GuestActionState,
};
pub use list_compute::{GuestListCompute, GuestListResult, RefreshGuestsCommand};
pub use state::{GuestAction, GuestForm, GuestsPanelState};
