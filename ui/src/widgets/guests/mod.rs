//! Guest list page widgets.
//!
//! Split into focused pieces:
//! - `columns`: column set and row-action plumbing
//! - `panel`: the page itself (toolbar, selection bar, table)
//! - `modals`: create/edit form and delete confirmation

pub mod columns;
pub mod modals;
pub mod panel;

pub use panel::GuestsPanel;
