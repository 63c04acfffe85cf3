//! Domain logic for the Aisle dashboard.
//!
//! Everything here is UI-toolkit free: table/selection state machines, wire
//! types, the API client, and the computes/commands the `egui` layer drives
//! through `aisle-states`.

pub mod config;
pub mod error;
pub mod events;
pub mod expenses;
pub mod guests;
pub mod health;
pub mod http;
pub mod models;
pub mod selection;
pub mod settings;
pub mod table;

pub use aisle_utils::version_info;

pub use config::BusinessConfig;
pub use error::{ApiError, ApiErrorCode, ApiResult};
pub use events::{EventListCompute, EventListResult, RefreshEventsCommand};
pub use expenses::{
    ExpenseListCompute, ExpenseListResult, ExpenseTotals, RefreshExpensesCommand,
};
pub use guests::{
    GuestAction, GuestActionCommand, GuestActionCompute, GuestActionInput, GuestActionKind,
    GuestActionRequest, GuestActionState, GuestForm, GuestListCompute, GuestListResult,
    GuestsPanelState, RefreshGuestsCommand,
};
pub use health::{ApiAvailability, ApiHealthCompute, CheckHealthCommand};
pub use selection::SelectionState;
pub use settings::{
    AppSettings, DateFormat, FileBackend, MemoryBackend, SettingsBackend, SettingsError,
    SettingsEvent, SettingsStore, Theme,
};
pub use table::{
    Comparator, DEFAULT_PAGE_SIZE, PAGE_SIZE_CHOICES, SortDirection, TableState,
};
