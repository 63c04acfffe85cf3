pub mod api_status;
pub mod data_table;
mod env_version;
pub mod events;
pub mod expenses;
pub mod guests;
pub mod settings_panel;

pub use api_status::api_status;
pub use data_table::{ColumnWidth, DataTable, TableColumn};
pub use env_version::env_version;
pub use events::EventsPanel;
pub use expenses::ExpensesPanel;
pub use guests::GuestsPanel;
pub use settings_panel::settings_panel;
