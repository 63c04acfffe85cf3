//! The `egui` front end of the Aisle wedding-planning dashboard.

pub mod app;
pub mod error_text;
pub mod state;
pub mod widgets;

pub use app::AisleApp;
pub use state::UiState;
