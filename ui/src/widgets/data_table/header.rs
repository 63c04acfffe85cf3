//! Header cells with sort indicators.

use aisle_business::{SortDirection, TableState};
use egui::{Response, RichText, Sense, Ui};

use super::columns::{TableColumn, active_direction};

/// One header cell. Sortable columns render as a clickable label with an
/// arrow for the active direction; a click mutates `state` via
/// `toggle_sort`.
pub fn sort_header_cell<R>(
    ui: &mut Ui,
    state: &mut TableState,
    column: &TableColumn<'_, R>,
) -> Response {
    if !column.sortable {
        return ui.strong(column.label);
    }

    let text = match active_direction(state, column.key) {
        Some(SortDirection::Ascending) => format!("{} ⏶", column.label),
        Some(SortDirection::Descending) => format!("{} ⏷", column.label),
        None => column.label.to_owned(),
    };

    let response = ui
        .add(egui::Label::new(RichText::new(text).strong()).sense(Sense::click()))
        .on_hover_text("Sort by this column");
    if response.clicked() {
        state.toggle_sort(column.key, column.sortable);
    }
    response
}
