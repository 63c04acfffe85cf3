//! Column descriptors for [`DataTable`](super::DataTable).

use aisle_business::{Comparator, SortDirection, TableState};
use egui::Ui;

pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Width hint, resolved to an `egui_extras::Column` at render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    Exact(f32),
    /// Fills the remaining space, never narrower than the given minimum.
    RemainderAtLeast(f32),
}

impl ColumnWidth {
    pub(super) fn to_extras_column(self) -> egui_extras::Column {
        match self {
            Self::Exact(width) => egui_extras::Column::exact(width),
            Self::RemainderAtLeast(min) => egui_extras::Column::remainder().at_least(min),
        }
    }
}

/// One column of a [`DataTable`](super::DataTable): identity, header
/// behavior, and how to draw a cell for a row.
pub struct TableColumn<'a, R> {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub compare: Option<Comparator<R>>,
    pub width: ColumnWidth,
    pub render: Box<dyn FnMut(&mut Ui, &R) + 'a>,
}

impl<'a, R> TableColumn<'a, R> {
    pub fn new(
        key: &'static str,
        label: &'static str,
        width: ColumnWidth,
        render: impl FnMut(&mut Ui, &R) + 'a,
    ) -> Self {
        Self {
            key,
            label,
            sortable: false,
            compare: None,
            width,
            render: Box::new(render),
        }
    }

    /// Make the header clickable and supply the ordering for this column.
    pub fn sortable(mut self, compare: Comparator<R>) -> Self {
        self.sortable = true;
        self.compare = Some(compare);
        self
    }
}

/// Resolve the active sort key to its comparator. `None` when no sort is
/// active or the active column has no comparator; the caller then keeps the
/// original row order.
pub fn comparator_for<R>(
    columns: &[TableColumn<'_, R>],
    state: &TableState,
) -> Option<Comparator<R>> {
    let (active_key, _) = state.sort()?;
    columns
        .iter()
        .find(|column| column.key == active_key)
        .and_then(|column| column.compare)
}

/// Direction of the active sort on `key`, for the header arrow.
pub fn active_direction(state: &TableState, key: &'static str) -> Option<SortDirection> {
    match state.sort() {
        Some((active, direction)) if active == key => Some(direction),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    struct Row {
        name: &'static str,
    }

    fn by_name(a: &Row, b: &Row) -> Ordering {
        a.name.cmp(b.name)
    }

    fn columns<'a>() -> Vec<TableColumn<'a, Row>> {
        vec![
            TableColumn::new("name", "Name", ColumnWidth::RemainderAtLeast(80.0), |ui, r: &Row| {
                ui.label(r.name);
            })
            .sortable(by_name),
            TableColumn::new("notes", "Notes", ColumnWidth::Exact(120.0), |_, _| {}),
        ]
    }

    #[test]
    fn test_comparator_for_active_column() {
        let columns = columns();
        let mut state = TableState::default();
        assert!(comparator_for(&columns, &state).is_none());

        state.toggle_sort("name", true);
        assert!(comparator_for(&columns, &state).is_some());
    }

    #[test]
    fn test_comparator_missing_for_unsortable_column() {
        let columns = columns();
        let mut state = TableState::default();
        // The widget never toggles unsortable columns, but a stale state must
        // still degrade to original order instead of panicking.
        state.toggle_sort("notes", true);
        assert!(comparator_for(&columns, &state).is_none());
    }
}
