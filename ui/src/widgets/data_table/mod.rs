//! Generic sortable, paginated table.
//!
//! Split into focused pieces:
//! - `columns`: column descriptors and sort resolution
//! - `header`: header cells with sort indicators
//! - `pager`: page controls and page-size selector
//!
//! The widget owns no data and no state; callers hold the rows and a
//! `TableState`, and describe each column with a [`TableColumn`]. Sorting and
//! pagination semantics all live in `aisle-business`; this module only draws.

pub mod columns;
pub mod header;
pub mod pager;

use aisle_business::TableState;
use egui::Ui;
use egui_extras::TableBuilder;

pub use columns::{ColumnWidth, TableColumn, comparator_for};
pub use pager::pager;

use columns::{HEADER_HEIGHT, ROW_HEIGHT};
use header::sort_header_cell;

pub struct DataTable<'a, R> {
    id: &'static str,
    columns: Vec<TableColumn<'a, R>>,
    empty_message: Option<&'a str>,
    on_row_click: Option<Box<dyn FnMut(&R) + 'a>>,
    max_height: Option<f32>,
}

impl<'a, R> DataTable<'a, R> {
    pub fn new(id: &'static str, columns: Vec<TableColumn<'a, R>>) -> Self {
        Self {
            id,
            columns,
            empty_message: None,
            on_row_click: None,
            max_height: None,
        }
    }

    /// Rendered instead of the table shell when there are no rows.
    pub fn empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = Some(message);
        self
    }

    /// Called with the full row when it is clicked outside of interactive
    /// cell content (buttons and checkboxes keep their own clicks).
    pub fn on_row_click(mut self, handler: impl FnMut(&R) + 'a) -> Self {
        self.on_row_click = Some(Box::new(handler));
        self
    }

    /// Cap the scroll area's height; affects scrolling only, never which
    /// rows belong to the page.
    pub fn max_height(mut self, height: f32) -> Self {
        self.max_height = Some(height);
        self
    }

    /// Draw the current page of `rows` under `state`'s sort order.
    pub fn show(mut self, ui: &mut Ui, state: &mut TableState, rows: &[R]) {
        // The data may have shrunk since the last frame.
        state.clamp_page(rows.len());

        // Without a message the empty table still shows its header shell.
        if rows.is_empty() && let Some(message) = self.empty_message {
            ui.weak(message);
            return;
        }

        let view = state.sorted_view(rows, comparator_for(&self.columns, state));
        let page = &view[state.page_range(view.len())];
        let mut clicked_row = None;

        ui.push_id(self.id, |ui| {
            let mut builder = TableBuilder::new(ui).striped(true);
            if self.on_row_click.is_some() {
                builder = builder.sense(egui::Sense::click());
            }
            if let Some(height) = self.max_height {
                builder = builder.max_scroll_height(height);
            }
            for column in &self.columns {
                builder = builder.column(column.width.to_extras_column());
            }

            builder
                .header(HEADER_HEIGHT, |mut header| {
                    for column in &self.columns {
                        header.col(|ui| {
                            sort_header_cell(ui, state, column);
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, page.len(), |mut row| {
                        let item = page[row.index()];
                        for column in &mut self.columns {
                            row.col(|ui| (column.render)(ui, item));
                        }
                        if row.response().clicked() {
                            clicked_row = Some(row.index());
                        }
                    });
                });
        });

        if let (Some(index), Some(handler)) = (clicked_row, &mut self.on_row_click) {
            handler(page[index]);
        }

        pager(ui, self.id, state, rows.len());
    }
}

#[cfg(test)]
mod data_table_tests {
    use super::*;
    use egui_kittest::Harness;
    use kittest::Queryable;
    use std::cmp::Ordering;

    #[derive(Clone)]
    struct Row {
        name: &'static str,
        amount: i64,
    }

    fn by_name(a: &Row, b: &Row) -> Ordering {
        a.name.cmp(b.name)
    }

    fn test_columns<'a>() -> Vec<TableColumn<'a, Row>> {
        vec![
            TableColumn::new(
                "name",
                "Name",
                ColumnWidth::RemainderAtLeast(100.0),
                |ui, row: &Row| {
                    ui.label(row.name);
                },
            )
            .sortable(by_name),
            TableColumn::new(
                "amount",
                "Amount",
                ColumnWidth::Exact(90.0),
                |ui, row: &Row| {
                    ui.label(row.amount.to_string());
                },
            ),
        ]
    }

    #[test]
    fn test_rows_and_headers_render() {
        let rows = vec![
            Row {
                name: "Venue deposit",
                amount: 200,
            },
            Row {
                name: "Florist",
                amount: 90,
            },
        ];
        let mut state = TableState::default();

        let harness = Harness::new_ui(|ui| {
            DataTable::new("test_table", test_columns()).show(ui, &mut state, &rows);
        });

        assert!(harness.query_by_label_contains("Name").is_some());
        assert!(harness.query_by_label_contains("Venue deposit").is_some());
        assert!(harness.query_by_label_contains("Florist").is_some());
    }

    #[test]
    fn test_empty_message_replaces_table() {
        let rows: Vec<Row> = Vec::new();
        let mut state = TableState::default();

        let harness = Harness::new_ui(|ui| {
            DataTable::new("test_table", test_columns())
                .empty_message("No rows yet")
                .show(ui, &mut state, &rows);
        });

        assert!(harness.query_by_label_contains("No rows yet").is_some());
        assert!(harness.query_by_label_contains("Name").is_none());
    }

    #[test]
    fn test_only_current_page_is_rendered() {
        let rows: Vec<Row> = (0..12)
            .map(|i| Row {
                name: ["zero", "one", "two", "three", "four", "five", "six", "seven",
                    "eight", "nine", "ten", "eleven"][i],
                amount: i as i64,
            })
            .collect();
        let mut state = TableState::default();

        let harness = Harness::new_ui(|ui| {
            DataTable::new("test_table", test_columns()).show(ui, &mut state, &rows);
        });

        // Page size 10: rows 0..10 visible, 10 and 11 on page 2.
        assert!(harness.query_by_label_contains("zero").is_some());
        assert!(harness.query_by_label_contains("nine").is_some());
        assert!(harness.query_by_label_contains("eleven").is_none());
        assert!(harness.query_by_label_contains("Page 1 of 2").is_some());
    }

    #[test]
    fn test_empty_without_message_keeps_header_shell() {
        let rows: Vec<Row> = Vec::new();
        let mut state = TableState::default();

        let harness = Harness::new_ui(|ui| {
            DataTable::new("test_table", test_columns()).show(ui, &mut state, &rows);
        });

        assert!(harness.query_by_label_contains("Name").is_some());
        assert!(harness.query_by_label_contains("Amount").is_some());
    }

    #[test]
    fn test_row_click_reports_full_row() {
        let rows = vec![
            Row {
                name: "Venue deposit",
                amount: 200,
            },
            Row {
                name: "Florist",
                amount: 90,
            },
        ];
        let mut state = TableState::default();
        let clicked: std::cell::RefCell<Option<&'static str>> = std::cell::RefCell::new(None);

        let mut harness = Harness::new_ui(|ui| {
            DataTable::new("test_table", test_columns())
                .on_row_click(|row: &Row| *clicked.borrow_mut() = Some(row.name))
                .show(ui, &mut state, &rows);
        });

        harness.get_by_label("Florist").click();
        harness.step();

        assert_eq!(*clicked.borrow(), Some("Florist"));
    }

    #[test]
    fn test_cell_button_click_does_not_activate_row() {
        let rows = vec![Row {
            name: "Venue deposit",
            amount: 200,
        }];
        let mut state = TableState::default();
        let clicked: std::cell::RefCell<Option<&'static str>> = std::cell::RefCell::new(None);

        let mut harness = Harness::new_ui(|ui| {
            let mut columns = test_columns();
            columns.push(TableColumn::new(
                "actions",
                "Actions",
                ColumnWidth::Exact(80.0),
                |ui, _row: &Row| {
                    let _ = ui.button("Open");
                },
            ));
            DataTable::new("test_table", columns)
                .on_row_click(|row: &Row| *clicked.borrow_mut() = Some(row.name))
                .show(ui, &mut state, &rows);
        });

        harness.get_by_label("Open").click();
        harness.step();

        assert_eq!(*clicked.borrow(), None);
    }

    #[test]
    fn test_height_cap_still_renders_current_page() {
        let rows = vec![
            Row {
                name: "Venue deposit",
                amount: 200,
            },
            Row {
                name: "Florist",
                amount: 90,
            },
        ];
        let mut state = TableState::default();

        let harness = Harness::new_ui(|ui| {
            DataTable::new("test_table", test_columns())
                .max_height(120.0)
                .show(ui, &mut state, &rows);
        });

        assert!(harness.query_by_label_contains("Venue deposit").is_some());
        assert!(harness.query_by_label_contains("Florist").is_some());
    }

    #[test]
    fn test_pager_hidden_for_single_page() {
        let rows = vec![Row {
            name: "only",
            amount: 1,
        }];
        let mut state = TableState::default();

        let harness = Harness::new_ui(|ui| {
            DataTable::new("test_table", test_columns()).show(ui, &mut state, &rows);
        });

        assert!(harness.query_by_label_contains("Page 1").is_none());
    }

    #[test]
    fn test_header_click_sorts_rows() {
        let rows = vec![
            Row {
                name: "banana",
                amount: 2,
            },
            Row {
                name: "apple",
                amount: 1,
            },
        ];
        let mut state = TableState::default();

        let mut harness = Harness::new_ui_state(
            |ui, state| {
                DataTable::new("test_table", test_columns()).show(ui, state, &rows);
            },
            &mut state,
        );

        harness.get_by_label("Name").click();
        harness.step();

        assert!(harness.state().sort().is_some());
    }
}
