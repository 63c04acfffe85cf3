//! Budget page: expense table plus paid/outstanding totals.

use std::cmp::Ordering;

use aisle_business::models::{Expense, format_cents};
use aisle_business::settings::DateFormat;
use aisle_business::{Comparator, ExpenseListCompute, RefreshExpensesCommand, TableState};
use egui::{Button, Color32, Ui};

use crate::error_text::describe_api_error;
use crate::state::UiState;
use crate::widgets::data_table::{ColumnWidth, DataTable, TableColumn};

fn by_description(a: &Expense, b: &Expense) -> Ordering {
    a.description.to_lowercase().cmp(&b.description.to_lowercase())
}

fn by_category(a: &Expense, b: &Expense) -> Ordering {
    a.category.cmp(&b.category)
}

fn by_amount(a: &Expense, b: &Expense) -> Ordering {
    a.amount_cents.cmp(&b.amount_cents)
}

fn by_due_on(a: &Expense, b: &Expense) -> Ordering {
    a.due_on.cmp(&b.due_on)
}

fn columns<'a>(date_format: DateFormat) -> Vec<TableColumn<'a, Expense>> {
    vec![
        TableColumn::new(
            "description",
            "Description",
            ColumnWidth::RemainderAtLeast(140.0),
            |ui, expense: &Expense| {
                ui.label(&expense.description);
            },
        )
        .sortable(by_description as Comparator<Expense>),
        TableColumn::new(
            "category",
            "Category",
            ColumnWidth::Exact(100.0),
            |ui, expense: &Expense| {
                ui.label(expense.category.label());
            },
        )
        .sortable(by_category),
        TableColumn::new(
            "vendor",
            "Vendor",
            ColumnWidth::RemainderAtLeast(100.0),
            |ui, expense: &Expense| {
                match &expense.vendor {
                    Some(vendor) => ui.label(vendor),
                    None => ui.weak("—"),
                };
            },
        ),
        TableColumn::new(
            "amount",
            "Amount",
            ColumnWidth::Exact(90.0),
            |ui, expense: &Expense| {
                ui.monospace(expense.amount_display());
            },
        )
        .sortable(by_amount),
        TableColumn::new(
            "paid",
            "Paid",
            ColumnWidth::Exact(50.0),
            |ui, expense: &Expense| {
                if expense.paid {
                    ui.label("✔");
                } else {
                    ui.weak("—");
                }
            },
        ),
        TableColumn::new(
            "due_on",
            "Due",
            ColumnWidth::Exact(96.0),
            move |ui, expense: &Expense| {
                match expense.due_on {
                    Some(due) => ui.label(date_format.format(due)),
                    None => ui.weak("—"),
                };
            },
        )
        .sortable(by_due_on),
    ]
}

#[derive(Default)]
pub struct ExpensesPanel {
    table: TableState,
    refreshed_once: bool,
}

impl ExpensesPanel {
    pub fn ui(&mut self, state: &mut UiState, ui: &mut Ui) {
        let date_format = state.settings.settings().date_format;
        let ctx = &mut state.ctx;

        if !self.refreshed_once {
            self.refreshed_once = true;
            ctx.dispatch::<RefreshExpensesCommand>();
        }

        let (is_loading, expenses, totals, error) = {
            let compute = ctx.cached::<ExpenseListCompute>();
            (
                compute.is_some_and(ExpenseListCompute::is_loading),
                compute
                    .and_then(ExpenseListCompute::expenses)
                    .map(<[Expense]>::to_vec)
                    .unwrap_or_default(),
                compute.map(ExpenseListCompute::totals).unwrap_or_default(),
                compute
                    .and_then(ExpenseListCompute::error)
                    .map(describe_api_error),
            )
        };

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!is_loading, Button::new("Refresh"))
                .clicked()
            {
                ctx.dispatch::<RefreshExpensesCommand>();
            }
            if is_loading {
                ui.spinner();
                ui.label("Loading...");
            }
        });

        if let Some(error) = &error {
            ui.colored_label(Color32::RED, error);
        }

        if !expenses.is_empty() {
            ui.horizontal(|ui| {
                ui.label(format!("Paid: {}", format_cents(totals.paid_cents)));
                ui.separator();
                ui.label(format!(
                    "Outstanding: {}",
                    format_cents(totals.outstanding_cents)
                ));
                ui.separator();
                ui.strong(format!("Total: {}", format_cents(totals.total_cents())));
            });
        }

        ui.add_space(8.0);

        DataTable::new("expenses_table", columns(date_format))
            .empty_message("No expenses recorded yet.")
            .show(ui, &mut self.table, &expenses);
    }
}
