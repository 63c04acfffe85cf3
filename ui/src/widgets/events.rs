//! Schedule page: upcoming events table.

use std::cmp::Ordering;

use aisle_business::models::Event;
use aisle_business::settings::DateFormat;
use aisle_business::{
    Comparator, EventListCompute, RefreshEventsCommand, SortDirection, TableState,
};
use egui::{Button, Color32, Ui};

use crate::error_text::describe_api_error;
use crate::state::UiState;
use crate::widgets::data_table::{ColumnWidth, DataTable, TableColumn};

fn by_name(a: &Event, b: &Event) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

fn by_starts_at(a: &Event, b: &Event) -> Ordering {
    a.starts_at.cmp(&b.starts_at)
}

fn by_guest_count(a: &Event, b: &Event) -> Ordering {
    a.guest_count.cmp(&b.guest_count)
}

fn columns<'a>(date_format: DateFormat) -> Vec<TableColumn<'a, Event>> {
    vec![
        TableColumn::new(
            "name",
            "Event",
            ColumnWidth::RemainderAtLeast(140.0),
            |ui, event: &Event| {
                ui.label(&event.name);
            },
        )
        .sortable(by_name as Comparator<Event>),
        TableColumn::new(
            "venue",
            "Venue",
            ColumnWidth::RemainderAtLeast(120.0),
            |ui, event: &Event| {
                match &event.venue {
                    Some(venue) => ui.label(venue),
                    None => ui.weak("TBD"),
                };
            },
        ),
        TableColumn::new(
            "starts_at",
            "When",
            ColumnWidth::Exact(150.0),
            move |ui, event: &Event| {
                let date = date_format.format(event.starts_at.date_naive());
                let time = event.starts_at.format("%H:%M");
                ui.label(format!("{date} {time}"));
            },
        )
        .sortable(by_starts_at),
        TableColumn::new(
            "guest_count",
            "Guests",
            ColumnWidth::Exact(60.0),
            |ui, event: &Event| {
                ui.label(event.guest_count.to_string());
            },
        )
        .sortable(by_guest_count),
    ]
}

pub struct EventsPanel {
    table: TableState,
    refreshed_once: bool,
}

impl Default for EventsPanel {
    fn default() -> Self {
        Self {
            // The schedule reads most naturally in chronological order.
            table: TableState::default().with_sort("starts_at", SortDirection::Ascending),
            refreshed_once: false,
        }
    }
}

impl EventsPanel {
    pub fn ui(&mut self, state: &mut UiState, ui: &mut Ui) {
        let date_format = state.settings.settings().date_format;
        let ctx = &mut state.ctx;

        if !self.refreshed_once {
            self.refreshed_once = true;
            ctx.dispatch::<RefreshEventsCommand>();
        }

        let (is_loading, events, error) = {
            let compute = ctx.cached::<EventListCompute>();
            (
                compute.is_some_and(EventListCompute::is_loading),
                compute
                    .and_then(EventListCompute::events)
                    .map(<[Event]>::to_vec)
                    .unwrap_or_default(),
                compute
                    .and_then(EventListCompute::error)
                    .map(describe_api_error),
            )
        };

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!is_loading, Button::new("Refresh"))
                .clicked()
            {
                ctx.dispatch::<RefreshEventsCommand>();
            }
            if is_loading {
                ui.spinner();
                ui.label("Loading...");
            }
        });

        if let Some(error) = &error {
            ui.colored_label(Color32::RED, error);
        }

        ui.add_space(8.0);

        DataTable::new("events_table", columns(date_format))
            .empty_message("Nothing scheduled yet.")
            .show(ui, &mut self.table, &events);
    }
}
