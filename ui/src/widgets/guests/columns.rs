//! Column set for the guest table.

use std::cell::RefCell;
use std::cmp::Ordering;

use aisle_business::models::Guest;
use aisle_business::settings::DateFormat;
use aisle_business::{Comparator, SelectionState, TableState};
use egui::{Button, Checkbox, Ui};

use crate::widgets::data_table::{ColumnWidth, TableColumn};

/// Per-row action clicked this frame, applied after the table is drawn.
#[derive(Debug, Clone)]
pub enum RowAction {
    /// Full row so the edit form can prefill without a second lookup.
    Edit(Guest),
    Delete(u64),
    SendInvitation(u64),
}

fn by_name(a: &Guest, b: &Guest) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

fn by_party(a: &Guest, b: &Guest) -> Ordering {
    (a.party as u8).cmp(&(b.party as u8))
}

fn by_rsvp(a: &Guest, b: &Guest) -> Ordering {
    (a.rsvp as u8).cmp(&(b.rsvp as u8))
}

fn by_plus_ones(a: &Guest, b: &Guest) -> Ordering {
    a.plus_ones.cmp(&b.plus_ones)
}

fn by_invited_at(a: &Guest, b: &Guest) -> Ordering {
    a.invited_at.cmp(&b.invited_at)
}

/// The active sort's comparator. Kept in sync with the keys used in
/// [`columns`] so the panel can compute page contents before drawing.
pub fn sort_comparator(state: &TableState) -> Option<Comparator<Guest>> {
    let (key, _) = state.sort()?;
    match key {
        "name" => Some(by_name as Comparator<Guest>),
        "party" => Some(by_party),
        "rsvp" => Some(by_rsvp),
        "plus_ones" => Some(by_plus_ones),
        "invited_at" => Some(by_invited_at),
        _ => None,
    }
}

pub fn columns<'a>(
    selection: &'a SelectionState,
    toggled: &'a RefCell<Vec<u64>>,
    action: &'a RefCell<Option<RowAction>>,
    date_format: DateFormat,
) -> Vec<TableColumn<'a, Guest>> {
    vec![
        TableColumn::new("select", "", ColumnWidth::Exact(24.0), move |ui, guest| {
            checkbox_cell(ui, selection, toggled, guest);
        }),
        TableColumn::new(
            "name",
            "Name",
            ColumnWidth::RemainderAtLeast(120.0),
            |ui, guest: &Guest| {
                ui.label(&guest.name);
            },
        )
        .sortable(by_name),
        TableColumn::new(
            "email",
            "Email",
            ColumnWidth::RemainderAtLeast(140.0),
            |ui, guest: &Guest| {
                match &guest.email {
                    Some(email) => ui.label(email),
                    None => ui.weak("—"),
                };
            },
        ),
        TableColumn::new(
            "party",
            "Party",
            ColumnWidth::Exact(70.0),
            |ui, guest: &Guest| {
                ui.label(guest.party.label());
            },
        )
        .sortable(by_party),
        TableColumn::new(
            "rsvp",
            "RSVP",
            ColumnWidth::Exact(80.0),
            |ui, guest: &Guest| {
                ui.label(guest.rsvp.label());
            },
        )
        .sortable(by_rsvp),
        TableColumn::new(
            "plus_ones",
            "+1s",
            ColumnWidth::Exact(44.0),
            |ui, guest: &Guest| {
                ui.label(guest.plus_ones.to_string());
            },
        )
        .sortable(by_plus_ones),
        TableColumn::new(
            "invited_at",
            "Invited",
            ColumnWidth::Exact(96.0),
            move |ui, guest: &Guest| {
                match guest.invited_at {
                    Some(at) => ui.label(date_format.format(at.date_naive())),
                    None => ui.weak("not yet"),
                };
            },
        )
        .sortable(by_invited_at),
        TableColumn::new(
            "actions",
            "Actions",
            ColumnWidth::Exact(150.0),
            move |ui, guest| {
                actions_cell(ui, action, guest);
            },
        ),
    ]
}

fn checkbox_cell(
    ui: &mut Ui,
    selection: &SelectionState,
    toggled: &RefCell<Vec<u64>>,
    guest: &Guest,
) {
    let mut checked = selection.is_selected(guest.id);
    let checkbox = ui.add_enabled(guest.is_invitable(), Checkbox::without_text(&mut checked));
    if !guest.is_invitable() {
        checkbox.on_hover_text("No email address on file");
    } else if checkbox.changed() {
        toggled.borrow_mut().push(guest.id);
    }
}

fn actions_cell(ui: &mut Ui, action: &RefCell<Option<RowAction>>, guest: &Guest) {
    ui.horizontal(|ui| {
        if ui.button("Edit").clicked() {
            *action.borrow_mut() = Some(RowAction::Edit(guest.clone()));
        }
        if ui.button("Delete").clicked() {
            *action.borrow_mut() = Some(RowAction::Delete(guest.id));
        }
        let send = ui
            .add_enabled(guest.is_invitable(), Button::new("Send"))
            .on_hover_text("Send an invitation to this guest");
        if send.clicked() {
            *action.borrow_mut() = Some(RowAction::SendInvitation(guest.id));
        }
    });
}
