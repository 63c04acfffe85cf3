//! Modal dialogs for guest management.

use aisle_business::models::GuestParty;
use aisle_business::{GuestAction, GuestActionRequest, GuestsPanelState};
use egui::{Color32, ComboBox, DragValue, Ui, Window};

/// Create/edit form. Returns the request to dispatch when the user submits.
pub fn guest_form_modal(
    panel: &mut GuestsPanelState,
    in_flight: bool,
    error: Option<&str>,
    ui: &mut Ui,
) -> Option<GuestActionRequest> {
    let editing = match panel.current_action {
        GuestAction::Edit(id) => Some(id),
        _ => None,
    };
    if !panel.create_modal_open && editing.is_none() {
        return None;
    }

    let title = if editing.is_some() {
        "Edit Guest"
    } else {
        "Add Guest"
    };

    let mut open = true;
    let mut submit = None;

    Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            if let Some(error) = error {
                ui.colored_label(Color32::RED, error);
                ui.add_space(8.0);
            }

            if in_flight {
                ui.label("Saving...");
                ui.spinner();
                return;
            }

            egui::Grid::new("guest_form").num_columns(2).show(ui, |ui| {
                ui.label("Name:");
                ui.text_edit_singleline(&mut panel.form.name);
                ui.end_row();

                ui.label("Email:");
                ui.text_edit_singleline(&mut panel.form.email);
                ui.end_row();

                ui.label("Party:");
                ComboBox::from_id_salt("guest_form_party")
                    .selected_text(panel.form.party.label())
                    .show_ui(ui, |ui| {
                        for party in [GuestParty::Bride, GuestParty::Groom, GuestParty::Shared] {
                            ui.selectable_value(&mut panel.form.party, party, party.label());
                        }
                    });
                ui.end_row();

                ui.label("Plus ones:");
                ui.add(DragValue::new(&mut panel.form.plus_ones).range(0..=10));
                ui.end_row();
            });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                let can_save = !panel.form.name.trim().is_empty();
                if ui
                    .add_enabled(can_save, egui::Button::new("Save"))
                    .clicked()
                {
                    submit = Some(match editing {
                        Some(id) => GuestActionRequest::Update {
                            id,
                            request: panel.form.to_update_request(),
                        },
                        None => GuestActionRequest::Create(panel.form.to_create_request()),
                    });
                }
                if ui.button("Cancel").clicked() {
                    panel.close_create_modal();
                    panel.close_action();
                }
            });
        });

    if !open {
        panel.close_create_modal();
        panel.close_action();
    }
    submit
}

/// Delete confirmation. Returns the request to dispatch when confirmed.
pub fn delete_guest_modal(
    panel: &mut GuestsPanelState,
    in_flight: bool,
    error: Option<&str>,
    ui: &mut Ui,
) -> Option<GuestActionRequest> {
    let GuestAction::ConfirmDelete(id) = panel.current_action else {
        return None;
    };

    let mut open = true;
    let mut submit = None;

    Window::new("Remove Guest")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            if let Some(error) = error {
                ui.colored_label(Color32::RED, error);
                ui.add_space(8.0);
            }

            if in_flight {
                ui.label("Removing...");
                ui.spinner();
                return;
            }

            ui.label("Remove this guest from the list? This cannot be undone.");
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Remove").clicked() {
                    submit = Some(GuestActionRequest::Delete { id });
                }
                if ui.button("Cancel").clicked() {
                    panel.close_action();
                }
            });
        });

    if !open {
        panel.close_action();
    }
    submit
}
