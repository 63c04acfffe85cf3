//! The guest list page: toolbar, selection bar, table, and modals.

use std::cell::RefCell;

use aisle_business::models::Guest;
use aisle_business::{
    GuestAction, GuestActionCompute, GuestActionCommand, GuestActionInput, GuestActionKind,
    GuestActionRequest, GuestActionState, GuestListCompute, GuestsPanelState,
    RefreshGuestsCommand, SelectionState, SortDirection, TableState,
};
use egui::{Button, Checkbox, Color32, Ui};

use super::columns::{RowAction, columns, sort_comparator};
use super::modals::{delete_guest_modal, guest_form_modal};
use crate::error_text::describe_api_error;
use crate::state::UiState;
use crate::widgets::data_table::DataTable;

/// Table, selection, and one-shot bookkeeping for the guests page.
///
/// Sort/page/selection state is local to this widget; two tables never share
/// it.
pub struct GuestsPanel {
    table: TableState,
    selection: SelectionState,
    refreshed_once: bool,
    notice: Option<String>,
}

impl Default for GuestsPanel {
    fn default() -> Self {
        Self {
            table: TableState::default().with_sort("name", SortDirection::Ascending),
            selection: SelectionState::default(),
            refreshed_once: false,
            notice: None,
        }
    }
}

impl GuestsPanel {
    pub fn ui(&mut self, state: &mut UiState, ui: &mut Ui) {
        let date_format = state.settings.settings().date_format;
        let ctx = &mut state.ctx;

        if !self.refreshed_once {
            self.refreshed_once = true;
            ctx.dispatch::<RefreshGuestsCommand>();
        }

        // React to a finished mutation before anything renders this frame.
        let action_state = ctx
            .cached::<GuestActionCompute>()
            .map(|c| c.state.clone())
            .unwrap_or_default();
        if let GuestActionState::Done { kind, sent } = &action_state {
            if *kind == GuestActionKind::SendInvitations {
                let sent = sent.unwrap_or(0);
                self.notice = Some(format!("Sent {sent} invitation(s)."));
            }
            ctx.update::<GuestsPanelState>(|panel| {
                panel.close_create_modal();
                panel.close_action();
            });
            ctx.update::<GuestActionCompute>(GuestActionCompute::acknowledge);
            ctx.dispatch::<RefreshGuestsCommand>();
        }
        let in_flight = matches!(action_state, GuestActionState::InFlight(_));
        let action_error = match &action_state {
            GuestActionState::Failed { error, .. } => Some(describe_api_error(error)),
            _ => None,
        };

        let (is_loading, guests, list_error) = {
            let compute = ctx.cached::<GuestListCompute>();
            let is_loading = compute.is_some_and(GuestListCompute::is_loading);
            let guests: Vec<Guest> = compute
                .and_then(GuestListCompute::guests)
                .map(<[Guest]>::to_vec)
                .unwrap_or_default();
            let list_error = compute
                .and_then(GuestListCompute::error)
                .map(describe_api_error);
            (is_loading, guests, list_error)
        };

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!is_loading, Button::new("Refresh"))
                .clicked()
            {
                ctx.dispatch::<RefreshGuestsCommand>();
            }
            if ui.button("Add Guest").clicked() {
                ctx.update::<GuestsPanelState>(GuestsPanelState::open_create_modal);
            }
            if is_loading {
                ui.spinner();
                ui.label("Loading...");
            }
        });

        if let Some(error) = &list_error {
            ui.colored_label(Color32::RED, error);
        }

        let modal_open = {
            let panel = ctx.state::<GuestsPanelState>();
            panel.create_modal_open || panel.current_action != GuestAction::None
        };
        if !modal_open && let Some(error) = &action_error {
            ui.horizontal(|ui| {
                ui.colored_label(Color32::RED, error);
                if ui.small_button("Dismiss").clicked() {
                    ctx.update::<GuestActionCompute>(GuestActionCompute::acknowledge);
                }
            });
        }
        if let Some(notice) = self.notice.clone() {
            ui.horizontal(|ui| {
                ui.weak(&notice);
                if ui.small_button("✕").clicked() {
                    self.notice = None;
                }
            });
        }

        ui.add_space(8.0);

        // Selection may only reference rows that are eligible and on the
        // current page, so prune it against this frame's page first.
        self.table.clamp_page(guests.len());
        let eligible: Vec<u64> = {
            let view = self.table.sorted_view(&guests, sort_comparator(&self.table));
            view[self.table.page_range(view.len())]
                .iter()
                .filter(|guest| guest.is_invitable())
                .map(|guest| guest.id)
                .collect()
        };
        self.selection.retain_visible(eligible.iter().copied());

        ui.horizontal(|ui| {
            let mut all = self.selection.all_selected(eligible.iter().copied());
            let select_all = ui.add_enabled(
                !eligible.is_empty(),
                Checkbox::new(&mut all, "Select all on this page"),
            );
            if select_all.changed() {
                if all {
                    self.selection.select_all(eligible.iter().copied());
                } else {
                    for id in &eligible {
                        if self.selection.is_selected(*id) {
                            self.selection.toggle(*id);
                        }
                    }
                }
            }

            let count = self.selection.len();
            let send = ui.add_enabled(
                count > 0 && !in_flight,
                Button::new(format!("Send Invitations ({count})")),
            );
            if send.clicked() {
                let guest_ids = self.selection.take_all();
                ctx.update::<GuestActionInput>(|input| {
                    input.request = Some(GuestActionRequest::SendInvitations { guest_ids });
                });
                ctx.dispatch::<GuestActionCommand>();
            }
        });

        ui.add_space(4.0);

        let toggled = RefCell::new(Vec::new());
        let row_action: RefCell<Option<RowAction>> = RefCell::new(None);
        DataTable::new(
            "guests_table",
            columns(&self.selection, &toggled, &row_action, date_format),
        )
        .empty_message("No guests yet. Add your first guest to get started.")
        .show(ui, &mut self.table, &guests);

        for id in toggled.into_inner() {
            self.selection.toggle(id);
        }

        if let Some(action) = row_action.into_inner() {
            match action {
                RowAction::Edit(guest) => {
                    ctx.update::<GuestsPanelState>(|panel| panel.start_edit(&guest));
                }
                RowAction::Delete(id) => {
                    ctx.update::<GuestsPanelState>(|panel| panel.start_delete(id));
                }
                RowAction::SendInvitation(id) => {
                    ctx.update::<GuestActionInput>(|input| {
                        input.request = Some(GuestActionRequest::SendInvitations {
                            guest_ids: vec![id],
                        });
                    });
                    ctx.dispatch::<GuestActionCommand>();
                }
            }
        }

        // Modals last so they overlay the page.
        let submit = {
            let panel = ctx.state_mut::<GuestsPanelState>();
            guest_form_modal(panel, in_flight, action_error.as_deref(), ui).or_else(|| {
                delete_guest_modal(panel, in_flight, action_error.as_deref(), ui)
            })
        };
        if let Some(request) = submit {
            ctx.update::<GuestActionInput>(|input| input.request = Some(request));
            ctx.dispatch::<GuestActionCommand>();
        }
    }
}

#[cfg(test)]
mod guests_panel_tests {
    use super::*;
    use aisle_business::BusinessConfig;
    use aisle_business::models::{GuestParty, RsvpStatus};
    use aisle_business::settings::MemoryBackend;
    use egui_kittest::Harness;
    use kittest::Queryable;

    fn test_state() -> UiState {
        UiState::with_config(
            BusinessConfig::new("http://127.0.0.1:9"),
            Box::new(MemoryBackend::default()),
        )
    }

    fn guest(id: u64, name: &str, email: Option<&str>) -> Guest {
        Guest {
            id,
            name: name.to_owned(),
            email: email.map(str::to_owned),
            party: GuestParty::Shared,
            rsvp: RsvpStatus::Pending,
            plus_ones: 0,
            invited_at: None,
        }
    }

    fn load_guests(state: &mut UiState, guests: Vec<Guest>) {
        state.ctx.updater().set(GuestListCompute {
            result: aisle_business::GuestListResult::Loaded(guests),
        });
        state.ctx.sync_computes();
    }

    struct Fixture {
        state: UiState,
        panel: GuestsPanel,
    }

    #[test]
    fn test_toolbar_and_headers_render() {
        let mut state = test_state();
        load_guests(&mut state, vec![guest(1, "Ada", Some("ada@example.com"))]);
        let mut fixture = Fixture {
            state,
            panel: GuestsPanel::default(),
        };

        let harness = Harness::new_ui_state(
            |ui, fixture| {
                let Fixture { state, panel } = fixture;
                panel.ui(state, ui);
            },
            &mut fixture,
        );

        assert!(harness.query_by_label_contains("Refresh").is_some());
        assert!(harness.query_by_label_contains("Add Guest").is_some());
        assert!(harness.query_by_label_contains("RSVP").is_some());
        assert!(harness.query_by_label_contains("Ada").is_some());
    }

    #[test]
    fn test_empty_list_shows_message_without_table() {
        let mut state = test_state();
        load_guests(&mut state, Vec::new());
        let mut fixture = Fixture {
            state,
            panel: GuestsPanel::default(),
        };

        let harness = Harness::new_ui_state(
            |ui, fixture| {
                let Fixture { state, panel } = fixture;
                panel.ui(state, ui);
            },
            &mut fixture,
        );

        assert!(harness.query_by_label_contains("No guests yet").is_some());
        assert!(harness.query_by_label_contains("RSVP").is_none());
    }

    #[test]
    fn test_add_guest_opens_form_modal() {
        let mut state = test_state();
        load_guests(&mut state, Vec::new());
        let mut fixture = Fixture {
            state,
            panel: GuestsPanel::default(),
        };

        let mut harness = Harness::new_ui_state(
            |ui, fixture| {
                let Fixture { state, panel } = fixture;
                panel.ui(state, ui);
            },
            &mut fixture,
        );

        harness.get_by_label("Add Guest").click();
        harness.step();

        assert!(
            harness
                .state()
                .state
                .ctx
                .state::<GuestsPanelState>()
                .create_modal_open
        );
        harness.step();
        assert!(harness.query_by_label_contains("Name:").is_some());
    }

    #[test]
    fn test_select_all_selects_only_invitable_guests() {
        let mut state = test_state();
        load_guests(
            &mut state,
            vec![
                guest(1, "Ada", Some("ada@example.com")),
                guest(2, "Grace", None),
                guest(3, "Lin", Some("lin@example.com")),
            ],
        );
        let mut fixture = Fixture {
            state,
            panel: GuestsPanel::default(),
        };

        let mut harness = Harness::new_ui_state(
            |ui, fixture| {
                let Fixture { state, panel } = fixture;
                panel.ui(state, ui);
            },
            &mut fixture,
        );

        harness.get_by_label("Select all on this page").click();
        harness.step();

        let selection = &harness.state().panel.selection;
        assert_eq!(selection.len(), 2);
        assert!(selection.is_selected(1));
        assert!(!selection.is_selected(2));
        assert!(selection.is_selected(3));
    }

    #[test]
    fn test_send_button_disabled_without_selection() {
        let mut state = test_state();
        load_guests(&mut state, vec![guest(1, "Ada", Some("ada@example.com"))]);
        let mut fixture = Fixture {
            state,
            panel: GuestsPanel::default(),
        };

        let harness = Harness::new_ui_state(
            |ui, fixture| {
                let Fixture { state, panel } = fixture;
                panel.ui(state, ui);
            },
            &mut fixture,
        );

        assert!(
            harness
                .query_by_label_contains("Send Invitations (0)")
                .is_some()
        );
    }
}
