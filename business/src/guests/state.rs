//! Panel/modal state for the guests page.
//!
//! Lives in `aisle-business` so UI code stays "dumb": widgets read this
//! state, mutate it through `StateCtx::update`, and dispatch commands. Table
//! sort/page/selection state is not here; it stays local to the table widget.

use std::any::Any;

use aisle_states::{State, state_assign_impl};

use crate::models::{CreateGuestRequest, Guest, GuestParty, UpdateGuestRequest};

/// Which modal/inline action is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuestAction {
    #[default]
    None,

    /// Edit modal for the guest with this id.
    Edit(u64),

    /// Delete confirmation for the guest with this id.
    ConfirmDelete(u64),
}

/// Form inputs shared by the create and edit modals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestForm {
    pub name: String,
    pub email: String,
    pub party: GuestParty,
    pub plus_ones: u8,
}

impl GuestForm {
    fn email_field(&self) -> Option<String> {
        let email = self.email.trim();
        if email.is_empty() {
            None
        } else {
            Some(email.to_owned())
        }
    }

    pub fn to_create_request(&self) -> CreateGuestRequest {
        CreateGuestRequest {
            name: self.name.trim().to_owned(),
            email: self.email_field(),
            party: self.party,
            plus_ones: self.plus_ones,
        }
    }

    pub fn to_update_request(&self) -> UpdateGuestRequest {
        UpdateGuestRequest {
            name: self.name.trim().to_owned(),
            email: self.email_field(),
            party: self.party,
            plus_ones: self.plus_ones,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestsPanelState {
    pub current_action: GuestAction,
    pub create_modal_open: bool,
    pub form: GuestForm,
}

impl GuestsPanelState {
    pub fn open_create_modal(&mut self) {
        self.create_modal_open = true;
        self.form = GuestForm::default();
    }

    pub fn close_create_modal(&mut self) {
        self.create_modal_open = false;
        self.form = GuestForm::default();
    }

    /// Open the edit modal prefilled from the current row.
    pub fn start_edit(&mut self, guest: &Guest) {
        self.current_action = GuestAction::Edit(guest.id);
        self.form = GuestForm {
            name: guest.name.clone(),
            email: guest.email.clone().unwrap_or_default(),
            party: guest.party,
            plus_ones: guest.plus_ones,
        };
    }

    pub fn start_delete(&mut self, id: u64) {
        self.current_action = GuestAction::ConfirmDelete(id);
    }

    pub fn close_action(&mut self) {
        self.current_action = GuestAction::None;
        self.form = GuestForm::default();
    }
}

impl State for GuestsPanelState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
