//! Wire types shared with the backend.

mod event;
mod expense;
mod guest;

pub use event::{Event, ListEventsResponse};
pub use expense::{Expense, ExpenseCategory, ListExpensesResponse, format_cents};
pub use guest::{
    CreateGuestRequest, Guest, GuestParty, ListGuestsResponse, RsvpStatus,
    SendInvitationsRequest, SendInvitationsResponse, UpdateGuestRequest,
};
