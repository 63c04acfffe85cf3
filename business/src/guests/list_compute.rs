//! Guest list cache + refresh command.
//!
//! [`GuestListCompute`] stores the latest status/result; the UI reads it via
//! `ctx.cached::<GuestListCompute>()`. [`RefreshGuestsCommand`] performs the
//! network IO and updates the compute through `Updater::set`.

use std::any::Any;

use aisle_states::{
    BoxFuture, CancellationToken, Command, CommandSnapshot, Compute, State, Updater,
    state_assign_impl,
};

use crate::config::BusinessConfig;
use crate::error::ApiError;
use crate::guests::api;
use crate::models::Guest;

#[derive(Debug, Clone, Default)]
pub enum GuestListResult {
    /// No request has been made yet.
    #[default]
    Idle,

    /// A refresh is in flight.
    Loading,

    /// The last refresh succeeded with these guests.
    Loaded(Vec<Guest>),

    /// The last refresh failed.
    Error(ApiError),
}

#[derive(Debug, Clone, Default)]
pub struct GuestListCompute {
    pub result: GuestListResult,
}

impl GuestListCompute {
    pub fn is_loading(&self) -> bool {
        matches!(self.result, GuestListResult::Loading)
    }

    pub fn guests(&self) -> Option<&[Guest]> {
        match &self.result {
            GuestListResult::Loaded(guests) => Some(guests.as_slice()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.result {
            GuestListResult::Error(err) => Some(err),
            _ => None,
        }
    }
}

impl State for GuestListCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl Compute for GuestListCompute {}

/// Refresh the guest list from the backend.
#[derive(Debug, Default)]
pub struct RefreshGuestsCommand;

impl Command for RefreshGuestsCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> BoxFuture {
        let config = snap.state::<BusinessConfig>().clone();

        Box::pin(async move {
            updater.set(GuestListCompute {
                result: GuestListResult::Loading,
            });

            let fetched = api::list_guests(config.api_url().as_str()).await;
            if cancel.is_cancelled() {
                return;
            }

            let result = match fetched {
                Ok(guests) => GuestListResult::Loaded(guests),
                Err(err) => {
                    log::error!("guest list refresh failed: {err}");
                    GuestListResult::Error(err)
                }
            };
            updater.set(GuestListCompute { result });
        })
    }
}
