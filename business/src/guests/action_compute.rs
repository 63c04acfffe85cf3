//! Guest mutations: create / update / delete / bulk invitations.
//!
//! One command covers all four; the UI fills [`GuestActionInput`] with the
//! desired request, dispatches [`GuestActionCommand`], and watches
//! [`GuestActionCompute`] for completion. On `Done` the panel refreshes the
//! list, clears the table selection (for invitations), and acknowledges the
//! compute back to `Idle`.

use std::any::Any;

use aisle_states::{
    BoxFuture, CancellationToken, Command, CommandSnapshot, Compute, State, Updater,
    state_assign_impl,
};

use crate::config::BusinessConfig;
use crate::error::ApiError;
use crate::guests::api;
use crate::models::{CreateGuestRequest, UpdateGuestRequest};

#[derive(Debug, Clone)]
pub enum GuestActionRequest {
    Create(CreateGuestRequest),
    Update { id: u64, request: UpdateGuestRequest },
    Delete { id: u64 },
    SendInvitations { guest_ids: Vec<u64> },
}

impl GuestActionRequest {
    pub fn kind(&self) -> GuestActionKind {
        match self {
            Self::Create(_) => GuestActionKind::Create,
            Self::Update { .. } => GuestActionKind::Update,
            Self::Delete { .. } => GuestActionKind::Delete,
            Self::SendInvitations { .. } => GuestActionKind::SendInvitations,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestActionKind {
    Create,
    Update,
    Delete,
    SendInvitations,
}

/// Input the UI fills before dispatching [`GuestActionCommand`].
#[derive(Debug, Clone, Default)]
pub struct GuestActionInput {
    pub request: Option<GuestActionRequest>,
}

impl State for GuestActionInput {
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

#[derive(Debug, Clone, Default)]
pub enum GuestActionState {
    #[default]
    Idle,

    InFlight(GuestActionKind),

    /// `sent` is filled for the invitations action.
    Done {
        kind: GuestActionKind,
        sent: Option<u32>,
    },

    Failed {
        kind: GuestActionKind,
        error: ApiError,
    },
}

#[derive(Debug, Clone, Default)]
pub struct GuestActionCompute {
    pub state: GuestActionState,
}

impl GuestActionCompute {
    pub fn in_flight(&self) -> bool {
        matches!(self.state, GuestActionState::InFlight(_))
    }

    /// Reset to `Idle` once the UI has reacted to a terminal state.
    pub fn acknowledge(&mut self) {
        self.state = GuestActionState::Idle;
    }
}

impl State for GuestActionCompute {
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

impl Compute for GuestActionCompute {}

#[derive(Debug, Default)]
pub struct GuestActionCommand;

impl Command for GuestActionCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> BoxFuture {
        let input = snap.state::<GuestActionInput>().clone();
        let config = snap.state::<BusinessConfig>().clone();

        Box::pin(async move {
            let Some(request) = input.request else {
                log::error!("GuestActionCommand dispatched without a request");
                return;
            };
            let kind = request.kind();
            let base = config.api_url();

            updater.set(GuestActionCompute {
                state: GuestActionState::InFlight(kind),
            });

            let outcome: Result<Option<u32>, ApiError> = match request {
                GuestActionRequest::Create(req) => {
                    api::create_guest(base.as_str(), &req).await.map(|_| None)
                }
                GuestActionRequest::Update { id, request: req } => {
                    api::update_guest(base.as_str(), id, &req).await.map(|_| None)
                }
                GuestActionRequest::Delete { id } => {
                    api::delete_guest(base.as_str(), id).await.map(|_| None)
                }
                GuestActionRequest::SendInvitations { guest_ids } => api::send_invitations(
                    base.as_str(),
                    &guest_ids,
                )
                .await
                .map(Some),
            };
            if cancel.is_cancelled() {
                return;
            }

            let state = match outcome {
                Ok(sent) => GuestActionState::Done { kind, sent },
                Err(error) => {
                    log::error!("guest action {kind:?} failed: {error}");
                    GuestActionState::Failed { kind, error }
                }
            };
            updater.set(GuestActionCompute { state });
        })
    }
}
