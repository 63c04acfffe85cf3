//! Schedule page: event list cache and refresh command.

use std::any::Any;

use aisle_states::{
    BoxFuture, CancellationToken, Command, CommandSnapshot, Compute, State, Updater,
    state_assign_impl,
};

use crate::config::BusinessConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::Client;
use crate::models::{Event, ListEventsResponse};

/// GET `/api/events`
pub async fn list_events(api_base_url: &str) -> ApiResult<Vec<Event>> {
    let response = Client::get(format!("{api_base_url}/events"))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !response.is_success() {
        return Err(ApiError::from_response(&response));
    }

    let list: ListEventsResponse = response
        .json()
        .map_err(|e| ApiError::decode("ListEventsResponse", e))?;
    Ok(list.events)
}

#[derive(Debug, Clone, Default)]
pub enum EventListResult {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Event>),
    Error(ApiError),
}

#[derive(Debug, Clone, Default)]
pub struct EventListCompute {
    pub result: EventListResult,
}

impl EventListCompute {
    pub fn is_loading(&self) -> bool {
        matches!(self.result, EventListResult::Loading)
    }

    pub fn events(&self) -> Option<&[Event]> {
        match &self.result {
            EventListResult::Loaded(events) => Some(events.as_slice()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.result {
            EventListResult::Error(err) => Some(err),
            _ => None,
        }
    }
}

impl State for EventListCompute {
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

impl Compute for EventListCompute {}

#[derive(Debug, Default)]
pub struct RefreshEventsCommand;

impl Command for RefreshEventsCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> BoxFuture {
        let config = snap.state::<BusinessConfig>().clone();

        Box::pin(async move {
            updater.set(EventListCompute {
                result: EventListResult::Loading,
            });

            let fetched = list_events(config.api_url().as_str()).await;
            if cancel.is_cancelled() {
                return;
            }

            let result = match fetched {
                Ok(events) => EventListResult::Loaded(events),
                Err(err) => {
                    log::error!("event list refresh failed: {err}");
                    EventListResult::Error(err)
                }
            };
            updater.set(EventListCompute { result });
        })
    }
}
