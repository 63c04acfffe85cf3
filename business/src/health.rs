//! Backend availability indicator for the top bar.
//!
//! The UI dispatches [`CheckHealthCommand`] each frame; the command itself
//! rate-limits to one probe per five minutes based on `last_checked`, so
//! dispatching eagerly is fine.

use std::any::Any;

use aisle_states::{
    BoxFuture, CancellationToken, Command, CommandSnapshot, Compute, State, Time, Updater,
    state_assign_impl,
};
use chrono::{DateTime, Utc};

use crate::config::BusinessConfig;
use crate::http::Client;

const CHECK_INTERVAL_MINUTES: i64 = 5;

#[derive(Debug, Clone, Default)]
pub struct ApiHealthCompute {
    last_checked: Option<DateTime<Utc>>,
    last_error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiAvailability<'a> {
    Available(DateTime<Utc>),
    Unavailable(DateTime<Utc>, &'a str),
    Unknown,
}

impl ApiHealthCompute {
    pub fn availability(&self) -> ApiAvailability<'_> {
        match (self.last_checked, &self.last_error) {
            (Some(at), None) => ApiAvailability::Available(at),
            (Some(at), Some(err)) => ApiAvailability::Unavailable(at, err.as_str()),
            (None, _) => ApiAvailability::Unknown,
        }
    }

    pub fn should_check(&self, now: DateTime<Utc>) -> bool {
        match self.last_checked {
            Some(at) => now.signed_duration_since(at).num_minutes() >= CHECK_INTERVAL_MINUTES,
            None => true,
        }
    }
}

impl State for ApiHealthCompute {
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

impl Compute for ApiHealthCompute {}

/// Probe `GET /api/is-health` and record the outcome.
#[derive(Debug, Default)]
pub struct CheckHealthCommand;

impl Command for CheckHealthCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> BoxFuture {
        let config = snap.state::<BusinessConfig>().clone();
        let now = snap.state::<Time>().now();
        let current = snap.state::<ApiHealthCompute>().clone();

        Box::pin(async move {
            if !current.should_check(now) {
                return;
            }
            log::info!("checking API health at {now}");

            let probe = Client::get(format!("{}/is-health", config.api_url()))
                .send()
                .await;
            if cancel.is_cancelled() {
                return;
            }

            let last_error = match probe {
                Ok(response) if response.is_success() => None,
                Ok(response) => Some(format!("status {}", response.status)),
                Err(err) => Some(err.to_string()),
            };
            if let Some(err) = &last_error {
                log::error!("API health check failed: {err}");
            }
            updater.set(ApiHealthCompute {
                last_checked: Some(now),
                last_error,
            });
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_unknown_until_first_check() {
        let health = ApiHealthCompute::default();
        assert_eq!(health.availability(), ApiAvailability::Unknown);
        assert!(health.should_check(Utc::now()));
    }

    #[test]
    fn test_should_check_respects_interval() {
        let now = Utc::now();
        let health = ApiHealthCompute {
            last_checked: Some(now),
            last_error: None,
        };

        assert!(!health.should_check(now + Duration::minutes(4)));
        assert!(health.should_check(now + Duration::minutes(5)));
    }

    #[test]
    fn test_availability_reports_last_error() {
        let now = Utc::now();
        let health = ApiHealthCompute {
            last_checked: Some(now),
            last_error: Some("status 503".to_owned()),
        };

        assert_eq!(
            health.availability(),
            ApiAvailability::Unavailable(now, "status 503")
        );
    }
}
