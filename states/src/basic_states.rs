use std::any::Any;

use chrono::{DateTime, Utc};

use crate::state::{State, state_assign_impl};

/// Frame-stable wall clock.
///
/// The app loop ticks this once per frame; widgets and commands read it
/// instead of calling `Utc::now()` so tests can pin the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time(DateTime<Utc>);

impl Time {
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    pub fn tick(&mut self) {
        self.0 = Utc::now();
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl Default for Time {
    fn default() -> Self {
        Self(Utc::now())
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl State for Time {
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
        Some(Box::new(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;

    #[test]
    fn test_fixed_time_is_stable() {
        let at = Utc.with_ymd_and_hms(2026, 6, 20, 15, 0, 0).unwrap();
        let time = Time::fixed(at);
        assert_eq!(time.now(), at);
        assert_eq!(*time.as_ref(), at);
    }

    #[test]
    fn test_tick_moves_forward() {
        let at = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let mut time = Time::fixed(at);
        time.tick();
        assert!(time.now() > at);
    }
}
