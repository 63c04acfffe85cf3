use std::any::Any;

use aisle_states::{State, state_assign_impl};
use ustr::Ustr;

/// Where the dashboard talks to.
///
/// Registered in the `StateCtx` so commands can read it from their snapshot;
/// tests overwrite it with a mock server's URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Canonical base for `/api` routes.
    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url))
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            // On web the app is served from the same origin as the API.
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else if cfg!(feature = "env_test") {
                "https://test.aisleday.app".to_owned()
            } else if cfg!(feature = "env_staging") {
                "https://staging.aisleday.app".to_owned()
            } else {
                "https://aisleday.app".to_owned()
            },
        }
    }
}

impl State for BusinessConfig {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_appends_api_segment() {
        let config = BusinessConfig::new("https://example.com");
        assert_eq!(config.api_url(), Ustr::from("https://example.com/api"));
    }

    #[test]
    fn test_empty_base_is_relative() {
        let config = BusinessConfig::new("");
        assert_eq!(config.api_url(), Ustr::from("/api"));
    }
}
