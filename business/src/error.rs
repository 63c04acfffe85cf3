//! Structured API errors.
//!
//! The backend contract returns machine-readable codes with parameters, e.g.
//! `{"code": "guest_not_found", "id": 7}`. Nothing in this workspace matches
//! on English error sentences; the UI maps [`ApiErrorCode`] to display text
//! in one place (`aisle-ui::error_text`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http::Response;

/// Machine-readable error codes in non-2xx response bodies.
///
/// Internally tagged by `code`; parameters sit alongside the tag. Codes this
/// client does not know yet deserialize to [`ApiErrorCode::Unknown`] instead
/// of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ApiErrorCode {
    GuestNotFound { id: u64 },
    DuplicateEmail { email: String },
    InvitationsThrottled { retry_after_secs: u32 },
    Validation { field: String },
    #[serde(other)]
    Unknown,
}

/// Client-side view of a failed API call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, TLS, connectivity).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("backend returned status {status}")]
    Status {
        status: u16,
        code: Option<ApiErrorCode>,
    },

    /// A 2xx body that does not match the expected shape.
    #[error("failed to decode {what}: {detail}")]
    Decode { what: &'static str, detail: String },
}

impl ApiError {
    pub fn code(&self) -> Option<&ApiErrorCode> {
        match self {
            Self::Status { code, .. } => code.as_ref(),
            _ => None,
        }
    }

    /// Build the error for a non-2xx response, picking up the structured
    /// code when the body carries one.
    pub(crate) fn from_response(response: &Response) -> Self {
        Self::Status {
            status: response.status,
            code: response.json::<ApiErrorCode>().ok(),
        }
    }

    pub(crate) fn decode(what: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Decode {
            what,
            detail: err.to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
