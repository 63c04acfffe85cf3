//! The single place API errors become user-facing sentences.
//!
//! Everything upstream works with [`ApiErrorCode`] values; no other module
//! inspects error message strings.

use aisle_business::{ApiError, ApiErrorCode};

pub fn describe_api_error(error: &ApiError) -> String {
    match error {
        ApiError::Transport(_) => {
            "Could not reach the server. Check your connection and try again.".to_owned()
        }
        ApiError::Status { status, code } => match code {
            Some(code) => describe_code(code),
            None => format!("The server returned an unexpected error (status {status})."),
        },
        ApiError::Decode { .. } => {
            "The server sent a response this app could not understand.".to_owned()
        }
    }
}

fn describe_code(code: &ApiErrorCode) -> String {
    match code {
        ApiErrorCode::GuestNotFound { .. } => {
            "That guest no longer exists. The list may be out of date; refresh it.".to_owned()
        }
        ApiErrorCode::DuplicateEmail { email } => {
            format!("A guest with the email {email} is already on the list.")
        }
        ApiErrorCode::InvitationsThrottled { retry_after_secs } => {
            format!("Invitations are being sent too quickly. Try again in {retry_after_secs} seconds.")
        }
        ApiErrorCode::Validation { field } => {
            format!("The {field} field is invalid. Fix it and try again.")
        }
        ApiErrorCode::Unknown => "Something went wrong on the server.".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_codes_become_sentences() {
        let err = ApiError::Status {
            status: 409,
            code: Some(ApiErrorCode::DuplicateEmail {
                email: "ada@example.com".to_owned(),
            }),
        };
        assert_eq!(
            describe_api_error(&err),
            "A guest with the email ada@example.com is already on the list."
        );
    }

    #[test]
    fn test_status_without_code_mentions_status() {
        let err = ApiError::Status {
            status: 502,
            code: None,
        };
        assert!(describe_api_error(&err).contains("502"));
    }

    #[test]
    fn test_throttle_mentions_retry_delay() {
        let err = ApiError::Status {
            status: 429,
            code: Some(ApiErrorCode::InvitationsThrottled {
                retry_after_secs: 30,
            }),
        };
        assert!(describe_api_error(&err).contains("30 seconds"));
    }
}
