//! API client helpers for `/api/guests`.
//!
//! These functions perform network IO and are meant to be called from
//! commands, never from render code. Errors come back as structured
//! [`ApiError`]s; see `crate::error`.

use crate::error::{ApiError, ApiResult};
use crate::http::{Client, HttpError, Response};
use crate::models::{
    CreateGuestRequest, Guest, ListGuestsResponse, SendInvitationsRequest,
    SendInvitationsResponse, UpdateGuestRequest,
};

fn transport(err: HttpError) -> ApiError {
    ApiError::Transport(err.to_string())
}

fn ensure_success(response: &Response) -> Result<(), ApiError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(ApiError::from_response(response))
    }
}

/// GET `/api/guests`
pub async fn list_guests(api_base_url: &str) -> ApiResult<Vec<Guest>> {
    let response = Client::get(format!("{api_base_url}/guests"))
        .send()
        .await
        .map_err(transport)?;
    ensure_success(&response)?;

    let list: ListGuestsResponse = response
        .json()
        .map_err(|e| ApiError::decode("ListGuestsResponse", e))?;
    Ok(list.guests)
}

/// POST `/api/guests`
pub async fn create_guest(api_base_url: &str, request: &CreateGuestRequest) -> ApiResult<Guest> {
    let response = Client::post(format!("{api_base_url}/guests"))
        .json(request)
        .map_err(|e| ApiError::decode("CreateGuestRequest", e))?
        .send()
        .await
        .map_err(transport)?;
    ensure_success(&response)?;

    response.json().map_err(|e| ApiError::decode("Guest", e))
}

/// PUT `/api/guests/{id}`
pub async fn update_guest(
    api_base_url: &str,
    id: u64,
    request: &UpdateGuestRequest,
) -> ApiResult<Guest> {
    let response = Client::put(format!("{api_base_url}/guests/{id}"))
        .json(request)
        .map_err(|e| ApiError::decode("UpdateGuestRequest", e))?
        .send()
        .await
        .map_err(transport)?;
    ensure_success(&response)?;

    response.json().map_err(|e| ApiError::decode("Guest", e))
}

/// DELETE `/api/guests/{id}`
pub async fn delete_guest(api_base_url: &str, id: u64) -> ApiResult<()> {
    let response = Client::delete(format!("{api_base_url}/guests/{id}"))
        .send()
        .await
        .map_err(transport)?;
    ensure_success(&response)
}

/// POST `/api/guests/invitations`
///
/// The bulk action behind the guest table's selection; returns how many
/// invitations went out.
pub async fn send_invitations(api_base_url: &str, guest_ids: &[u64]) -> ApiResult<u32> {
    let body = SendInvitationsRequest {
        guest_ids: guest_ids.to_vec(),
    };
    let response = Client::post(format!("{api_base_url}/guests/invitations"))
        .json(&body)
        .map_err(|e| ApiError::decode("SendInvitationsRequest", e))?
        .send()
        .await
        .map_err(transport)?;
    ensure_success(&response)?;

    let sent: SendInvitationsResponse = response
        .json()
        .map_err(|e| ApiError::decode("SendInvitationsResponse", e))?;
    Ok(sent.sent)
}
