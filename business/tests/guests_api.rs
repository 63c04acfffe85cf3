//! Integration tests for the guests API client against a mock backend.

#![cfg(not(target_arch = "wasm32"))]

use aisle_business::guests::api;
use aisle_business::models::{CreateGuestRequest, GuestParty};
use aisle_business::{
    ApiError, ApiErrorCode, BusinessConfig, GuestActionCommand, GuestActionCompute,
    GuestActionInput, GuestActionKind, GuestActionRequest, GuestActionState, GuestListCompute,
    RefreshGuestsCommand,
};
use aisle_states::{CancellationToken, Command, StateCtx};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_base(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

fn guest_json(id: u64, name: &str, email: Option<&str>) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "email": email,
        "party": "shared",
        "rsvp": "pending",
        "plus_ones": 0,
    })
}

#[tokio::test]
async fn test_list_guests_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/guests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "guests": [
                guest_json(1, "Ada", Some("ada@example.com")),
                guest_json(2, "Grace", None),
            ]
        })))
        .mount(&server)
        .await;

    let guests = api::list_guests(&api_base(&server)).await.unwrap();

    assert_eq!(guests.len(), 2);
    assert_eq!(guests[0].name, "Ada");
    assert!(guests[0].is_invitable());
    assert!(!guests[1].is_invitable());
}

#[tokio::test]
async fn test_update_missing_guest_yields_structured_code() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/guests/7"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({
                "code": "guest_not_found",
                "id": 7,
            })),
        )
        .mount(&server)
        .await;

    let request = aisle_business::models::UpdateGuestRequest {
        name: "Nobody".to_owned(),
        email: None,
        party: GuestParty::Shared,
        plus_ones: 0,
    };
    let err = api::update_guest(&api_base(&server), 7, &request)
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some(&ApiErrorCode::GuestNotFound { id: 7 }));
}

#[tokio::test]
async fn test_create_guest_duplicate_email() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/guests"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "duplicate_email",
            "email": "ada@example.com",
        })))
        .mount(&server)
        .await;

    let request = CreateGuestRequest {
        name: "Ada".to_owned(),
        email: Some("ada@example.com".to_owned()),
        party: GuestParty::Bride,
        plus_ones: 1,
    };
    let err = api::create_guest(&api_base(&server), &request)
        .await
        .unwrap_err();

    match err {
        ApiError::Status { status, code } => {
            assert_eq!(status, 409);
            assert_eq!(
                code,
                Some(ApiErrorCode::DuplicateEmail {
                    email: "ada@example.com".to_owned()
                })
            );
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_send_invitations_posts_ids_and_returns_count() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/guests/invitations"))
        .and(body_json(json!({ "guest_ids": [1, 3, 5] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "sent": 3 })))
        .mount(&server)
        .await;

    let sent = api::send_invitations(&api_base(&server), &[1, 3, 5])
        .await
        .unwrap();
    assert_eq!(sent, 3);
}

#[tokio::test]
async fn test_send_invitations_throttled() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/guests/invitations"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "code": "invitations_throttled",
            "retry_after_secs": 60,
        })))
        .mount(&server)
        .await;

    let err = api::send_invitations(&api_base(&server), &[1]).await.unwrap_err();
    assert_eq!(
        err.code(),
        Some(&ApiErrorCode::InvitationsThrottled {
            retry_after_secs: 60
        })
    );
}

#[tokio::test]
async fn test_transport_error_when_backend_is_down() {
    // A port nothing listens on.
    let err = api::list_guests("http://127.0.0.1:9/api").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn test_refresh_command_populates_list_compute() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/guests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "guests": [guest_json(9, "Lin", Some("lin@example.com"))]
        })))
        .mount(&server)
        .await;

    let mut ctx = StateCtx::new();
    ctx.add_state(BusinessConfig::new(server.uri()));
    ctx.record_compute(GuestListCompute::default());

    RefreshGuestsCommand
        .run(ctx.snapshot(), ctx.updater(), CancellationToken::new())
        .await;
    ctx.sync_computes();

    let compute = ctx.cached::<GuestListCompute>().unwrap();
    let guests = compute.guests().expect("list should be loaded");
    assert_eq!(guests.len(), 1);
    assert_eq!(guests[0].id, 9);
}

#[tokio::test]
async fn test_action_command_reports_invitation_count() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/guests/invitations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "sent": 2 })))
        .mount(&server)
        .await;

    let mut ctx = StateCtx::new();
    ctx.add_state(BusinessConfig::new(server.uri()));
    ctx.add_state(GuestActionInput {
        request: Some(GuestActionRequest::SendInvitations {
            guest_ids: vec![2, 4],
        }),
    });
    ctx.record_compute(GuestActionCompute::default());

    GuestActionCommand
        .run(ctx.snapshot(), ctx.updater(), CancellationToken::new())
        .await;
    ctx.sync_computes();

    let compute = ctx.cached::<GuestActionCompute>().unwrap();
    match &compute.state {
        GuestActionState::Done { kind, sent } => {
            assert_eq!(*kind, GuestActionKind::SendInvitations);
            assert_eq!(*sent, Some(2));
        }
        other => panic!("expected Done, got {other:?}"),
    }
}
