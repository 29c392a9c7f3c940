use client::auth::session::{login_failure_message, sign_in};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, LoginRequest, Role};
use tokio::sync::broadcast::error::TryRecvError;

use crate::common::{self, PASSWORD, USERNAME};

fn credentials(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_login_returns_token() {
    let mock = common::mock_api(vec![]).await;
    let api = mock.client();

    let token = api.login(&credentials(USERNAME, PASSWORD)).await.unwrap();
    assert_eq!(token, mock.state.token());
    // `login` alone never stores the token.
    assert_eq!(api.token_store().get(), None);
}

#[tokio::test]
async fn test_sign_in_stores_token_and_derives_session() {
    let mock = common::mock_api(vec![]).await;
    let api = mock.client();

    let session = sign_in(&api, credentials(USERNAME, PASSWORD)).await.unwrap();
    assert_eq!(session.username, USERNAME);
    assert_eq!(session.roles, vec![Role::Admin, Role::Hr]);
    assert_eq!(api.token_store().get().as_deref(), Some(mock.state.token()));
}

#[tokio::test]
async fn test_bad_credentials_store_nothing() {
    let mock = common::mock_api(vec![]).await;
    let api = mock.client();
    let mut events = api.subscribe();

    let err = sign_in(&api, credentials(USERNAME, "wrong")).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(login_failure_message(&err), "Invalid username or password");
    assert_eq!(api.token_store().get(), None);
    // A rejected login is not a session expiry.
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn test_empty_fields_never_reach_the_server() {
    let mock = common::mock_api(vec![]).await;
    let api = mock.client();

    let err = sign_in(&api, credentials("", PASSWORD)).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(mock.state.requests(), 0);
}

#[tokio::test]
async fn test_unknown_login_endpoint_is_generic_failure() {
    let mock = common::mock_api(vec![]).await;
    let api = common::MockApi {
        base_url: format!("{}/missing", mock.base_url),
        state: mock.state.clone(),
    }
    .client();

    let err = sign_in(&api, credentials(USERNAME, PASSWORD)).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(login_failure_message(&err), "Login failed. Please try again.");
    assert_eq!(api.token_store().get(), None);
}
