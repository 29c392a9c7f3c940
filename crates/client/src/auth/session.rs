use shared_types::{AppError, AppErrorKind, LoginRequest, Session};
use std::collections::HashMap;

use super::jwt::derive_session;
use super::store::TokenStore;
use crate::api::ApiClient;

/// Rebuild the session from the stored token, discarding a token that no
/// longer yields one.
pub fn restore(store: &dyn TokenStore, now_ms: i64) -> Option<Session> {
    let token = store.get()?;
    let session = derive_session(Some(&token), now_ms);
    if session.is_none() {
        store.clear();
    }
    session
}

/// Sign in with username and password.
///
/// The returned token is only stored once it has produced a session.
pub async fn sign_in(api: &ApiClient, request: LoginRequest) -> Result<Session, AppError> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err(AppError::validation(
            "Please enter both username and password",
            HashMap::new(),
        ));
    }

    let token = api.login(&request).await?;
    let session = derive_session(Some(&token), super::now_ms())
        .ok_or_else(|| AppError::auth_invalid("login returned an unusable token"))?;

    api.token_store().set(&token);
    tracing::info!(username = %session.username, roles = ?session.roles, "Signed in");
    Ok(session)
}

pub fn sign_out(store: &dyn TokenStore) {
    store.clear();
    tracing::info!("Signed out");
}

/// Toast text for a failed sign-in.
pub fn login_failure_message(err: &AppError) -> String {
    match err.kind {
        AppErrorKind::ValidationError => err.message.clone(),
        AppErrorKind::Unauthorized => "Invalid username or password".to_string(),
        _ => "Login failed. Please try again.".to_string(),
    }
}
