use client::ApiClient;
use dioxus::prelude::*;
use shared_types::{Role, Session, SessionStatus};

/// Global authentication state. Login, logout and forced logout are the
/// only writers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub status: Signal<SessionStatus>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            status: Signal::new(SessionStatus::Loading),
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.status.read().session().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status.read().session().is_some()
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.status.read().has_any_role(roles)
    }

    pub fn set_session(&mut self, session: Session) {
        self.status.set(SessionStatus::SignedIn(session));
    }

    pub fn clear_auth(&mut self) {
        self.status.set(SessionStatus::SignedOut);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to access the shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Sign out locally: drop the token and the session.
pub fn logout(api: &ApiClient, auth: &mut AuthState) {
    client::auth::session::sign_out(api.token_store().as_ref());
    auth.clear_auth();
}
