use shared_types::{Role, SessionStatus};

/// Outcome of an access check for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Session not known yet; show a neutral loading state.
    Pending,
    Allow,
    RedirectToLogin,
    /// Signed in but lacking every required role.
    RedirectToHome,
}

/// Decide whether the current session may view a route requiring any of
/// `required`. An empty requirement admits every signed-in user.
pub fn authorize(status: &SessionStatus, required: &[Role]) -> Access {
    match status {
        SessionStatus::Loading => Access::Pending,
        SessionStatus::SignedOut => Access::RedirectToLogin,
        SessionStatus::SignedIn(session) if session.has_any_role(required) => Access::Allow,
        SessionStatus::SignedIn(_) => Access::RedirectToHome,
    }
}
