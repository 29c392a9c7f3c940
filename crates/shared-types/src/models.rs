use serde::{Deserialize, Serialize};
use std::fmt;

/// Access tier carried in the token's `roles` claim.
///
/// Claim strings are matched exactly; anything outside this set is dropped
/// at the boundary instead of flowing into access checks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "HR")]
    Hr,
    #[serde(rename = "EMPLOYEE")]
    Employee,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Hr, Role::Employee];

    /// Parse a claim string. Case-sensitive, no normalization.
    pub fn parse_claim(s: &str) -> Option<Self> {
        match s {
            "ADMIN" => Some(Role::Admin),
            "HR" => Some(Role::Hr),
            "EMPLOYEE" => Some(Role::Employee),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Hr => "HR",
            Role::Employee => "EMPLOYEE",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client-side identity derived from a non-expired token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub username: String,
    /// Roles in claim order, duplicates removed.
    pub roles: Vec<Role>,
}

impl Session {
    pub fn new(username: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            username: username.into(),
            roles,
        }
    }

    /// True when `required` is empty or shares at least one role with this session.
    pub fn has_any_role(&self, required: &[Role]) -> bool {
        required.is_empty() || self.roles.iter().any(|r| required.contains(r))
    }

    pub fn is_admin(&self) -> bool {
        self.has_any_role(&[Role::Admin])
    }
}

/// Shell-level view of the session lifecycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionStatus {
    /// The stored token has not been read yet.
    #[default]
    Loading,
    SignedOut,
    SignedIn(Session),
}

impl SessionStatus {
    pub fn from_session(session: Option<Session>) -> Self {
        match session {
            Some(s) => SessionStatus::SignedIn(s),
            None => SessionStatus::SignedOut,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionStatus::SignedIn(s) => Some(s),
            _ => None,
        }
    }

    /// Role check for role-aware UI; false while loading or signed out.
    pub fn has_any_role(&self, required: &[Role]) -> bool {
        self.session().is_some_and(|s| s.has_any_role(required))
    }
}

/// Claims embedded in the bearer token by the auth server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenClaims {
    pub sub: String,
    /// Expiry in epoch seconds.
    pub exp: i64,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}
