use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// Token missing, unparseable, or past expiry.
    AuthInvalid,
    Unauthorized,
    NotFound,
    /// Transport failure, unexpected status, or undecodable body.
    RequestFailed,
    ValidationError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::AuthInvalid => write!(f, "AuthInvalid"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::RequestFailed => write!(f, "RequestFailed"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
        }
    }
}

/// Structured application error used by the client, controllers and UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::AuthInvalid,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Unauthorized,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn request_failed(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::RequestFailed,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == AppErrorKind::Unauthorized
    }

    /// Map an HTTP status code onto the error taxonomy.
    ///
    /// Only 401 and 404 get their own kinds; every other non-success status
    /// collapses into `RequestFailed`.
    pub fn from_status(status: u16, context: &str) -> Self {
        match status {
            401 => Self::unauthorized(format!("{context}: unauthorized")),
            404 => Self::not_found(format!("{context}: not found")),
            other => Self::request_failed(format!("{context}: server responded with {other}")),
        }
    }

    /// User-facing text for a toast. Validation errors keep their message;
    /// everything else falls back to a generic sentence.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::ValidationError => self.message.clone(),
            AppErrorKind::Unauthorized | AppErrorKind::AuthInvalid => {
                "Your session has expired. Please sign in again.".to_string()
            }
            AppErrorKind::NotFound => "The requested record could not be found.".to_string(),
            AppErrorKind::RequestFailed => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                let key = crate::FormField::from_key(&field)
                    .map(|f| f.as_str().to_string())
                    .unwrap_or_else(|| field.to_string());
                field_errors.insert(key, msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}
