use serde::{Deserialize, Serialize};

/// Base URL used when `console.toml` does not set one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Storage key used when `console.toml` does not set one.
pub const DEFAULT_TOKEN_KEY: &str = "token";

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

/// Where the REST API lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Token persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

/// Top-level config file structure matching `console.toml`.
///
/// Every field has a default, so a missing or partial file still yields a
/// usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl ClientConfig {
    /// Replace the base URL when `url` is present and non-blank.
    pub fn with_base_url_override(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        self
    }

    /// Base URL without a trailing slash, ready for path joining.
    pub fn api_base(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}
