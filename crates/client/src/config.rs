use shared_types::ClientConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// `console.toml` from the workspace root, baked in at compile time so the
/// web build needs no filesystem access.
const EMBEDDED: &str = include_str!("../../../console.toml");

/// Parse config text. A file that fails to parse yields the defaults.
pub fn parse(contents: &str) -> ClientConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse console.toml, using defaults");
        ClientConfig::default()
    })
}

/// Load the config into the global `OnceLock`. Only the first call has
/// effect; `API_URL` set at build time replaces the base URL.
pub fn load() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        let config = parse(EMBEDDED).with_base_url_override(option_env!("API_URL"));
        tracing::info!(
            base_url = %config.api.base_url,
            token_key = %config.auth.token_key,
            "Client configuration loaded"
        );
        config
    })
}

/// The loaded config, loading it first if needed.
pub fn config() -> &'static ClientConfig {
    load()
}
