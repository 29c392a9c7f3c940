use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Persistent home of the bearer token under a single key.
///
/// Storage failures are logged and otherwise treated as "no token"; the
/// console can always fall back to asking the user to sign in again.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Process-local store, used by tests and as a last-resort fallback.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot().clone()
    }

    fn set(&self, token: &str) {
        *self.slot() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.slot() = None;
    }
}

/// Token kept in a single file, for desktop builds.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/employee-console/<key>`, when the platform has a config dir.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn in_config_dir(key: &str) -> Option<Self> {
        dirs::config_dir().map(|dir| Self::new(dir.join("employee-console").join(key)))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                (!token.is_empty()).then(|| token.to_string())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read token file");
                None
            }
        }
    }

    fn set(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), error = %e, "Failed to create token directory");
                return;
            }
        }
        if let Err(e) = std::fs::write(&self.path, token) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to write token file");
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove token file");
            }
        }
    }
}

/// Browser `localStorage` under one key. The storage handle is looked up on
/// every call so the store itself holds no JS values.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStorageTokenStore {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok().flatten()
    }

    fn set(&self, token: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(&self.key, token).is_err() {
                    tracing::warn!(key = %self.key, "localStorage rejected the token");
                }
            }
            None => tracing::warn!("localStorage is unavailable"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}

/// The platform's persistent store for `key`: `localStorage` on the web, a
/// file in the user config dir on desktop, memory when neither is available.
pub fn platform_store(key: &str) -> Arc<dyn TokenStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(LocalStorageTokenStore::new(key))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileTokenStore::in_config_dir(key) {
            Some(store) => Arc::new(store),
            None => {
                tracing::warn!("No config directory, token will not survive a restart");
                Arc::new(MemoryTokenStore::new())
            }
        }
    }
}
