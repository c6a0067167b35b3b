//! The admin session: a bearer token with pluggable persistence.
//!
//! The session is constructed once and handed to every network-calling
//! collaborator; nothing reads the token from ambient global state.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use eduhub_core::config::auth::AuthConfig;
use eduhub_core::{AppError, AppResult};

/// Persistence backend for the session token.
pub trait TokenStore: Send + Sync {
    /// Load the saved token, if any.
    fn load(&self) -> AppResult<Option<String>>;
    /// Persist the token.
    fn save(&self, token: &str) -> AppResult<()>;
    /// Forget the token.
    fn clear(&self) -> AppResult<()>;
}

/// On-disk JSON shape of a saved session.
#[derive(Debug, Serialize, Deserialize)]
struct SavedSession {
    token: String,
    saved_at: DateTime<Utc>,
}

/// Token store backed by a JSON file (the analog of the browser's
/// persistent token storage).
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store at the given path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> AppResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)?;
        let saved: SavedSession = serde_json::from_str(&raw)
            .map_err(|e| AppError::with_source(
                eduhub_core::error::ErrorKind::Session,
                format!("Corrupt session file {}", self.path.display()),
                e,
            ))?;
        Ok(Some(saved.token))
    }

    fn save(&self, token: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let saved = SavedSession {
            token: token.to_string(),
            saved_at: Utc::now(),
        };
        std::fs::write(&self.path, serde_json::to_string_pretty(&saved)?)?;
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory token store for tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> AppResult<Option<String>> {
        Ok(self.token.lock().expect("token lock poisoned").clone())
    }

    fn save(&self, token: &str) -> AppResult<()> {
        *self.token.lock().expect("token lock poisoned") = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        *self.token.lock().expect("token lock poisoned") = None;
        Ok(())
    }
}

/// The live session: current token plus its persistence backend.
pub struct Session {
    store: Box<dyn TokenStore>,
    token: RwLock<Option<String>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Session {
    /// Create a session over the given store, loading any saved token.
    pub fn new(store: Box<dyn TokenStore>) -> AppResult<Self> {
        let token = store.load()?;
        Ok(Self {
            store,
            token: RwLock::new(token),
        })
    }

    /// Create a file-backed session from configuration.
    pub fn from_config(config: &AuthConfig) -> AppResult<Self> {
        Self::new(Box::new(FileTokenStore::new(&config.token_file)))
    }

    /// The current bearer token, if authenticated.
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("session lock poisoned").clone()
    }

    /// Whether a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .expect("session lock poisoned")
            .is_some()
    }

    /// Adopt and persist a freshly issued token.
    pub fn set_token(&self, token: &str) -> AppResult<()> {
        self.store.save(token)?;
        *self.token.write().expect("session lock poisoned") = Some(token.to_string());
        Ok(())
    }

    /// Drop the session (logout).
    pub fn clear(&self) -> AppResult<()> {
        self.store.clear()?;
        *self.token.write().expect("session lock poisoned") = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");
        let store = FileTokenStore::new(&path);

        assert!(store.load().unwrap().is_none());
        store.save("tok-123").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("tok-123"));
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FileTokenStore::new(&path);
        let err = store.load().unwrap_err();
        assert_eq!(err.kind, eduhub_core::error::ErrorKind::Session);
    }

    #[test]
    fn test_session_loads_persisted_token() {
        let store = MemoryTokenStore::default();
        store.save("tok-456").unwrap();
        let session = Session::new(Box::new(store)).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("tok-456"));
    }

    #[test]
    fn test_set_and_clear() {
        let session = Session::new(Box::new(MemoryTokenStore::default())).unwrap();
        assert!(!session.is_authenticated());
        session.set_token("tok-789").unwrap();
        assert!(session.is_authenticated());
        session.clear().unwrap();
        assert!(session.token().is_none());
    }
}
