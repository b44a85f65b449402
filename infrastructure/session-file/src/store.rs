use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use business::domain::errors::SessionStoreError;
use business::domain::session::model::{AccessToken, Identity};
use business::domain::session::store::SessionStore;

/// Persisted shape of an active session.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    user: Identity,
    access_token: AccessToken,
}

/// JSON-file session store, the client-side stand-in for browser storage.
pub struct SessionFileStore {
    path: PathBuf,
}

impl SessionFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl SessionStore for SessionFileStore {
    async fn load(&self) -> Result<Option<(Identity, AccessToken)>, SessionStoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(_) => return Err(SessionStoreError::Io),
        };

        let persisted: PersistedSession =
            serde_json::from_str(&raw).map_err(|_| SessionStoreError::Corrupt)?;
        Ok(Some((persisted.user, persisted.access_token)))
    }

    async fn save(
        &self,
        identity: &Identity,
        token: &AccessToken,
    ) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|_| SessionStoreError::Io)?;
        }

        let persisted = PersistedSession {
            user: identity.clone(),
            access_token: token.clone(),
        };
        let raw =
            serde_json::to_string_pretty(&persisted).map_err(|_| SessionStoreError::Corrupt)?;
        std::fs::write(&self.path, raw).map_err(|_| SessionStoreError::Io)
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(_) => Err(SessionStoreError::Io),
        }
    }
}
