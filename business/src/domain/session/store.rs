use async_trait::async_trait;

use super::model::{AccessToken, Identity};
use crate::domain::errors::SessionStoreError;

/// Persistence port for the session, so a new process start can restore it
/// without re-authenticating. Read once at startup, never re-validated.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self) -> Result<Option<(Identity, AccessToken)>, SessionStoreError>;
    async fn save(&self, identity: &Identity, token: &AccessToken)
        -> Result<(), SessionStoreError>;
    async fn clear(&self) -> Result<(), SessionStoreError>;
}
