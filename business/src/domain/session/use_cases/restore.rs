use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Identity;

/// Restores a persisted session at process start. Read once; a missing or
/// unreadable store simply leaves the session anonymous.
#[async_trait]
pub trait RestoreSessionUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<Identity>, SessionError>;
}
