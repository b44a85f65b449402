use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Identity;

/// Fetches the current profile from the remote service, validating the token.
#[async_trait]
pub trait FetchProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<Identity, SessionError>;
}
