use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::gateway::Credentials;
use crate::domain::session::model::Identity;

/// Authenticates against the remote service and activates the session.
#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, credentials: Credentials) -> Result<Identity, SessionError>;
}
