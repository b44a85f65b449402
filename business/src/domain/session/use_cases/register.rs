use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::gateway::NewAccount;
use crate::domain::session::model::Identity;

/// Creates an account; a successful registration signs the user in.
#[async_trait]
pub trait RegisterUseCase: Send + Sync {
    async fn execute(&self, account: NewAccount) -> Result<Identity, SessionError>;
}
