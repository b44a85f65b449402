use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::gateway::AuthGateway;
use crate::domain::session::holder::SessionHolder;
use crate::domain::session::model::Identity;
use crate::domain::session::use_cases::profile::FetchProfileUseCase;

pub struct FetchProfileUseCaseImpl {
    pub gateway: Arc<dyn AuthGateway>,
    pub session: Arc<SessionHolder>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FetchProfileUseCase for FetchProfileUseCaseImpl {
    async fn execute(&self) -> Result<Identity, SessionError> {
        if !self.session.is_authenticated() {
            return Err(SessionError::AuthRequired);
        }

        self.logger.debug("Fetching current profile");
        let identity = self.gateway.me().await?;
        Ok(identity)
    }
}
