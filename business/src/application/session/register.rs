use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::gateway::{AuthGateway, NewAccount};
use crate::domain::session::holder::SessionHolder;
use crate::domain::session::model::Identity;
use crate::domain::session::store::SessionStore;
use crate::domain::session::use_cases::register::RegisterUseCase;

pub struct RegisterUseCaseImpl {
    pub gateway: Arc<dyn AuthGateway>,
    pub session: Arc<SessionHolder>,
    pub store: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUseCase for RegisterUseCaseImpl {
    async fn execute(&self, account: NewAccount) -> Result<Identity, SessionError> {
        self.logger
            .info(&format!("Registering account for {}", account.email));

        let response = self.gateway.register(&account).await.map_err(|error| {
            match error {
                // The backend reports a duplicate email as a 400.
                GatewayError::Server { status: 400, .. } | GatewayError::Conflict => {
                    SessionError::EmailTaken
                }
                other => other.into(),
            }
        })?;

        self.session
            .sign_in(response.identity.clone(), response.token.clone());
        self.store.save(&response.identity, &response.token).await?;

        self.logger
            .info(&format!("Registered user {}", response.identity.id));
        Ok(response.identity)
    }
}
