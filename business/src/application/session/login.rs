use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::gateway::{AuthGateway, Credentials};
use crate::domain::session::holder::SessionHolder;
use crate::domain::session::model::Identity;
use crate::domain::session::store::SessionStore;
use crate::domain::session::use_cases::login::LoginUseCase;

pub struct LoginUseCaseImpl {
    pub gateway: Arc<dyn AuthGateway>,
    pub session: Arc<SessionHolder>,
    pub store: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, credentials: Credentials) -> Result<Identity, SessionError> {
        self.logger
            .info(&format!("Signing in {}", credentials.email));

        let response = self.gateway.login(&credentials).await.map_err(|error| {
            match error {
                GatewayError::Auth => SessionError::InvalidCredentials,
                other => other.into(),
            }
        })?;

        self.session
            .sign_in(response.identity.clone(), response.token.clone());
        self.store.save(&response.identity, &response.token).await?;

        self.logger
            .info(&format!("Signed in as {}", response.identity.id));
        Ok(response.identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::SessionStoreError;
    use crate::domain::session::gateway::{AuthResponse, NewAccount};
    use crate::domain::session::model::AccessToken;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl AuthGateway for Gateway {
            async fn register(&self, account: &NewAccount) -> Result<AuthResponse, GatewayError>;
            async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, GatewayError>;
            async fn me(&self) -> Result<Identity, GatewayError>;
        }
    }

    mock! {
        pub Store {}

        #[async_trait]
        impl SessionStore for Store {
            async fn load(&self) -> Result<Option<(Identity, AccessToken)>, SessionStoreError>;
            async fn save(&self, identity: &Identity, token: &AccessToken) -> Result<(), SessionStoreError>;
            async fn clear(&self) -> Result<(), SessionStoreError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn identity() -> Identity {
        Identity {
            id: "user-1".into(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+91 98000 00000".to_string(),
            avatar: None,
            location: None,
            joined_date: Utc::now(),
            is_verified: false,
            rating: 0.0,
            total_sales: 0,
            total_purchases: 0,
        }
    }

    #[tokio::test]
    async fn should_activate_and_persist_session_on_successful_login() {
        let mut gateway = MockGateway::new();
        gateway.expect_login().returning(|_| {
            Ok(AuthResponse {
                identity: identity(),
                token: AccessToken::new("jwt-token"),
            })
        });
        let mut store = MockStore::new();
        store.expect_save().times(1).returning(|_, _| Ok(()));

        let session = Arc::new(SessionHolder::new());
        let use_case = LoginUseCaseImpl {
            gateway: Arc::new(gateway),
            session: session.clone(),
            store: Arc::new(store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(Credentials {
                email: "asha@example.com".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.id, "user-1".into());
        assert!(session.is_authenticated());
        assert_eq!(session.token().unwrap().as_str(), "jwt-token");
    }

    #[tokio::test]
    async fn should_map_auth_failure_to_invalid_credentials() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_login()
            .returning(|_| Err(GatewayError::Auth));
        let mut store = MockStore::new();
        store.expect_save().times(0);

        let session = Arc::new(SessionHolder::new());
        let use_case = LoginUseCaseImpl {
            gateway: Arc::new(gateway),
            session: session.clone(),
            store: Arc::new(store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(Credentials {
                email: "asha@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            SessionError::InvalidCredentials
        ));
        assert!(!session.is_authenticated());
    }
}
