use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::holder::SessionHolder;
use crate::domain::session::model::Identity;
use crate::domain::session::store::SessionStore;
use crate::domain::session::use_cases::restore::RestoreSessionUseCase;

pub struct RestoreSessionUseCaseImpl {
    pub session: Arc<SessionHolder>,
    pub store: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RestoreSessionUseCase for RestoreSessionUseCaseImpl {
    async fn execute(&self) -> Result<Option<Identity>, SessionError> {
        match self.store.load().await {
            Ok(Some((identity, token))) => {
                self.session.sign_in(identity.clone(), token);
                self.logger
                    .info(&format!("Restored session for {}", identity.id));
                Ok(Some(identity))
            }
            Ok(None) => Ok(None),
            // An unreadable store is recoverable; start anonymous.
            Err(error) => {
                self.logger
                    .warn(&format!("Could not restore session: {}", error));
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::SessionStoreError;
    use crate::domain::session::model::AccessToken;
    use chrono::Utc;
    use mockall::mock;

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
    async fn should_restore_persisted_session_at_startup() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .times(1)
            .returning(|| Ok(Some((identity(), AccessToken::new("jwt-token")))));

        let session = Arc::new(SessionHolder::new());
        let use_case = RestoreSessionUseCaseImpl {
            session: session.clone(),
            store: Arc::new(store),
            logger: mock_logger(),
        };

        let restored = use_case.execute().await.unwrap();
        assert!(restored.is_some());
        assert!(session.is_authenticated());
        assert_eq!(session.token().unwrap().as_str(), "jwt-token");
    }

    #[tokio::test]
    async fn should_stay_anonymous_when_nothing_is_persisted() {
        let mut store = MockStore::new();
        store.expect_load().returning(|| Ok(None));

        let session = Arc::new(SessionHolder::new());
        let use_case = RestoreSessionUseCaseImpl {
            session: session.clone(),
            store: Arc::new(store),
            logger: mock_logger(),
        };

        assert!(use_case.execute().await.unwrap().is_none());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn should_stay_anonymous_when_store_is_corrupt() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .returning(|| Err(SessionStoreError::Corrupt));

        let session = Arc::new(SessionHolder::new());
        let use_case = RestoreSessionUseCaseImpl {
            session: session.clone(),
            store: Arc::new(store),
            logger: mock_logger(),
        };

        assert!(use_case.execute().await.unwrap().is_none());
        assert!(!session.is_authenticated());
    }
}
