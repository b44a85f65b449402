use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::gateway::FavoriteGateway;
use crate::domain::favorite::set::FavoriteSet;
use crate::domain::favorite::use_cases::toggle::{FavoriteToggle, ToggleFavoriteUseCase};
use crate::domain::logger::Logger;
use crate::domain::session::holder::SessionHolder;
use crate::domain::shared::value_objects::ProductId;

pub struct ToggleFavoriteUseCaseImpl {
    pub favorites: Arc<FavoriteSet>,
    pub gateway: Arc<dyn FavoriteGateway>,
    pub session: Arc<SessionHolder>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleFavoriteUseCase for ToggleFavoriteUseCaseImpl {
    async fn execute(&self, product_id: &ProductId) -> Result<FavoriteToggle, FavoriteError> {
        if !self.session.is_authenticated() {
            return Err(FavoriteError::AuthRequired);
        }

        // Serializes toggles per product id; a second toggle on the same id
        // waits until the in-flight one settles.
        let lock = self.favorites.toggle_lock(product_id);
        let _guard = lock.lock().await;

        // Local membership decides add vs remove; it is authoritative
        // between syncs, so no remote read happens here.
        let was_favorited = self.favorites.contains(product_id);

        if was_favorited {
            // Optimistic local removal before the remote call resolves.
            self.favorites.remove(product_id);
            match self.gateway.remove_favorite(product_id).await {
                // An already-absent remote favorite still converges.
                Ok(()) | Err(GatewayError::NotFound) => {
                    self.logger
                        .info(&format!("Removed favorite {}", product_id));
                    Ok(FavoriteToggle::Removed)
                }
                Err(error) => {
                    self.favorites.insert(product_id.clone());
                    self.logger.warn(&format!(
                        "Rolled back favorite removal for {}: {}",
                        product_id, error
                    ));
                    Err(error.into())
                }
            }
        } else {
            self.favorites.insert(product_id.clone());
            match self.gateway.add_favorite(product_id).await {
                // The backend reports a duplicate favorite as a conflict;
                // the remote already matches the optimistic state.
                Ok(()) | Err(GatewayError::Conflict) => {
                    self.logger.info(&format!("Added favorite {}", product_id));
                    Ok(FavoriteToggle::Added)
                }
                Err(error) => {
                    self.favorites.remove(product_id);
                    self.logger.warn(&format!(
                        "Rolled back favorite addition for {}: {}",
                        product_id, error
                    ));
                    Err(error.into())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::Product;
    use crate::domain::session::model::{AccessToken, Identity};
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl FavoriteGateway for Gateway {
            async fn list_favorites(&self) -> Result<Vec<Product>, GatewayError>;
            async fn add_favorite(&self, id: &ProductId) -> Result<(), GatewayError>;
            async fn remove_favorite(&self, id: &ProductId) -> Result<(), GatewayError>;
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

    fn authenticated_session() -> Arc<SessionHolder> {
        let holder = SessionHolder::new();
        holder.sign_in(
            Identity {
                id: "user-1".into(),
                name: "Asha".to_string(),
                email: "asha@example.com".to_string(),
                phone: "+91 98000 00000".to_string(),
                avatar: None,
                location: None,
                joined_date: Utc::now(),
                is_verified: true,
                rating: 4.5,
                total_sales: 3,
                total_purchases: 1,
            },
            AccessToken::new("jwt-token"),
        );
        Arc::new(holder)
    }

    fn use_case(
        favorites: Arc<FavoriteSet>,
        gateway: MockGateway,
        session: Arc<SessionHolder>,
    ) -> ToggleFavoriteUseCaseImpl {
        ToggleFavoriteUseCaseImpl {
            favorites,
            gateway: Arc::new(gateway),
            session,
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_add_then_remove_favorite_over_two_toggles() {
        let favorites = Arc::new(FavoriteSet::new());
        let mut gateway = MockGateway::new();
        gateway
            .expect_add_favorite()
            .with(eq(ProductId::from("5")))
            .times(1)
            .returning(|_| Ok(()));
        gateway
            .expect_remove_favorite()
            .with(eq(ProductId::from("5")))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = use_case(favorites.clone(), gateway, authenticated_session());

        let first = use_case.execute(&"5".into()).await.unwrap();
        assert_eq!(first, FavoriteToggle::Added);
        assert!(favorites.contains(&"5".into()));

        let second = use_case.execute(&"5".into()).await.unwrap();
        assert_eq!(second, FavoriteToggle::Removed);
        assert!(!favorites.contains(&"5".into()));
    }

    #[tokio::test]
    async fn should_roll_back_removal_when_remote_call_fails() {
        let favorites = Arc::new(FavoriteSet::new());
        favorites.insert("7".into());

        let mut gateway = MockGateway::new();
        gateway
            .expect_remove_favorite()
            .times(1)
            .returning(|_| Err(GatewayError::Transport));

        let use_case = use_case(favorites.clone(), gateway, authenticated_session());

        let result = use_case.execute(&"7".into()).await;
        assert!(matches!(
            result.unwrap_err(),
            FavoriteError::Gateway(GatewayError::Transport)
        ));
        assert!(favorites.contains(&"7".into()));
    }

    #[tokio::test]
    async fn should_roll_back_addition_when_remote_call_fails() {
        let favorites = Arc::new(FavoriteSet::new());
        let mut gateway = MockGateway::new();
        gateway.expect_add_favorite().times(1).returning(|_| {
            Err(GatewayError::Server {
                status: 500,
                detail: "boom".to_string(),
            })
        });

        let use_case = use_case(favorites.clone(), gateway, authenticated_session());

        let result = use_case.execute(&"9".into()).await;
        assert!(result.is_err());
        assert!(!favorites.contains(&"9".into()));
    }

    #[tokio::test]
    async fn should_fail_with_auth_required_and_never_call_gateway_when_anonymous() {
        let favorites = Arc::new(FavoriteSet::new());
        let mut gateway = MockGateway::new();
        gateway.expect_add_favorite().times(0);
        gateway.expect_remove_favorite().times(0);

        let use_case = use_case(
            favorites.clone(),
            gateway,
            Arc::new(SessionHolder::new()),
        );

        let result = use_case.execute(&"5".into()).await;
        assert!(matches!(result.unwrap_err(), FavoriteError::AuthRequired));
        assert!(favorites.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn should_serialize_concurrent_toggles_on_the_same_product() {
        let calls = Arc::new(std::sync::Mutex::new(Vec::new()));
        let favorites = Arc::new(FavoriteSet::new());

        let mut gateway = MockGateway::new();
        let add_calls = calls.clone();
        gateway.expect_add_favorite().times(1).returning(move |_| {
            // Keeps the first toggle in flight while the second arrives.
            std::thread::sleep(std::time::Duration::from_millis(50));
            add_calls.lock().unwrap().push("add");
            Ok(())
        });
        let remove_calls = calls.clone();
        gateway
            .expect_remove_favorite()
            .times(1)
            .returning(move |_| {
                remove_calls.lock().unwrap().push("remove");
                Ok(())
            });

        let use_case = Arc::new(use_case(favorites.clone(), gateway, authenticated_session()));

        let first = {
            let use_case = use_case.clone();
            tokio::spawn(async move { use_case.execute(&"5".into()).await })
        };
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        let second = {
            let use_case = use_case.clone();
            tokio::spawn(async move { use_case.execute(&"5".into()).await })
        };

        assert_eq!(first.await.unwrap().unwrap(), FavoriteToggle::Added);
        assert_eq!(second.await.unwrap().unwrap(), FavoriteToggle::Removed);
        assert_eq!(*calls.lock().unwrap(), vec!["add", "remove"]);
        assert!(favorites.is_empty());
    }

    #[tokio::test]
    async fn should_treat_missing_remote_favorite_as_removed() {
        let favorites = Arc::new(FavoriteSet::new());
        favorites.insert("3".into());

        let mut gateway = MockGateway::new();
        gateway
            .expect_remove_favorite()
            .times(1)
            .returning(|_| Err(GatewayError::NotFound));

        let use_case = use_case(favorites.clone(), gateway, authenticated_session());

        let result = use_case.execute(&"3".into()).await.unwrap();
        assert_eq!(result, FavoriteToggle::Removed);
        assert!(!favorites.contains(&"3".into()));
    }

    #[tokio::test]
    async fn should_treat_duplicate_remote_favorite_as_added() {
        let favorites = Arc::new(FavoriteSet::new());
        let mut gateway = MockGateway::new();
        gateway
            .expect_add_favorite()
            .times(1)
            .returning(|_| Err(GatewayError::Conflict));

        let use_case = use_case(favorites.clone(), gateway, authenticated_session());

        let result = use_case.execute(&"4".into()).await.unwrap();
        assert_eq!(result, FavoriteToggle::Added);
        assert!(favorites.contains(&"4".into()));
    }
}
