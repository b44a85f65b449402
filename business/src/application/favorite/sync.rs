use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::gateway::FavoriteGateway;
use crate::domain::favorite::set::FavoriteSet;
use crate::domain::favorite::use_cases::sync::SyncFavoritesUseCase;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::session::holder::SessionHolder;

pub struct SyncFavoritesUseCaseImpl {
    pub favorites: Arc<FavoriteSet>,
    pub gateway: Arc<dyn FavoriteGateway>,
    pub session: Arc<SessionHolder>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SyncFavoritesUseCase for SyncFavoritesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, FavoriteError> {
        if !self.session.is_authenticated() {
            return Err(FavoriteError::AuthRequired);
        }

        let products = self.gateway.list_favorites().await?;
        self.favorites
            .replace(products.iter().map(|p| p.id.clone()));
        self.logger
            .info(&format!("Synced {} favorites", products.len()));
        Ok(products)
    }
}
