use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// Remote collection port for the session user's favorites.
#[async_trait]
pub trait FavoriteGateway: Send + Sync {
    async fn list_favorites(&self) -> Result<Vec<Product>, GatewayError>;
    async fn add_favorite(&self, id: &ProductId) -> Result<(), GatewayError>;
    async fn remove_favorite(&self, id: &ProductId) -> Result<(), GatewayError>;
}
