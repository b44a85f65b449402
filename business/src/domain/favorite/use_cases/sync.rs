use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::product::model::Product;

/// Replaces the local favorite set with the remote listing (login-time sync).
#[async_trait]
pub trait SyncFavoritesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Product>, FavoriteError>;
}
