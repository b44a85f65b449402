use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::shared::value_objects::ProductId;

/// Direction a settled toggle ended up applying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
}

/// Optimistically flips favorite membership for one product and reconciles
/// with the remote store, rolling back exactly on failure.
#[async_trait]
pub trait ToggleFavoriteUseCase: Send + Sync {
    async fn execute(&self, product_id: &ProductId) -> Result<FavoriteToggle, FavoriteError>;
}
