use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::CategorySelection;

pub struct BrowseParams {
    pub selection: CategorySelection,
    pub search: Option<String>,
}

/// Activates a category selection, refreshes the catalog from the remote
/// collection and returns the visible products in fetch order.
#[async_trait]
pub trait BrowseProductsUseCase: Send + Sync {
    async fn execute(&self, params: BrowseParams) -> Result<Vec<Product>, ProductError>;
}
