use async_trait::async_trait;

use super::model::{NewListing, Product};
use super::value_objects::CategorySelection;
use crate::domain::errors::GatewayError;
use crate::domain::shared::value_objects::ProductId;

/// Server-side filter for the product listing endpoint.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: CategorySelection,
    pub search: Option<String>,
}

/// Remote collection port for the product catalog.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Fetch-ordered product listing; ordering is preserved by callers.
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, GatewayError>;
    async fn get_product(&self, id: &ProductId) -> Result<Product, GatewayError>;
    async fn create_product(&self, listing: &NewListing) -> Result<Product, GatewayError>;
}
