use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

#[async_trait]
pub trait GetProductByIdUseCase: Send + Sync {
    async fn execute(&self, id: &ProductId) -> Result<Product, ProductError>;
}
