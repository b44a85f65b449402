use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::CatalogGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::get_by_id::GetProductByIdUseCase;
use crate::domain::shared::value_objects::ProductId;

pub struct GetProductByIdUseCaseImpl {
    pub gateway: Arc<dyn CatalogGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, id: &ProductId) -> Result<Product, ProductError> {
        self.logger.debug(&format!("Fetching product {}", id));
        match self.gateway.get_product(id).await {
            Ok(product) => Ok(product),
            Err(GatewayError::NotFound) => Err(ProductError::NotFound),
            Err(error) => Err(error.into()),
        }
    }
}
