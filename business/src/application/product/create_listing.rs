use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::CatalogGateway;
use crate::domain::product::model::{NewListing, NewListingProps, Product};
use crate::domain::product::use_cases::create_listing::{
    CreateListingParams, CreateListingUseCase,
};
use crate::domain::session::holder::SessionHolder;

pub struct CreateListingUseCaseImpl {
    pub gateway: Arc<dyn CatalogGateway>,
    pub session: Arc<SessionHolder>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateListingUseCase for CreateListingUseCaseImpl {
    async fn execute(&self, params: CreateListingParams) -> Result<Product, ProductError> {
        if !self.session.is_authenticated() {
            return Err(ProductError::AuthRequired);
        }

        // Fail fast on validation; no round trip for an invalid draft.
        let listing = NewListing::new(NewListingProps {
            title: params.title,
            description: params.description,
            price: params.price,
            category: params.category,
            condition: params.condition,
            location: params.location,
            tags: params.tags,
            images: params.images,
        })?;

        self.logger
            .info(&format!("Publishing listing: {}", listing.title));
        let product = self.gateway.create_product(&listing).await?;
        self.logger
            .info(&format!("Listing published with id: {}", product.id));
        Ok(product)
    }
}
