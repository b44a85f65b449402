use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::catalog::Catalog;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::{CatalogGateway, ProductFilter};
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::browse::{BrowseParams, BrowseProductsUseCase};

pub struct BrowseProductsUseCaseImpl {
    pub catalog: Arc<Mutex<Catalog>>,
    pub gateway: Arc<dyn CatalogGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BrowseProductsUseCase for BrowseProductsUseCaseImpl {
    async fn execute(&self, params: BrowseParams) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Browsing products: {}", params.selection));

        // The lock is released before the fetch suspends; the generation
        // ticket decides later whether this fetch may still apply.
        let generation = self
            .catalog
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .select(params.selection);

        let filter = ProductFilter {
            category: params.selection,
            search: params.search,
        };
        let products = self.gateway.list_products(&filter).await?;

        let mut catalog = self.catalog.lock().unwrap_or_else(PoisonError::into_inner);
        if !catalog.apply(generation, products) {
            self.logger.debug("Discarded stale product fetch");
        }
        Ok(catalog.visible())
    }
}
