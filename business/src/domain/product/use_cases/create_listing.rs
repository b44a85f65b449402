use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::{Category, Condition};

pub struct CreateListingParams {
    pub title: String,
    pub description: String,
    pub price: u64,
    pub category: Category,
    pub condition: Condition,
    pub location: String,
    pub tags: Vec<String>,
    pub images: Vec<PathBuf>,
}

/// Publishes a new listing. Validation failures are reported before any
/// remote call is attempted.
#[async_trait]
pub trait CreateListingUseCase: Send + Sync {
    async fn execute(&self, params: CreateListingParams) -> Result<Product, ProductError>;
}
