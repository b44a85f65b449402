use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use business::domain::errors::GatewayError;
use business::domain::product::gateway::{CatalogGateway, ProductFilter};
use business::domain::product::model::{NewListing, Product};
use business::domain::product::value_objects::CategorySelection;
use business::domain::shared::value_objects::ProductId;

use crate::client::RestClient;
use crate::dto::{ProductDto, ProductListResponse};

pub struct RestCatalogGateway {
    client: Arc<RestClient>,
}

impl RestCatalogGateway {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogGateway for RestCatalogGateway {
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, GatewayError> {
        let mut request = self.client.http.get(self.client.url("/products"));
        if let CategorySelection::Only(category) = filter.category {
            request = request.query(&[("category", category.to_string())]);
        }
        if let Some(search) = &filter.search {
            request = request.query(&[("search", search)]);
        }

        let response = self.client.check(request.send().await).await?;
        let body: ProductListResponse =
            response.json().await.map_err(|_| GatewayError::Transport)?;
        Ok(body.products.into_iter().map(ProductDto::into_domain).collect())
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, GatewayError> {
        let request = self
            .client
            .http
            .get(self.client.url(&format!("/products/{}", id)));
        let response = self.client.check(request.send().await).await?;
        let dto: ProductDto = response.json().await.map_err(|_| GatewayError::Transport)?;
        Ok(dto.into_domain())
    }

    async fn create_product(&self, listing: &NewListing) -> Result<Product, GatewayError> {
        let mut form = Form::new()
            .text("title", listing.title.clone())
            .text("description", listing.description.clone())
            .text("price", listing.price.to_string())
            .text("category", listing.category.to_string())
            .text("condition", listing.condition.to_string())
            .text("location", listing.location.clone())
            .text("tags", listing.tags.join(", "));

        for path in &listing.images {
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|_| GatewayError::Transport)?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image".to_string());
            form = form.part("images", Part::bytes(bytes).file_name(file_name));
        }

        let request = self
            .client
            .authorize(self.client.http.post(self.client.url("/products")))
            .multipart(form);
        let response = self.client.check(request.send().await).await?;
        let dto: ProductDto = response.json().await.map_err(|_| GatewayError::Transport)?;
        Ok(dto.into_domain())
    }
}
