use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::favorite::gateway::FavoriteGateway;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;

use crate::client::RestClient;
use crate::dto::ProductDto;

pub struct RestFavoriteGateway {
    client: Arc<RestClient>,
}

impl RestFavoriteGateway {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FavoriteGateway for RestFavoriteGateway {
    async fn list_favorites(&self) -> Result<Vec<Product>, GatewayError> {
        let request = self
            .client
            .authorize(self.client.http.get(self.client.url("/favorites")));
        let response = self.client.check(request.send().await).await?;
        let dtos: Vec<ProductDto> = response.json().await.map_err(|_| GatewayError::Transport)?;
        Ok(dtos.into_iter().map(ProductDto::into_domain).collect())
    }

    async fn add_favorite(&self, id: &ProductId) -> Result<(), GatewayError> {
        let request = self.client.authorize(
            self.client
                .http
                .post(self.client.url(&format!("/favorites/{}", id))),
        );
        match self.client.check(request.send().await).await {
            Ok(_) => Ok(()),
            // The backend reports a duplicate favorite as a 400 with a
            // detail body; normalize it to a conflict.
            Err(GatewayError::Server { status: 400, .. }) => Err(GatewayError::Conflict),
            Err(error) => Err(error),
        }
    }

    async fn remove_favorite(&self, id: &ProductId) -> Result<(), GatewayError> {
        let request = self.client.authorize(
            self.client
                .http
                .delete(self.client.url(&format!("/favorites/{}", id))),
        );
        self.client.check(request.send().await).await.map(|_| ())
    }
}
