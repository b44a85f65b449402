use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use business::domain::errors::GatewayError;
use business::domain::session::gateway::{AuthGateway, AuthResponse, Credentials, NewAccount};
use business::domain::session::model::{AccessToken, Identity};

use crate::client::RestClient;
use crate::dto::TokenResponse;

pub struct RestAuthGateway {
    client: Arc<RestClient>,
}

impl RestAuthGateway {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }

    async fn token_exchange(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<AuthResponse, GatewayError> {
        let request = self.client.http.post(self.client.url(path)).json(&body);
        let response = self.client.check(request.send().await).await?;
        let token: TokenResponse = response.json().await.map_err(|_| GatewayError::Transport)?;
        Ok(AuthResponse {
            identity: token.user,
            token: AccessToken::new(token.access_token),
        })
    }
}

#[async_trait]
impl AuthGateway for RestAuthGateway {
    async fn register(&self, account: &NewAccount) -> Result<AuthResponse, GatewayError> {
        self.token_exchange(
            "/auth/register",
            json!({
                "name": account.name,
                "email": account.email,
                "phone": account.phone,
                "password": account.password,
            }),
        )
        .await
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, GatewayError> {
        self.token_exchange(
            "/auth/login",
            json!({
                "email": credentials.email,
                "password": credentials.password,
            }),
        )
        .await
    }

    async fn me(&self) -> Result<Identity, GatewayError> {
        let request = self
            .client
            .authorize(self.client.http.get(self.client.url("/auth/me")));
        let response = self.client.check(request.send().await).await?;
        response.json().await.map_err(|_| GatewayError::Transport)
    }
}
