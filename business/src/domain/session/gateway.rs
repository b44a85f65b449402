use async_trait::async_trait;

use super::model::{AccessToken, Identity};
use crate::domain::errors::GatewayError;

pub struct Credentials {
    pub email: String,
    pub password: String,
}

pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

pub struct AuthResponse {
    pub identity: Identity,
    pub token: AccessToken,
}

/// Remote authentication port backed by the token-issuing service.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn register(&self, account: &NewAccount) -> Result<AuthResponse, GatewayError>;
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, GatewayError>;
    async fn me(&self) -> Result<Identity, GatewayError>;
}
