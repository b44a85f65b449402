use async_trait::async_trait;

use super::model::{Message, NewMessage};
use crate::domain::errors::GatewayError;
use crate::domain::shared::value_objects::UserId;

/// Remote collection port for messaging (plain CRUD, no transport design).
#[async_trait]
pub trait MessageGateway: Send + Sync {
    async fn send(&self, message: &NewMessage) -> Result<Message, GatewayError>;
    async fn conversation(&self, with: &UserId) -> Result<Vec<Message>, GatewayError>;
}
