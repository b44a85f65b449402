use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use business::domain::errors::GatewayError;
use business::domain::message::gateway::MessageGateway;
use business::domain::message::model::{Message, NewMessage};
use business::domain::shared::value_objects::UserId;

use crate::client::RestClient;
use crate::dto::MessageDto;

pub struct RestMessageGateway {
    client: Arc<RestClient>,
}

impl RestMessageGateway {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessageGateway for RestMessageGateway {
    async fn send(&self, message: &NewMessage) -> Result<Message, GatewayError> {
        let request = self
            .client
            .authorize(self.client.http.post(self.client.url("/messages")))
            .json(&json!({
                "recipient_id": message.recipient_id,
                "product_id": message.product_id,
                "content": message.content,
            }));
        let response = self.client.check(request.send().await).await?;
        let dto: MessageDto = response.json().await.map_err(|_| GatewayError::Transport)?;
        Ok(dto.into_domain())
    }

    async fn conversation(&self, with: &UserId) -> Result<Vec<Message>, GatewayError> {
        let request = self.client.authorize(
            self.client
                .http
                .get(self.client.url(&format!("/messages/{}", with))),
        );
        let response = self.client.check(request.send().await).await?;
        let dtos: Vec<MessageDto> = response.json().await.map_err(|_| GatewayError::Transport)?;
        Ok(dtos.into_iter().map(MessageDto::into_domain).collect())
    }
}
