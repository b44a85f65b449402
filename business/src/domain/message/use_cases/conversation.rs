use async_trait::async_trait;

use crate::domain::message::errors::MessageError;
use crate::domain::message::model::Message;
use crate::domain::shared::value_objects::UserId;

#[async_trait]
pub trait GetConversationUseCase: Send + Sync {
    async fn execute(&self, with: &UserId) -> Result<Vec<Message>, MessageError>;
}
