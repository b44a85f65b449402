use async_trait::async_trait;

use crate::domain::message::errors::MessageError;
use crate::domain::message::model::{Message, NewMessage};

#[async_trait]
pub trait SendMessageUseCase: Send + Sync {
    async fn execute(&self, message: NewMessage) -> Result<Message, MessageError>;
}
