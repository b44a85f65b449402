use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::message::errors::MessageError;
use crate::domain::message::gateway::MessageGateway;
use crate::domain::message::model::Message;
use crate::domain::message::use_cases::conversation::GetConversationUseCase;
use crate::domain::session::holder::SessionHolder;
use crate::domain::shared::value_objects::UserId;

pub struct GetConversationUseCaseImpl {
    pub gateway: Arc<dyn MessageGateway>,
    pub session: Arc<SessionHolder>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetConversationUseCase for GetConversationUseCaseImpl {
    async fn execute(&self, with: &UserId) -> Result<Vec<Message>, MessageError> {
        if !self.session.is_authenticated() {
            return Err(MessageError::AuthRequired);
        }

        let messages = self.gateway.conversation(with).await?;
        self.logger.debug(&format!(
            "Loaded {} messages with {}",
            messages.len(),
            with
        ));
        Ok(messages)
    }
}
