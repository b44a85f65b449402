use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::message::errors::MessageError;
use crate::domain::message::gateway::MessageGateway;
use crate::domain::message::model::{Message, NewMessage};
use crate::domain::message::use_cases::send::SendMessageUseCase;
use crate::domain::session::holder::SessionHolder;

pub struct SendMessageUseCaseImpl {
    pub gateway: Arc<dyn MessageGateway>,
    pub session: Arc<SessionHolder>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SendMessageUseCase for SendMessageUseCaseImpl {
    async fn execute(&self, message: NewMessage) -> Result<Message, MessageError> {
        if !self.session.is_authenticated() {
            return Err(MessageError::AuthRequired);
        }
        if message.content.trim().is_empty() {
            return Err(MessageError::ContentEmpty);
        }

        self.logger
            .debug(&format!("Sending message to {}", message.recipient_id));
        let sent = self.gateway.send(&message).await?;
        Ok(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use crate::domain::session::model::{AccessToken, Identity};
    use crate::domain::shared::value_objects::UserId;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl MessageGateway for Gateway {
            async fn send(&self, message: &NewMessage) -> Result<Message, GatewayError>;
            async fn conversation(&self, with: &UserId) -> Result<Vec<Message>, GatewayError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn authenticated_session() -> Arc<SessionHolder> {
        let holder = SessionHolder::new();
        holder.sign_in(
            Identity {
                id: "user-1".into(),
                name: "Asha".to_string(),
                email: "asha@example.com".to_string(),
                phone: "+91 98000 00000".to_string(),
                avatar: None,
                location: None,
                joined_date: Utc::now(),
                is_verified: false,
                rating: 0.0,
                total_sales: 0,
                total_purchases: 0,
            },
            AccessToken::new("jwt-token"),
        );
        Arc::new(holder)
    }

    fn new_message(content: &str) -> NewMessage {
        NewMessage {
            recipient_id: "seller-1".into(),
            product_id: "42".into(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn should_send_message_when_content_is_present() {
        let mut gateway = MockGateway::new();
        gateway.expect_send().times(1).returning(|message| {
            Ok(Message {
                id: "m1".to_string(),
                sender_id: "user-1".into(),
                recipient_id: message.recipient_id.clone(),
                product_id: message.product_id.clone(),
                content: message.content.clone(),
                timestamp: Utc::now(),
                is_read: false,
            })
        });

        let use_case = SendMessageUseCaseImpl {
            gateway: Arc::new(gateway),
            session: authenticated_session(),
            logger: mock_logger(),
        };

        let sent = use_case
            .execute(new_message("Is the bike still available?"))
            .await
            .unwrap();
        assert_eq!(sent.content, "Is the bike still available?");
    }

    #[tokio::test]
    async fn should_reject_blank_content_before_any_remote_call() {
        let mut gateway = MockGateway::new();
        gateway.expect_send().times(0);

        let use_case = SendMessageUseCaseImpl {
            gateway: Arc::new(gateway),
            session: authenticated_session(),
            logger: mock_logger(),
        };

        let result = use_case.execute(new_message("   ")).await;
        assert!(matches!(result.unwrap_err(), MessageError::ContentEmpty));
    }

    #[tokio::test]
    async fn should_require_session_before_sending() {
        let mut gateway = MockGateway::new();
        gateway.expect_send().times(0);

        let use_case = SendMessageUseCaseImpl {
            gateway: Arc::new(gateway),
            session: Arc::new(SessionHolder::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(new_message("hello")).await;
        assert!(matches!(result.unwrap_err(), MessageError::AuthRequired));
    }
}
