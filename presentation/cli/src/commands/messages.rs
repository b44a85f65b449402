use business::domain::message::errors::MessageError;
use business::domain::message::model::NewMessage;
use business::domain::shared::value_objects::{ProductId, UserId};

use crate::setup::dependency_injection::DependencyContainer;

pub async fn conversation(container: &DependencyContainer, with: UserId) -> anyhow::Result<()> {
    match container.get_conversation.execute(&with).await {
        Ok(messages) if messages.is_empty() => {
            println!("No messages with {} yet.", with);
            Ok(())
        }
        Ok(messages) => {
            for message in &messages {
                println!(
                    "[{}] {}: {}",
                    message.timestamp.format("%Y-%m-%d %H:%M"),
                    message.sender_id,
                    message.content
                );
            }
            Ok(())
        }
        Err(MessageError::AuthRequired) => {
            println!("Please sign in to read messages.");
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}

pub async fn send(
    container: &DependencyContainer,
    recipient: UserId,
    product: ProductId,
    content: String,
) -> anyhow::Result<()> {
    let result = container
        .send_message
        .execute(NewMessage {
            recipient_id: recipient,
            product_id: product,
            content,
        })
        .await;

    match result {
        Ok(_) => {
            println!("Message sent.");
            Ok(())
        }
        Err(MessageError::ContentEmpty) => {
            println!("Cannot send an empty message.");
            Ok(())
        }
        Err(MessageError::AuthRequired) => {
            println!("Please sign in to send messages.");
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}
