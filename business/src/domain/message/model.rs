use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::{ProductId, UserId};

/// A message exchanged between two users about a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub sender_id: UserId,
    pub recipient_id: UserId,
    pub product_id: ProductId,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
}

pub struct NewMessage {
    pub recipient_id: UserId,
    pub product_id: ProductId,
    pub content: String,
}
