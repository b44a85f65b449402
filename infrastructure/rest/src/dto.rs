use chrono::{DateTime, Utc};
use serde::Deserialize;

use business::domain::message::model::Message;
use business::domain::product::model::Product;
use business::domain::product::value_objects::{Category, Condition};
use business::domain::session::model::Identity;

/// Wire shape of a product as served by the backend.
#[derive(Debug, Deserialize)]
pub struct ProductDto {
    pub id: String,
    pub title: String,
    pub description: String,
    /// The upstream API serves prices as JSON numbers with a fractional
    /// part; the domain works in whole minor-unit-free amounts.
    pub price: f64,
    pub category: Category,
    pub condition: Condition,
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub seller_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_sold: bool,
    #[serde(default)]
    pub views: u64,
}

impl ProductDto {
    pub fn into_domain(self) -> Product {
        Product {
            id: self.id.into(),
            title: self.title,
            description: self.description,
            price: self.price.max(0.0).round() as u64,
            category: self.category,
            condition: self.condition,
            location: self.location,
            tags: self.tags,
            images: self.images,
            seller_id: self.seller_id.into(),
            created_at: self.created_at,
            is_sold: self.is_sold,
            views: self.views,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductDto>,
}

/// `POST /auth/login` and `POST /auth/register` response.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: Identity,
}

#[derive(Debug, Deserialize)]
pub struct MessageDto {
    pub id: String,
    pub sender_id: String,
    pub recipient_id: String,
    pub product_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
}

impl MessageDto {
    pub fn into_domain(self) -> Message {
        Message {
            id: self.id,
            sender_id: self.sender_id.into(),
            recipient_id: self.recipient_id.into(),
            product_id: self.product_id.into(),
            content: self.content,
            timestamp: self.timestamp,
            is_read: self.is_read,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_product_and_round_price_to_whole_units() {
        let raw = r#"{
            "id": "p-1",
            "title": "Denim Jacket",
            "description": "Lightly used",
            "price": 1499.0,
            "category": "fashion",
            "condition": "good",
            "location": "Mumbai, Maharashtra",
            "tags": ["denim"],
            "images": ["a.jpg"],
            "seller_id": "u-9",
            "created_at": "2026-05-01T10:00:00Z",
            "views": 3,
            "is_sold": false
        }"#;

        let product = serde_json::from_str::<ProductDto>(raw)
            .unwrap()
            .into_domain();
        assert_eq!(product.price, 1499);
        assert_eq!(product.category, Category::Fashion);
        assert_eq!(product.id, "p-1".into());
    }

    #[test]
    fn should_default_optional_product_fields() {
        let raw = r#"{
            "id": "p-2",
            "title": "Paperback",
            "description": "Novel",
            "price": 200,
            "category": "books",
            "condition": "fair",
            "location": "Delhi, NCR",
            "seller_id": "u-1",
            "created_at": "2026-05-01T10:00:00Z"
        }"#;

        let product = serde_json::from_str::<ProductDto>(raw)
            .unwrap()
            .into_domain();
        assert!(product.tags.is_empty());
        assert!(!product.is_sold);
        assert_eq!(product.views, 0);
    }

    #[test]
    fn should_deserialize_token_response_with_identity() {
        let raw = r#"{
            "access_token": "jwt-token",
            "token_type": "bearer",
            "user": {
                "id": "u-1",
                "name": "Asha",
                "email": "asha@example.com",
                "phone": "+91 98000 00000",
                "joined_date": "2026-01-15T08:30:00Z"
            }
        }"#;

        let response: TokenResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.access_token, "jwt-token");
        assert_eq!(response.user.name, "Asha");
        assert!(!response.user.is_verified);
    }
}
