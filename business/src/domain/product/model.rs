use std::path::PathBuf;

use chrono::{DateTime, Utc};

use super::errors::ProductError;
use super::value_objects::{Category, Condition};
use crate::domain::shared::value_objects::{ProductId, UserId};

/// A published listing. Read-only to the client; the only per-product state
/// the client owns is the derived favorite flag, kept in the favorite set.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    /// Minor-unit-free currency amount.
    pub price: u64,
    pub category: Category,
    pub condition: Condition,
    pub location: String,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub seller_id: UserId,
    pub created_at: DateTime<Utc>,
    pub is_sold: bool,
    pub views: u64,
}

pub const MAX_LISTING_IMAGES: usize = 5;

pub struct NewListingProps {
    pub title: String,
    pub description: String,
    pub price: u64,
    pub category: Category,
    pub condition: Condition,
    pub location: String,
    pub tags: Vec<String>,
    pub images: Vec<PathBuf>,
}

/// A listing draft validated locally before any remote call is attempted.
#[derive(Debug, Clone)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub price: u64,
    pub category: Category,
    pub condition: Condition,
    pub location: String,
    pub tags: Vec<String>,
    pub images: Vec<PathBuf>,
}

impl NewListing {
    pub fn new(props: NewListingProps) -> Result<Self, ProductError> {
        if props.title.trim().is_empty() {
            return Err(ProductError::TitleEmpty);
        }
        if props.description.trim().is_empty() {
            return Err(ProductError::DescriptionEmpty);
        }
        if props.location.trim().is_empty() {
            return Err(ProductError::LocationEmpty);
        }
        if props.images.is_empty() {
            return Err(ProductError::ImagesRequired);
        }
        if props.images.len() > MAX_LISTING_IMAGES {
            return Err(ProductError::TooManyImages);
        }

        // Tags form a set; drop duplicates while keeping first-seen order.
        let mut tags: Vec<String> = Vec::with_capacity(props.tags.len());
        for tag in props.tags {
            let tag = tag.trim().to_string();
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Ok(Self {
            title: props.title,
            description: props.description,
            price: props.price,
            category: props.category,
            condition: props.condition,
            location: props.location,
            tags,
            images: props.images,
        })
    }
}
