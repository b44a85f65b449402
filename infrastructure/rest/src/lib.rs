pub mod auth_gateway;
pub mod catalog_gateway;
pub mod client;
pub mod dto;
pub mod favorite_gateway;
pub mod message_gateway;
