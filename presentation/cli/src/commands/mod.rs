pub mod favorites;
pub mod messages;
pub mod products;
pub mod session;
