#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("message.content_empty")]
    ContentEmpty,
    #[error("message.auth_required")]
    AuthRequired,
    #[error("gateway.failure")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
