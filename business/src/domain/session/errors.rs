#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session.invalid_credentials")]
    InvalidCredentials,
    #[error("session.email_taken")]
    EmailTaken,
    #[error("session.auth_required")]
    AuthRequired,
    #[error("gateway.failure")]
    Gateway(#[from] crate::domain::errors::GatewayError),
    #[error("session_store.failure")]
    Store(#[from] crate::domain::errors::SessionStoreError),
}
