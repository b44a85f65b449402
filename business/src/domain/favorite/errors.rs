#[derive(Debug, thiserror::Error)]
pub enum FavoriteError {
    /// No active session; the caller must redirect to authentication.
    #[error("favorite.auth_required")]
    AuthRequired,
    #[error("gateway.failure")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
