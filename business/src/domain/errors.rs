/// Gateway errors shared by every remote collection port.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    /// No response reached the client (DNS, refused connection, timeout).
    #[error("gateway.transport")]
    Transport,
    /// Non-2xx response with a human-readable detail from the backend.
    #[error("gateway.server_error")]
    Server { status: u16, detail: String },
    /// Missing, invalid or expired credential (401). The REST adapter clears
    /// the session holder before surfacing this variant.
    #[error("gateway.auth")]
    Auth,
    #[error("gateway.not_found")]
    NotFound,
    #[error("gateway.conflict")]
    Conflict,
}

/// Failures of the persisted session store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session_store.io")]
    Io,
    #[error("session_store.corrupt")]
    Corrupt,
}
