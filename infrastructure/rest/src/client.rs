use std::sync::Arc;
use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};

use business::domain::errors::GatewayError;
use business::domain::session::holder::SessionHolder;
use business::domain::session::store::SessionStore;

/// Shared HTTP client for the marketplace API.
///
/// Attaches the session's bearer token to every outgoing request. A 401 from
/// any call clears the session holder and the persisted credentials before
/// the error is surfaced, so callers only ever observe `GatewayError::Auth`
/// against an already-anonymous session.
pub struct RestClient {
    pub http: reqwest::Client,
    base_url: String,
    session: Arc<SessionHolder>,
    store: Arc<dyn SessionStore>,
}

impl RestClient {
    pub fn new(
        base_url: String,
        timeout: Duration,
        session: Arc<SessionHolder>,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: format!("{}/api", base_url.trim_end_matches('/')),
            session,
            store,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Adds the bearer token when a session is active.
    pub fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token.as_str()),
            None => request,
        }
    }

    /// Maps a settled request into the gateway error taxonomy.
    pub async fn check(
        &self,
        result: Result<Response, reqwest::Error>,
    ) -> Result<Response, GatewayError> {
        let response = result.map_err(|_| GatewayError::Transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::UNAUTHORIZED => {
                self.session.sign_out();
                let _ = self.store.clear().await;
                Err(GatewayError::Auth)
            }
            StatusCode::NOT_FOUND => Err(GatewayError::NotFound),
            StatusCode::CONFLICT => Err(GatewayError::Conflict),
            _ => Err(GatewayError::Server {
                status: status.as_u16(),
                detail: error_detail(response).await,
            }),
        }
    }
}

/// Pulls the backend's human-readable `detail` field out of an error body.
async fn error_detail(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|d| d.as_str())
                .map(|d| d.to_string())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        })
}
