use std::env;
use std::time::Duration;

/// Remote API endpoint configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Load API configuration from environment variables
    ///
    /// Environment variables:
    /// - THRIFTHUB_API_URL: Backend base URL (default: "http://127.0.0.1:8000")
    /// - THRIFTHUB_API_TIMEOUT_SECS: Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let base_url = env::var("THRIFTHUB_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
        let timeout_secs = env::var("THRIFTHUB_API_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(30);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
