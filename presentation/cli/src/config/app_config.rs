use super::api_config::ApiConfig;
use super::session_config::SessionConfig;

pub struct AppConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            session: SessionConfig::from_env(),
        }
    }
}
