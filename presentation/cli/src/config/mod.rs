pub mod api_config;
pub mod app_config;
pub mod session_config;
