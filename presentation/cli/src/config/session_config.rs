use std::env;
use std::path::PathBuf;

/// Location of the persisted session file.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub file: PathBuf,
}

impl SessionConfig {
    /// Load session configuration from environment variables
    ///
    /// Environment variables:
    /// - THRIFTHUB_SESSION_FILE: Path of the session file
    ///   (default: "$HOME/.thrifthub/session.json")
    pub fn from_env() -> Self {
        let file = env::var("THRIFTHUB_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".thrifthub").join("session.json")
            });

        Self { file }
    }
}
