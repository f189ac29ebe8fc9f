//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `RATEWISE_BACKEND_URL` - Base URL of the platform backend
//!   (default: `http://localhost:5000`)
//! - `RATEWISE_SESSION_DIR` - Directory for the client-local session slot
//!   (default: `.ratewise`)
//! - `RATEWISE_HTTP_TIMEOUT_SECS` - Backend request timeout (default: 30)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client core configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the platform backend.
    pub backend_url: Url,
    /// Directory holding the client-local session slot.
    pub session_dir: PathBuf,
    /// Backend request timeout.
    pub http_timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let backend_url = get_env_or_default("RATEWISE_BACKEND_URL", "http://localhost:5000")
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("RATEWISE_BACKEND_URL".to_string(), e.to_string())
            })?;
        let session_dir = PathBuf::from(get_env_or_default("RATEWISE_SESSION_DIR", ".ratewise"));
        let http_timeout = get_env_or_default("RATEWISE_HTTP_TIMEOUT_SECS", "30")
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| {
                ConfigError::InvalidEnvVar("RATEWISE_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
            })?;

        Ok(Self {
            backend_url,
            session_dir,
            http_timeout,
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
