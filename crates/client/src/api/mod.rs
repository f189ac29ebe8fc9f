//! Platform backend API client.
//!
//! Plain REST over `reqwest` with JSON bodies. The two bulk reads are cached
//! with `moka` (5-minute TTL); login is never cached. Transport failures are
//! surfaced verbatim to the caller - retry policy, if any, belongs to the
//! transport layer, not this core.

mod cache;
mod types;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use ratewise_core::Email;

use crate::config::ClientConfig;
use crate::models::{Store, User};

use cache::{CacheKey, CacheValue};
use types::{LoginRequest, LoginResponse, StoresEnvelope, UsersEnvelope};

/// How long the bulk reads stay cached.
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Errors from the platform backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure reaching the backend.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with an unexpected status.
    #[error("unexpected status {status}")]
    Status {
        /// The HTTP status received.
        status: reqwest::StatusCode,
    },

    /// The backend body could not be decoded.
    #[error("response parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The backend rejected the supplied credentials.
    #[error("credentials rejected")]
    CredentialsRejected,
}

/// Client for the platform backend REST API.
///
/// Cheap to clone; all clones share the HTTP connection pool and the
/// response cache.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<CacheKey, CacheValue>,
}

impl BackendClient {
    /// Create a new backend client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        let cache = Cache::builder()
            .max_capacity(16)
            .time_to_live(CACHE_TTL)
            .build();

        let base_url = config.backend_url.as_str().trim_end_matches('/').to_owned();

        Ok(Self {
            inner: Arc::new(BackendClientInner {
                client,
                base_url,
                cache,
            }),
        })
    }

    /// Verify credentials against `POST /api/auth/login` and resolve the
    /// account.
    ///
    /// The password never appears in logs or error messages.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::CredentialsRejected` when the backend reports no
    /// match, `ApiError::Transport`/`ApiError::Status`/`ApiError::Parse`
    /// otherwise.
    pub async fn login(&self, email: &Email, password: &SecretString) -> Result<User, ApiError> {
        let url = format!("{}/api/auth/login", self.inner.base_url);
        let body = LoginRequest {
            email: email.as_str(),
            password: password.expose_secret(),
        };

        tracing::debug!(%email, "backend login");
        let response = self.inner.client.post(&url).json(&body).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::CredentialsRejected);
        }

        let text = response.text().await?;
        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %truncate(&text, 500),
                "backend returned non-success status"
            );
            return Err(ApiError::Status { status });
        }

        let login: LoginResponse = parse_body(&text)?;
        login.user.ok_or(ApiError::CredentialsRejected)
    }

    /// Fetch all stores from `GET /api/stores` (cached).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport`/`ApiError::Status`/`ApiError::Parse` on
    /// failure.
    pub async fn fetch_stores(&self) -> Result<Vec<Store>, ApiError> {
        if let Some(CacheValue::Stores(stores)) = self.inner.cache.get(&CacheKey::Stores).await {
            tracing::debug!("store list served from cache");
            return Ok(stores);
        }

        let envelope: StoresEnvelope = self.get_json("/api/stores").await?;
        self.inner
            .cache
            .insert(CacheKey::Stores, CacheValue::Stores(envelope.stores.clone()))
            .await;
        Ok(envelope.stores)
    }

    /// Fetch all users from `GET /api/users` (cached). Admin view only.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport`/`ApiError::Status`/`ApiError::Parse` on
    /// failure.
    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        if let Some(CacheValue::Users(users)) = self.inner.cache.get(&CacheKey::Users).await {
            tracing::debug!("user list served from cache");
            return Ok(users);
        }

        let envelope: UsersEnvelope = self.get_json("/api/users").await?;
        self.inner
            .cache
            .insert(CacheKey::Users, CacheValue::Users(envelope.users.clone()))
            .await;
        Ok(envelope.users)
    }

    /// Drop the cached bulk reads so the next fetch hits the backend.
    pub fn invalidate_cache(&self) {
        self.inner.cache.invalidate_all();
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.inner.base_url);
        tracing::debug!(%url, "backend GET");

        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %truncate(&text, 500),
                "backend returned non-success status"
            );
            return Err(ApiError::Status { status });
        }

        parse_body(&text)
    }
}

fn parse_body<T: serde::de::DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %truncate(text, 500),
            "failed to parse backend response"
        );
        ApiError::Parse(e)
    })
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
