//! Session and identity resolution.
//!
//! Authenticates against the identity collaborator, persists the resolved
//! principal to the client-local slot, and projects the role that gates
//! dashboard selection. Credential storage and verification live entirely
//! with the collaborator; nothing password-shaped persists here.

mod error;

pub use error::AuthError;

use secrecy::SecretString;

use ratewise_core::{Email, Role};

use crate::api::{ApiError, BackendClient};
use crate::config::ClientConfig;
use crate::models::session::{Session, keys};
use crate::models::User;
use crate::session::{FileSlotStore, SlotStore};

/// Credential-verification seam over the identity collaborator.
///
/// [`BackendClient`] is the production implementation; tests substitute an
/// in-memory fake so no network is involved.
pub trait IdentityApi {
    /// Verify credentials and resolve the account.
    fn login(
        &self,
        email: &Email,
        password: &SecretString,
    ) -> impl Future<Output = Result<User, ApiError>> + Send;
}

impl IdentityApi for BackendClient {
    async fn login(&self, email: &Email, password: &SecretString) -> Result<User, ApiError> {
        Self::login(self, email, password).await
    }
}

/// Session service.
///
/// Handles login, logout, session restore, and the role projection used to
/// select a dashboard variant.
pub struct SessionService<A, S> {
    api: A,
    slot: S,
}

impl SessionService<BackendClient, FileSlotStore> {
    /// Production wiring: the backend client over the configured URL, with
    /// the session slot persisted under the configured directory.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the HTTP client cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::new(
            BackendClient::new(config)?,
            FileSlotStore::new(config.session_dir.clone()),
        ))
    }
}

impl<A, S> SessionService<A, S>
where
    A: IdentityApi,
    S: SlotStore,
{
    /// Create a new session service.
    #[must_use]
    pub const fn new(api: A, slot: S) -> Self {
        Self { api, slot }
    }

    /// Authenticate with the identity collaborator and open a session.
    ///
    /// On success the resolved user is persisted to the session slot so a
    /// later process start can [`restore`](Self::restore) it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email is malformed,
    /// `AuthError::InvalidCredentials` when the collaborator reports no
    /// match, and `AuthError::Api` for transport failures (surfaced
    /// verbatim, never retried).
    pub async fn authenticate(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<Session, AuthError> {
        let email = Email::parse(email)?;

        let user = self.api.login(&email, password).await.map_err(|e| match e {
            ApiError::CredentialsRejected => AuthError::InvalidCredentials,
            other => AuthError::Api(other),
        })?;

        let encoded = serde_json::to_string(&user)?;
        self.slot.insert(keys::CURRENT_USER, &encoded)?;

        tracing::info!(user = %user.id, role = %user.role, "session established");
        Ok(Session::new(user))
    }

    /// Restore a persisted session from the client-local slot.
    ///
    /// An absent slot means unauthenticated. Unreadable slot contents are
    /// discarded and treated the same way.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Slot` if the slot itself cannot be read.
    pub fn restore(&self) -> Result<Option<Session>, AuthError> {
        let Some(encoded) = self.slot.get(keys::CURRENT_USER)? else {
            return Ok(None);
        };

        match serde_json::from_str::<User>(&encoded) {
            Ok(user) => Ok(Some(Session::new(user))),
            Err(error) => {
                tracing::warn!(%error, "discarding unreadable session slot");
                self.slot.remove(keys::CURRENT_USER)?;
                Ok(None)
            }
        }
    }

    /// End a session and clear the persisted slot. Idempotent: ending an
    /// already-ended session is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Slot` if the slot cannot be cleared.
    pub fn end_session(&self, session: Session) -> Result<(), AuthError> {
        let _ = session;
        self.slot.remove(keys::CURRENT_USER)?;
        tracing::info!("session ended");
        Ok(())
    }

    /// Project the role that gates dashboard selection.
    ///
    /// No session means no role; callers render the login view.
    #[must_use]
    pub fn current_role(session: Option<&Session>) -> Option<Role> {
        session.map(Session::role)
    }
}
