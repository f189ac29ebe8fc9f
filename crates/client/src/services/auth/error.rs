//! Authentication error types.

use thiserror::Error;

use crate::api::ApiError;
use crate::session::SlotError;

/// Errors that can occur during session and identity operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] ratewise_core::EmailError),

    /// The identity collaborator reported no matching account.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The collaborator was unreachable or misbehaved. Surfaced verbatim,
    /// never retried here.
    #[error("backend error: {0}")]
    Api(ApiError),

    /// The client-local session slot failed.
    #[error("session slot error: {0}")]
    Slot(#[from] SlotError),

    /// The resolved principal could not be serialized for persistence.
    #[error("session encode error: {0}")]
    Encode(#[from] serde_json::Error),
}
