//! Wire types for the platform backend REST API.

use serde::{Deserialize, Serialize};

use crate::models::{Store, User};

/// Body for `POST /api/auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response for `POST /api/auth/login`.
///
/// The backend confirms a match with `message == "Login successful."` and
/// the resolved user record; anything else means the credentials were
/// rejected.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Envelope for `GET /api/stores`.
#[derive(Debug, Deserialize)]
pub struct StoresEnvelope {
    pub stores: Vec<Store>,
}

/// Envelope for `GET /api/users`.
#[derive(Debug, Deserialize)]
pub struct UsersEnvelope {
    pub users: Vec<User>,
}
