//! Session-related types.

use serde::{Deserialize, Serialize};

use ratewise_core::{Role, UserId};

use super::User;

/// An authenticated session: the resolved principal for this process.
///
/// Opaque to callers; the only things a renderer needs are the user record
/// and the role projection. Constructed exclusively by the session service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user: User,
}

impl Session {
    pub(crate) const fn new(user: User) -> Self {
        Self { user }
    }

    /// The authenticated user.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// The authenticated user's ID.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user.id
    }

    /// The role gating dashboard selection.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.user.role
    }
}

/// Slot keys for persisted client state.
pub mod keys {
    /// Key for the current logged-in user, stored as a JSON-serialized
    /// [`User`](super::User) record and restored on process start.
    pub const CURRENT_USER: &str = "currentUser";
}
