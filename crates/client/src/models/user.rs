//! User domain types.
//!
//! User accounts are owned by the identity collaborator; this type is the
//! referenced record, never the system of record.

use serde::{Deserialize, Serialize};

use ratewise_core::{Email, Role, StoreId, UserId};

/// A platform user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Full display name.
    pub name: String,
    /// User's email address.
    pub email: Email,
    /// Postal address.
    pub address: String,
    /// Role gating which dashboard variant this user reaches.
    pub role: Role,
    /// The store an OWNER manages, when the role is `Owner`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<StoreId>,
}
