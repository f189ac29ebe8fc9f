//! Platform roles.

use serde::{Deserialize, Serialize};

/// Role attached to every user account.
///
/// The backend serializes roles in SCREAMING_SNAKE_CASE (`"ADMIN"`, `"USER"`,
/// `"OWNER"`). This enum is the only role representation in the codebase;
/// every consumer dispatches on it rather than on raw strings.
///
/// Dashboard access is mutually exclusive per role: an owner cannot also
/// reach the admin view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Platform administrator: manages users and stores.
    Admin,
    /// Regular user: browses stores and submits ratings.
    User,
    /// Store owner: views aggregated feedback for their store.
    Owner,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "ADMIN"),
            Self::User => write!(f, "USER"),
            Self::Owner => write!(f, "OWNER"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    /// Case-insensitive parse.
    ///
    /// Historical exports spelled the owner role `STORE_OWNER` and mixed
    /// lowercase variants; both are accepted here so legacy data loads, but
    /// nothing ever serializes back to those spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "USER" => Ok(Self::User),
            "OWNER" | "STORE_OWNER" => Ok(Self::Owner),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_form_is_screaming_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(serde_json::to_string(&Role::Owner).unwrap(), "\"OWNER\"");

        let role: Role = serde_json::from_str("\"USER\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_from_str_accepts_legacy_spellings() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("OWNER".parse::<Role>().unwrap(), Role::Owner);
        assert_eq!("STORE_OWNER".parse::<Role>().unwrap(), Role::Owner);
        assert_eq!("store_owner".parse::<Role>().unwrap(), Role::Owner);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("moderator".parse::<Role>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for role in [Role::Admin, Role::User, Role::Owner] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }
}
