//! User directory.
//!
//! The identity collaborator owns user accounts; this directory holds the
//! referenced records for the admin view, plus the two creation paths: self-
//! service registration (always a regular user) and admin creation with an
//! explicit role. Passwords are validated against the platform policy and
//! then discarded - credential storage belongs to the collaborator.

mod error;

pub use error::DirectoryError;

use secrecy::{ExposeSecret, SecretString};

use ratewise_core::{Email, Role, UserId};

use crate::models::User;
use crate::validate::{self, ValidationErrors};

use super::SortDirection;

/// Sort field for user listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSortField {
    /// Lexicographic by name, case-insensitive.
    Name,
    /// Lexicographic by email, case-insensitive.
    Email,
    /// Lexicographic by address, case-insensitive.
    Address,
    /// By role wire form (ADMIN < OWNER < USER).
    Role,
}

/// User listing parameters.
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    /// Case-insensitive substring matched against name, email, and address.
    pub search: Option<String>,
    /// Keep only users with this role.
    pub role: Option<Role>,
    /// Sort field and direction; insertion order when absent. Stable.
    pub sort: Option<(UserSortField, SortDirection)>,
}

/// A new user account.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Full display name, 20-60 characters.
    pub name: String,
    /// Email address; unique across accounts.
    pub email: String,
    /// Postal address, at most 400 characters.
    pub address: String,
    /// Initial password; checked against the platform policy, then dropped.
    pub password: SecretString,
}

/// Directory of referenced user records.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with a backend bulk read.
    pub fn seed(&mut self, users: Vec<User>) {
        self.users = users;
    }

    /// List users, optionally searched, role-filtered, and sorted.
    #[must_use]
    pub fn list_users(&self, query: &UserQuery) -> Vec<User> {
        let needle = query.search.as_ref().map(|s| s.to_lowercase());

        let mut users: Vec<User> = self
            .users
            .iter()
            .filter(|user| {
                let matches_search = needle.as_ref().is_none_or(|needle| {
                    user.name.to_lowercase().contains(needle)
                        || user.email.as_str().to_lowercase().contains(needle)
                        || user.address.to_lowercase().contains(needle)
                });
                let matches_role = query.role.is_none_or(|role| user.role == role);
                matches_search && matches_role
            })
            .cloned()
            .collect();

        if let Some((field, direction)) = query.sort {
            users.sort_by(|a, b| {
                let ordering = match field {
                    UserSortField::Name => cmp_ignore_case(&a.name, &b.name),
                    UserSortField::Email => cmp_ignore_case(a.email.as_str(), b.email.as_str()),
                    UserSortField::Address => cmp_ignore_case(&a.address, &b.address),
                    UserSortField::Role => a.role.to_string().cmp(&b.role.to_string()),
                };
                direction.apply(ordering)
            });
        }

        users
    }

    /// Look up a user by ID.
    #[must_use]
    pub fn get(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// Find a user by email, case-insensitively.
    #[must_use]
    pub fn find_by_email(&self, email: &Email) -> Option<&User> {
        self.users.iter().find(|u| u.email.eq_ignore_case(email))
    }

    /// Self-service registration. The new account is always a regular user.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Validation` with one entry per invalid
    /// field, or `DirectoryError::DuplicateEmail` when the email is taken.
    pub fn register(&mut self, new_user: NewUser) -> Result<User, DirectoryError> {
        self.create(new_user, Role::User)
    }

    /// Admin user creation with an explicit role.
    ///
    /// # Errors
    ///
    /// Same as [`register`](Self::register).
    pub fn add_user(&mut self, new_user: NewUser, role: Role) -> Result<User, DirectoryError> {
        self.create(new_user, role)
    }

    /// Number of users.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    fn create(&mut self, new_user: NewUser, role: Role) -> Result<User, DirectoryError> {
        let mut errors = ValidationErrors::new();
        validate::check_name(&mut errors, "name", &new_user.name);
        let email = validate::check_email(&mut errors, &new_user.email);
        validate::check_address(&mut errors, &new_user.address);
        validate::check_password(&mut errors, new_user.password.expose_secret());
        errors.into_result()?;
        let email = email.ok_or_else(ValidationErrors::new)?;

        if self.find_by_email(&email).is_some() {
            return Err(DirectoryError::DuplicateEmail(email));
        }

        let user = User {
            id: UserId::generate(),
            name: new_user.name,
            email,
            address: new_user.address,
            role,
            store_id: None,
        };
        self.users.push(user.clone());
        tracing::info!(user = %user.id, %role, "user created");
        Ok(user)
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
