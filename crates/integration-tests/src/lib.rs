//! Integration tests for Ratewise.
//!
//! End-to-end scenarios over the wired services: the session service with an
//! in-memory identity fake, the rating aggregation service, the user
//! directory, and dashboard composition. No network and no real backend are
//! involved - the fake stands in for the identity collaborator, and the
//! bulk-read seeds are fixtures.
//!
//! # Test Categories
//!
//! - `session_lifecycle` - authenticate / restore / end-session flows
//! - `rating_aggregation` - the derived-aggregate invariants
//! - `store_listing` - filtering and stable sorting
//! - `store_admin` - store registration and admin composition
//! - `directory` - user listing, registration, and the password policy
//! - `dashboards` - role-gated view selection and composition

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::HashMap;
use std::sync::Once;

use secrecy::{ExposeSecret, SecretString};

use ratewise_client::api::ApiError;
use ratewise_client::models::{Store, User};
use ratewise_client::services::auth::{IdentityApi, SessionService};
use ratewise_client::session::MemorySlotStore;
use ratewise_core::{Email, Role, StoreId, UserId};

/// Install a test tracing subscriber once; later calls are no-ops.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// In-memory stand-in for the identity collaborator.
///
/// Accounts are keyed by lowercase email; a login matches when the stored
/// password matches exactly.
#[derive(Default)]
pub struct FakeIdentityApi {
    accounts: HashMap<String, (SecretString, User)>,
}

impl FakeIdentityApi {
    /// Create an empty fake.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an account.
    #[must_use]
    pub fn with_account(mut self, user: User, password: &str) -> Self {
        self.accounts.insert(
            user.email.as_str().to_lowercase(),
            (SecretString::from(password.to_owned()), user),
        );
        self
    }
}

impl IdentityApi for FakeIdentityApi {
    async fn login(&self, email: &Email, password: &SecretString) -> Result<User, ApiError> {
        self.accounts
            .get(&email.as_str().to_lowercase())
            .filter(|(stored, _)| stored.expose_secret() == password.expose_secret())
            .map(|(_, user)| user.clone())
            .ok_or(ApiError::CredentialsRejected)
    }
}

/// The platform administrator fixture.
#[must_use]
pub fn admin_user() -> User {
    User {
        id: UserId::new("1"),
        name: "System Administrator User".to_owned(),
        email: parse_email("admin@example.com"),
        address: "123 Admin Street, Admin City, AC 12345".to_owned(),
        role: Role::Admin,
        store_id: None,
    }
}

/// The regular user fixture.
#[must_use]
pub fn regular_user() -> User {
    User {
        id: UserId::new("2"),
        name: "John Doe Regular Customer".to_owned(),
        email: parse_email("john@example.com"),
        address: "456 User Avenue, User City, UC 67890".to_owned(),
        role: Role::User,
        store_id: None,
    }
}

/// The store owner fixture, managing the electronics store.
#[must_use]
pub fn owner_user() -> User {
    User {
        id: UserId::new("3"),
        name: "Jane Smith Store Manager".to_owned(),
        email: parse_email("jane@store1.com"),
        address: "789 Store Boulevard, Store City, SC 11111".to_owned(),
        role: Role::Owner,
        store_id: Some(StoreId::new("1")),
    }
}

/// A second regular user for multi-rater scenarios.
#[must_use]
pub fn second_user() -> User {
    User {
        id: UserId::new("5"),
        name: "Alice Johnson Happy Shopper".to_owned(),
        email: parse_email("alice@example.com"),
        address: "555 Shopper Street, Shopper City, SH 55555".to_owned(),
        role: Role::User,
        store_id: None,
    }
}

/// All user fixtures, in seed order.
#[must_use]
pub fn sample_users() -> Vec<User> {
    vec![admin_user(), regular_user(), owner_user(), second_user()]
}

/// Store fixtures mirroring the platform seed data, in seed order.
#[must_use]
pub fn sample_stores() -> Vec<Store> {
    vec![
        store_fixture(
            "1",
            "Tech Electronics Superstore",
            "contact@techelectronics.com",
            "789 Store Boulevard, Store City, SC 11111",
            "3",
            4.2,
            15,
        ),
        store_fixture(
            "2",
            "Coffee Bean Paradise Cafe",
            "hello@coffeebean.com",
            "321 Coffee Lane, Coffee City, CC 22222",
            "4",
            4.7,
            23,
        ),
        store_fixture(
            "3",
            "Fashion Forward Boutique",
            "info@fashionforward.com",
            "555 Fashion Street, Fashion District, FD 33333",
            "5",
            3.8,
            12,
        ),
        store_fixture(
            "4",
            "Healthy Grocery Market",
            "support@healthygrocery.com",
            "777 Health Avenue, Wellness City, WC 44444",
            "6",
            4.5,
            31,
        ),
    ]
}

/// A store with no ratings yet.
#[must_use]
pub fn unrated_store(id: &str, name: &str, owner_id: &str) -> Store {
    store_fixture(
        id,
        name,
        &format!("owner{owner_id}@stores.example"),
        "1 Empty Street, Quiet Town, QT 00000",
        owner_id,
        0.0,
        0,
    )
}

/// An identity fake preloaded with every user fixture.
#[must_use]
pub fn identity_fake() -> FakeIdentityApi {
    FakeIdentityApi::new()
        .with_account(admin_user(), "Admin123!")
        .with_account(regular_user(), "User123!")
        .with_account(owner_user(), "Store123!")
        .with_account(second_user(), "Alice123!")
}

/// A session service over the preloaded fake and an in-memory slot.
#[must_use]
pub fn session_service() -> SessionService<FakeIdentityApi, MemorySlotStore> {
    SessionService::new(identity_fake(), MemorySlotStore::new())
}

/// Shorthand for a password literal.
#[must_use]
pub fn password(value: &str) -> SecretString {
    SecretString::from(value.to_owned())
}

fn parse_email(value: &str) -> Email {
    Email::parse(value).expect("fixture email is valid")
}

fn store_fixture(
    id: &str,
    name: &str,
    email: &str,
    address: &str,
    owner_id: &str,
    average_rating: f64,
    total_ratings: u32,
) -> Store {
    Store {
        id: StoreId::new(id),
        name: name.to_owned(),
        email: parse_email(email),
        address: address.to_owned(),
        owner_id: UserId::new(owner_id),
        average_rating,
        total_ratings,
    }
}
