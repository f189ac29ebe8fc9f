//! User directory: registration, the password policy, and admin listings.

#![allow(clippy::unwrap_used)]

use ratewise_client::services::SortDirection;
use ratewise_client::services::directory::{
    DirectoryError, NewUser, UserDirectory, UserQuery, UserSortField,
};
use ratewise_core::Role;

use ratewise_integration_tests::{init_tracing, password, sample_users};

fn new_user(email: &str, pass: &str) -> NewUser {
    NewUser {
        name: "Freshly Minted Platform User".to_owned(),
        email: email.to_owned(),
        address: "99 Signup Street, Newcomer City, NC 99999".to_owned(),
        password: password(pass),
    }
}

#[test]
fn register_always_creates_a_regular_user() {
    init_tracing();
    let mut directory = UserDirectory::new();

    let user = directory
        .register(new_user("fresh@example.com", "Passw0rd!"))
        .unwrap();

    assert_eq!(user.role, Role::User);
    assert!(user.store_id.is_none());
    assert_eq!(directory.user_count(), 1);
}

#[test]
fn admin_creation_carries_the_chosen_role() {
    init_tracing();
    let mut directory = UserDirectory::new();

    let owner = directory
        .add_user(new_user("newowner@example.com", "Passw0rd!"), Role::Owner)
        .unwrap();

    assert_eq!(owner.role, Role::Owner);
}

#[test]
fn duplicate_emails_are_rejected_case_insensitively() {
    init_tracing();
    let mut directory = UserDirectory::new();
    directory.seed(sample_users());
    let before = directory.user_count();

    let result = directory.register(new_user("JOHN@EXAMPLE.COM", "Passw0rd!"));

    assert!(matches!(result, Err(DirectoryError::DuplicateEmail(_))));
    assert_eq!(directory.user_count(), before);
}

#[test]
fn password_policy_boundaries() {
    init_tracing();
    let mut directory = UserDirectory::new();

    let rejected = [
        "Short!A",           // 7 characters
        "Toolongpassword!A", // 17 characters
        "nouppercase!1",     // no uppercase letter
        "NoSpecials99",      // no special character
    ];
    for (i, pass) in rejected.iter().enumerate() {
        let result = directory.register(new_user(&format!("p{i}@example.com"), pass));
        let Err(DirectoryError::Validation(errors)) = result else {
            panic!("password {pass:?} was accepted");
        };
        assert!(errors.field("password").is_some());
    }

    assert!(directory
        .register(new_user("good@example.com", "Passw0rd!"))
        .is_ok());
}

#[test]
fn validation_reports_every_invalid_field_at_once() {
    init_tracing();
    let mut directory = UserDirectory::new();

    let result = directory.register(NewUser {
        name: "short".to_owned(),
        email: "nope".to_owned(),
        address: "a".repeat(500),
        password: password("weak"),
    });

    let Err(DirectoryError::Validation(errors)) = result else {
        panic!("invalid user was accepted");
    };
    for field in ["name", "email", "address", "password"] {
        assert!(errors.field(field).is_some(), "missing error for {field}");
    }
    assert_eq!(directory.user_count(), 0);
}

#[test]
fn listing_supports_search_role_filter_and_sorting() {
    init_tracing();
    let mut directory = UserDirectory::new();
    directory.seed(sample_users());

    // Case-insensitive search over name, email, and address.
    let by_name = UserQuery {
        search: Some("jane".to_owned()),
        ..UserQuery::default()
    };
    let found = directory.list_users(&by_name);
    assert_eq!(found.len(), 1);
    assert_eq!(found.first().unwrap().name, "Jane Smith Store Manager");

    // Role filter keeps only matching accounts.
    let owners_only = UserQuery {
        role: Some(Role::Owner),
        ..UserQuery::default()
    };
    assert!(directory
        .list_users(&owners_only)
        .iter()
        .all(|u| u.role == Role::Owner));

    // Sorting is reversible.
    let by_name_desc = UserQuery {
        sort: Some((UserSortField::Name, SortDirection::Descending)),
        ..UserQuery::default()
    };
    let listed = directory.list_users(&by_name_desc);
    let names: Vec<&str> = listed.iter().map(|u| u.name.as_str()).collect();
    let mut expected = names.clone();
    expected.sort_by_key(|n| n.to_lowercase());
    expected.reverse();
    assert_eq!(names, expected);
}
