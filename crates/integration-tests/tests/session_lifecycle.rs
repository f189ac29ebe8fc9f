//! Session lifecycle: authenticate, restore, end, and the role projection.

#![allow(clippy::unwrap_used)]

use ratewise_client::services::auth::{AuthError, SessionService};
use ratewise_client::session::{MemorySlotStore, SlotStore};
use ratewise_core::Role;

use ratewise_integration_tests::{
    identity_fake, init_tracing, password, regular_user, session_service,
};

type TestSessionService =
    SessionService<ratewise_integration_tests::FakeIdentityApi, MemorySlotStore>;

#[tokio::test]
async fn authenticate_resolves_role_and_persists_session() {
    init_tracing();
    let service = session_service();

    let session = service
        .authenticate("john@example.com", &password("User123!"))
        .await
        .unwrap();

    assert_eq!(session.role(), Role::User);
    assert_eq!(session.user().name, "John Doe Regular Customer");

    // A fresh process start restores the same principal from the slot.
    let restored = service.restore().unwrap().unwrap();
    assert_eq!(restored.user(), session.user());
}

#[tokio::test]
async fn wrong_password_is_invalid_credentials() {
    init_tracing();
    let service = session_service();

    let result = service
        .authenticate("john@example.com", &password("WrongPass1!"))
        .await;

    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    assert!(service.restore().unwrap().is_none());
}

#[tokio::test]
async fn unknown_account_is_invalid_credentials() {
    init_tracing();
    let service = session_service();

    let result = service
        .authenticate("nobody@example.com", &password("User123!"))
        .await;

    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn malformed_email_is_rejected_before_the_collaborator_is_asked() {
    init_tracing();
    let service = session_service();

    let result = service.authenticate("not-an-email", &password("x")).await;

    assert!(matches!(result, Err(AuthError::InvalidEmail(_))));
}

#[tokio::test]
async fn end_session_clears_the_slot_and_is_idempotent() {
    init_tracing();
    let service = session_service();

    let session = service
        .authenticate("admin@example.com", &password("Admin123!"))
        .await
        .unwrap();

    service.end_session(session).unwrap();
    assert!(service.restore().unwrap().is_none());

    // Ending twice is a no-op, not an error.
    let session = service
        .authenticate("admin@example.com", &password("Admin123!"))
        .await
        .unwrap();
    service.end_session(session.clone()).unwrap();
    service.end_session(session).unwrap();
    assert!(service.restore().unwrap().is_none());
}

#[tokio::test]
async fn current_role_is_none_without_a_session() {
    init_tracing();
    let service = session_service();

    assert_eq!(TestSessionService::current_role(None), None);

    let session = service
        .authenticate("jane@store1.com", &password("Store123!"))
        .await
        .unwrap();
    assert_eq!(
        TestSessionService::current_role(Some(&session)),
        Some(Role::Owner)
    );
}

#[test]
fn restore_reads_a_previously_persisted_user_record() {
    init_tracing();
    let slot = MemorySlotStore::new();
    slot.insert(
        "currentUser",
        &serde_json::to_string(&regular_user()).unwrap(),
    )
    .unwrap();
    let service = SessionService::new(identity_fake(), slot);

    let restored = service.restore().unwrap().unwrap();
    assert_eq!(restored.user(), &regular_user());
    assert_eq!(restored.role(), Role::User);
}

#[test]
fn corrupt_slot_contents_mean_unauthenticated() {
    init_tracing();
    let slot = MemorySlotStore::new();
    slot.insert("currentUser", "{ not json").unwrap();
    let service = SessionService::new(identity_fake(), slot);

    assert!(service.restore().unwrap().is_none());
    // The broken document was discarded, not left to fail again.
    assert!(service.restore().unwrap().is_none());
}
