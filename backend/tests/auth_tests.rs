//! Session and identity tests
//!
//! The mock identity backend accepts any password and resolves unknown
//! emails to the admin demo profile; session changes are observable
//! through the watch channel and sign-out is idempotent.

use std::sync::Arc;

use shared::models::Role;
use twm_server::error::AppError;
use twm_server::services::session::{MockIdentityBackend, SessionService};

fn sessions() -> SessionService {
    SessionService::new(
        "test-secret",
        3600,
        Arc::new(MockIdentityBackend::with_demo_users()),
    )
}

#[test]
fn demo_users_resolve_by_email_with_any_password() {
    let sessions = sessions();

    let (staff, _) = sessions.sign_in("staff@abiwaumi.com", "anything").unwrap();
    assert_eq!(staff.role, Role::Staff);

    let (viewer, _) = sessions.sign_in("viewer@abiwaumi.com", "").unwrap();
    assert_eq!(viewer.role, Role::Viewer);
}

#[test]
fn unknown_email_falls_back_to_the_admin_profile() {
    let sessions = sessions();

    let (user, _) = sessions.sign_in("someone@example.com", "pw").unwrap();
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.email, "admin@abiwaumi.com");
}

#[test]
fn malformed_email_is_rejected_before_the_backend_is_asked() {
    let sessions = sessions();

    let err = sessions.sign_in("not-an-email", "pw").unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));
    assert!(sessions.current_user().is_none());
}

#[test]
fn sign_in_sets_and_sign_out_clears_the_session() {
    let sessions = sessions();
    assert!(sessions.current_user().is_none());

    sessions.sign_in("staff@abiwaumi.com", "pw").unwrap();
    assert_eq!(sessions.current_user().unwrap().role, Role::Staff);

    sessions.sign_out();
    assert!(sessions.current_user().is_none());

    // Idempotent: a second sign-out leaves the same end state.
    sessions.sign_out();
    assert!(sessions.current_user().is_none());
}

#[test]
fn subscribers_observe_sign_in_and_sign_out() {
    let sessions = sessions();
    let mut changes = sessions.subscribe();
    assert!(changes.borrow().is_none());

    sessions.sign_in("viewer@abiwaumi.com", "pw").unwrap();
    assert!(changes.has_changed().unwrap());
    assert_eq!(
        changes.borrow_and_update().as_ref().unwrap().role,
        Role::Viewer
    );

    sessions.sign_out();
    assert!(changes.has_changed().unwrap());
    assert!(changes.borrow_and_update().is_none());
}

#[test]
fn issued_tokens_verify_back_to_the_signed_in_user() {
    let sessions = sessions();

    let (user, tokens) = sessions.sign_in("staff@abiwaumi.com", "pw").unwrap();
    let auth_user = sessions.verify_token(&tokens.access_token).unwrap();

    assert_eq!(auth_user.user_id, user.id);
    assert_eq!(auth_user.role, Role::Staff);
    assert_eq!(auth_user.full_name, user.full_name);
}

#[test]
fn garbage_tokens_are_rejected() {
    let sessions = sessions();

    let err = sessions.verify_token("not-a-token").unwrap_err();
    assert!(matches!(err, AppError::AuthenticationFailed(_)));
}

#[test]
fn tokens_signed_with_another_secret_are_rejected() {
    let issuing = SessionService::new(
        "other-secret",
        3600,
        Arc::new(MockIdentityBackend::with_demo_users()),
    );
    let verifying = sessions();

    let (_, tokens) = issuing.sign_in("staff@abiwaumi.com", "pw").unwrap();
    assert!(verifying.verify_token(&tokens.access_token).is_err());
}
