mod common;

use common::{auth_harness, setup_test_db};
use sales_backend::errors::{AuthError, UserError};
use sales_backend::types::internal::auth::permissions;

#[tokio::test]
async fn full_login_flow_from_registration_to_authorized_call() {
    let db = setup_test_db().await;
    let harness = auth_harness(&db);

    // Register
    let user = harness
        .credential_store
        .create_user("alice@example.com", "s3cret", None)
        .await
        .expect("registration failed");

    // Login
    let verified = harness
        .credential_store
        .verify_credentials("alice@example.com", "s3cret")
        .await
        .expect("login failed");
    assert_eq!(verified.id, user.id);

    let token = harness
        .token_service
        .issue(&verified.id, &verified.email)
        .expect("token issuance failed");

    // Authorized call with the guest's read permission
    let caller = harness
        .access_control
        .require(&token, permissions::CUSTOMERS_READ)
        .await
        .expect("guest read should be allowed");
    assert_eq!(caller.email, "alice@example.com");
    assert_eq!(caller.role, "guest");
}

#[tokio::test]
async fn promotion_changes_access_without_a_new_token() {
    let db = setup_test_db().await;
    let harness = auth_harness(&db);

    let user = harness
        .credential_store
        .create_user("bob@example.com", "s3cret", None)
        .await
        .expect("registration failed");
    let token = harness
        .token_service
        .issue(&user.id, &user.email)
        .expect("token issuance failed");

    let denied = harness
        .access_control
        .require(&token, permissions::CUSTOMERS_WRITE)
        .await;
    assert!(matches!(denied, Err(AuthError::Forbidden(_))));

    harness
        .credential_store
        .update_role(&user.id, "admin")
        .await
        .expect("promotion failed");

    harness
        .access_control
        .require(&token, permissions::CUSTOMERS_WRITE)
        .await
        .expect("admin write should be allowed with the original token");
}

#[tokio::test]
async fn login_does_not_reveal_whether_the_email_exists() {
    let db = setup_test_db().await;
    let harness = auth_harness(&db);

    harness
        .credential_store
        .create_user("carol@example.com", "s3cret", None)
        .await
        .expect("registration failed");

    let wrong_password = harness
        .credential_store
        .verify_credentials("carol@example.com", "wrong")
        .await;
    let unknown_email = harness
        .credential_store
        .verify_credentials("nobody@example.com", "s3cret")
        .await;

    // Same variant for both failure modes
    assert!(matches!(
        wrong_password,
        Err(AuthError::InvalidCredentials(_))
    ));
    assert!(matches!(
        unknown_email,
        Err(AuthError::InvalidCredentials(_))
    ));
}

#[tokio::test]
async fn deleted_account_loses_access_immediately() {
    let db = setup_test_db().await;
    let harness = auth_harness(&db);

    let user = harness
        .credential_store
        .create_user("dave@example.com", "s3cret", Some("admin"))
        .await
        .expect("registration failed");
    let token = harness
        .token_service
        .issue(&user.id, &user.email)
        .expect("token issuance failed");

    harness
        .access_control
        .require(&token, permissions::USERS_MANAGE)
        .await
        .expect("admin should be allowed before deletion");

    harness
        .credential_store
        .delete_user(&user.id)
        .await
        .expect("deletion failed");

    let result = harness
        .access_control
        .require(&token, permissions::USERS_MANAGE)
        .await;
    assert!(matches!(result, Err(AuthError::InvalidToken(_))));
}

#[tokio::test]
async fn registration_requires_seeded_roles_and_unique_email() {
    let db = setup_test_db().await;
    let harness = auth_harness(&db);

    harness
        .credential_store
        .create_user("erin@example.com", "s3cret", None)
        .await
        .expect("registration failed");

    let duplicate = harness
        .credential_store
        .create_user("erin@example.com", "other", None)
        .await;
    assert!(matches!(duplicate, Err(UserError::DuplicateEmail(_))));

    let unknown_role = harness
        .credential_store
        .create_user("frank@example.com", "s3cret", Some("superuser"))
        .await;
    assert!(matches!(unknown_role, Err(UserError::RoleNotFound(_))));
}
