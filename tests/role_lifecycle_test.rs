mod common;

use common::{auth_harness, setup_test_db};
use sales_backend::errors::UserError;
use sales_backend::types::internal::auth::permissions;

#[tokio::test]
async fn seeding_twice_leaves_exactly_two_roles() {
    let db = setup_test_db().await;
    let harness = auth_harness(&db);

    // setup_test_db already seeded once
    harness
        .role_store
        .seed_defaults()
        .await
        .expect("reseeding failed");

    let listed = harness.role_store.list_roles().await.expect("listing failed");
    assert_eq!(listed.len(), 2);

    let (_, admin_perms) = listed
        .iter()
        .find(|(role, _)| role.name == "admin")
        .expect("admin role missing");
    assert_eq!(admin_perms.len(), permissions::ALL.len());

    let (_, guest_perms) = listed
        .iter()
        .find(|(role, _)| role.name == "guest")
        .expect("guest role missing");
    assert_eq!(guest_perms.len(), permissions::GUEST.len());
}

#[tokio::test]
async fn role_with_assigned_users_cannot_be_deleted() {
    let db = setup_test_db().await;
    let harness = auth_harness(&db);

    harness
        .credential_store
        .create_user("alice@example.com", "s3cret", None)
        .await
        .expect("registration failed");

    let blocked = harness.role_store.delete_role("guest").await;
    assert!(matches!(blocked, Err(UserError::Validation(_))));

    // Once the last reference is gone, deletion goes through
    let user = harness
        .credential_store
        .find_by_email("alice@example.com")
        .await
        .expect("lookup failed")
        .expect("user missing");
    harness
        .credential_store
        .delete_user(&user.id)
        .await
        .expect("user deletion failed");

    harness
        .role_store
        .delete_role("guest")
        .await
        .expect("role deletion failed");
    assert!(harness
        .role_store
        .find_by_name("guest")
        .await
        .expect("lookup failed")
        .is_none());
}

#[tokio::test]
async fn deleting_a_role_does_not_delete_its_permissions() {
    let db = setup_test_db().await;
    let harness = auth_harness(&db);

    harness
        .role_store
        .delete_role("guest")
        .await
        .expect("role deletion failed");

    // admin still carries the full permission set
    let admin = harness
        .role_store
        .find_by_name("admin")
        .await
        .expect("lookup failed")
        .expect("admin role missing");
    let perms = harness
        .role_store
        .permissions_for_role(&admin)
        .await
        .expect("permission lookup failed");
    assert_eq!(perms.len(), permissions::ALL.len());
}
