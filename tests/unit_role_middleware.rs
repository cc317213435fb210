use uuid::Uuid;

use alumnet::middleware::auth::CurrentUser;
use alumnet::middleware::role::check_role;
use alumnet::modules::users::model::UserRole;

fn create_current_user(role: UserRole) -> CurrentUser {
    CurrentUser {
        id: Uuid::new_v4(),
        username: "test".to_string(),
        role,
    }
}

#[test]
fn test_check_role_exact_match() {
    let admin = create_current_user(UserRole::Admin);
    assert!(check_role(&admin, UserRole::Admin).is_ok());

    let user = create_current_user(UserRole::User);
    assert!(check_role(&user, UserRole::User).is_ok());
}

#[test]
fn test_check_role_mismatch() {
    let user = create_current_user(UserRole::User);
    let err = check_role(&user, UserRole::Admin).unwrap_err();
    assert_eq!(err.status, axum::http::StatusCode::FORBIDDEN);

    // No hierarchy: an admin is not a "user" either.
    let admin = create_current_user(UserRole::Admin);
    assert!(check_role(&admin, UserRole::User).is_err());
}

#[test]
fn test_is_admin_helper() {
    assert!(create_current_user(UserRole::Admin).is_admin());
    assert!(!create_current_user(UserRole::User).is_admin());
}
