use crate::errors::AdminError;
use crate::errors::internal::{AuthorizationError, CredentialError, InternalError};

#[test]
fn test_policy_denial_becomes_forbidden_with_reason() {
    let err = AdminError::from(AuthorizationError::Denied {
        reason: "You do not have permission to create users.".to_string(),
    });

    assert_eq!(err.status_code(), 403);
    assert_eq!(err.message(), "You do not have permission to create users.");
}

#[test]
fn test_duplicate_email_is_conflict() {
    let err = AdminError::from_internal_error(
        CredentialError::DuplicateEmail("a@example.com".to_string()).into(),
    );
    assert_eq!(err.status_code(), 409);
}

#[test]
fn test_unknown_role_is_unprocessable() {
    let err = AdminError::from_internal_error(CredentialError::RoleNotFound("pilot".to_string()).into());
    assert_eq!(err.status_code(), 422);
    assert_eq!(err.message(), "Role does not exist: pilot");
}

#[test]
fn test_revoked_session_is_unauthenticated() {
    let err = AdminError::from_internal_error(CredentialError::SessionRevoked.into());
    assert_eq!(err.status_code(), 401);
}

#[test]
fn test_parse_error_hides_details() {
    let err = AdminError::from_internal_error(InternalError::parse("role permissions", "expected array"));
    assert_eq!(err.status_code(), 500);
    assert_eq!(err.message(), "An internal error occurred");
}
