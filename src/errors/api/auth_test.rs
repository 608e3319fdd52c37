use crate::errors::AuthError;
use crate::errors::internal::{CredentialError, InternalError};
use sea_orm::DbErr;

#[test]
fn test_database_error_converts_to_internal_server_error() {
    let internal_err = InternalError::database("find_user", DbErr::RecordNotFound("x".to_string()));
    let auth_err = AuthError::from_internal_error(internal_err);

    assert!(matches!(auth_err, AuthError::InternalError(_)));
    assert_eq!(auth_err.message(), "An internal error occurred");
}

#[test]
fn test_unknown_user_looks_like_bad_password() {
    let unknown = AuthError::from_internal_error(
        CredentialError::UserNotFound("ghost@example.com".to_string()).into(),
    );
    let wrong = AuthError::from_internal_error(CredentialError::InvalidCredentials.into());

    assert_eq!(unknown.message(), wrong.message());
    assert_eq!(wrong.message(), "Invalid email or password");
}

#[test]
fn test_token_errors_are_unauthenticated() {
    for err in [
        CredentialError::invalid_token("bad signature"),
        CredentialError::ExpiredToken,
        CredentialError::SessionRevoked,
    ] {
        let auth_err = AuthError::from_internal_error(err.into());
        assert!(matches!(auth_err, AuthError::Unauthenticated(_)));
    }
}
