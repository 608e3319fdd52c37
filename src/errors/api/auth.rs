use crate::errors::internal::{CredentialError, InternalError};
use poem_openapi::{ApiResponse, Object, payload::Json};
use std::fmt;

/// Standardized error response for authentication endpoints
#[derive(Object, Debug)]
pub struct AuthErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Authentication error types
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// Invalid email or password
    #[oai(status = 401)]
    InvalidCredentials(Json<AuthErrorResponse>),

    /// Invalid, expired or revoked access token
    #[oai(status = 401)]
    Unauthenticated(Json<AuthErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<AuthErrorResponse>),
}

impl AuthError {
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials(Json(AuthErrorResponse {
            error: "invalid_credentials".to_string(),
            message: "Invalid email or password".to_string(),
            status_code: 401,
        }))
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        AuthError::Unauthenticated(Json(AuthErrorResponse {
            error: "unauthenticated".to_string(),
            message: message.into(),
            status_code: 401,
        }))
    }

    /// Convert InternalError to AuthError
    ///
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Credential(CredentialError::InvalidCredentials)
            | InternalError::Credential(CredentialError::UserNotFound(_)) => {
                tracing::debug!("Invalid credentials attempt");
                Self::invalid_credentials()
            }
            InternalError::Credential(CredentialError::InvalidToken { reason }) => {
                tracing::debug!("Invalid token: {}", reason);
                Self::unauthenticated("Invalid or malformed token")
            }
            InternalError::Credential(CredentialError::ExpiredToken) => {
                Self::unauthenticated("Token has expired")
            }
            InternalError::Credential(CredentialError::SessionRevoked) => {
                Self::unauthenticated("Session has ended")
            }
            _ => {
                tracing::error!("Unexpected error in auth operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    fn internal_server_error() -> Self {
        AuthError::InternalError(Json(AuthErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    pub fn message(&self) -> String {
        match self {
            AuthError::InvalidCredentials(json) => json.0.message.clone(),
            AuthError::Unauthenticated(json) => json.0.message.clone(),
            AuthError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl From<InternalError> for AuthError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
