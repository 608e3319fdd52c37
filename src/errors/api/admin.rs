use crate::errors::internal::{AuthorizationError, CredentialError, InternalError};
use poem_openapi::{ApiResponse, Object, payload::Json};
use std::fmt;

/// Standardized error response for admin endpoints
#[derive(Object, Debug)]
pub struct AdminErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Admin operation error types
#[derive(ApiResponse, Debug)]
pub enum AdminError {
    /// Missing, invalid, expired or revoked access token
    #[oai(status = 401)]
    Unauthenticated(Json<AdminErrorResponse>),

    /// A policy denied the action
    #[oai(status = 403)]
    Forbidden(Json<AdminErrorResponse>),

    /// User not found
    #[oai(status = 404)]
    UserNotFound(Json<AdminErrorResponse>),

    /// Email already registered
    #[oai(status = 409)]
    DuplicateEmail(Json<AdminErrorResponse>),

    /// Referenced role does not exist
    #[oai(status = 422)]
    UnknownRole(Json<AdminErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<AdminErrorResponse>),
}

impl AdminError {
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        AdminError::Unauthenticated(Json(AdminErrorResponse {
            error: "unauthenticated".to_string(),
            message: message.into(),
            status_code: 401,
        }))
    }

    pub fn forbidden(reason: impl Into<String>) -> Self {
        AdminError::Forbidden(Json(AdminErrorResponse {
            error: "forbidden".to_string(),
            message: reason.into(),
            status_code: 403,
        }))
    }

    pub fn user_not_found(user_id: String) -> Self {
        AdminError::UserNotFound(Json(AdminErrorResponse {
            error: "user_not_found".to_string(),
            message: format!("User not found: {}", user_id),
            status_code: 404,
        }))
    }

    pub fn duplicate_email() -> Self {
        AdminError::DuplicateEmail(Json(AdminErrorResponse {
            error: "duplicate_email".to_string(),
            message: "Email is already registered".to_string(),
            status_code: 409,
        }))
    }

    pub fn unknown_role(slug: &str) -> Self {
        AdminError::UnknownRole(Json(AdminErrorResponse {
            error: "unknown_role".to_string(),
            message: format!("Role does not exist: {}", slug),
            status_code: 422,
        }))
    }

    /// Convert InternalError to AdminError
    ///
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Authorization(AuthorizationError::Denied { reason }) => {
                tracing::debug!("Policy denied: {}", reason);
                Self::forbidden(reason.clone())
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
            InternalError::Credential(CredentialError::UserNotFound(user_id)) => {
                Self::user_not_found(user_id.clone())
            }
            InternalError::Credential(CredentialError::DuplicateEmail(email)) => {
                tracing::debug!("Duplicate email on register: {}", email);
                Self::duplicate_email()
            }
            InternalError::Credential(CredentialError::RoleNotFound(slug)) => {
                Self::unknown_role(slug)
            }
            _ => {
                tracing::error!("Unexpected error in admin operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    fn internal_server_error() -> Self {
        AdminError::InternalError(Json(AdminErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    pub fn message(&self) -> String {
        self.body().message.clone()
    }

    pub fn status_code(&self) -> u16 {
        self.body().status_code
    }

    fn body(&self) -> &AdminErrorResponse {
        match self {
            AdminError::Unauthenticated(json)
            | AdminError::Forbidden(json)
            | AdminError::UserNotFound(json)
            | AdminError::DuplicateEmail(json)
            | AdminError::UnknownRole(json)
            | AdminError::InternalError(json) => &json.0,
        }
    }
}

impl From<InternalError> for AdminError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl From<AuthorizationError> for AdminError {
    fn from(err: AuthorizationError) -> Self {
        Self::from_internal_error(InternalError::Authorization(err))
    }
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
