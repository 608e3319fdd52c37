use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Role not found: {0}")]
    RoleNotFound(String),

    #[error("Password hashing failed: {0}")]
    PasswordHashingFailed(String),

    #[error("Invalid token: {reason}")]
    InvalidToken { reason: String },

    #[error("Expired token")]
    ExpiredToken,

    /// The token is well-formed but its session was revoked (logout) or never existed
    #[error("Session not found or revoked")]
    SessionRevoked,
}

impl CredentialError {
    pub fn invalid_token(reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            reason: reason.into(),
        }
    }
}
