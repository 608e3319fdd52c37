use crate::errors::internal::AuthorizationError;

/// Reason used when a policy denies without saying why
pub const DEFAULT_DENY_MESSAGE: &str = "This action is unauthorized.";

/// Outcome of a policy check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationResponse {
    Allow,
    Deny(Option<String>),
}

impl AuthorizationResponse {
    pub fn allow() -> Self {
        Self::Allow
    }

    pub fn deny(message: impl Into<String>) -> Self {
        Self::Deny(Some(message.into()))
    }

    /// Allow when `condition` holds, otherwise deny with `message`
    pub fn allow_if(condition: bool, message: impl Into<String>) -> Self {
        if condition {
            Self::Allow
        } else {
            Self::deny(message)
        }
    }

    pub fn allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    pub fn denied(&self) -> bool {
        !self.allowed()
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::Deny(reason) => Some(reason.as_deref().unwrap_or(DEFAULT_DENY_MESSAGE)),
        }
    }

    /// Convert into a `Result` so callers can use `?`
    pub fn authorize(self) -> Result<(), AuthorizationError> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(reason) => Err(AuthorizationError::Denied {
                reason: reason.unwrap_or_else(|| DEFAULT_DENY_MESSAGE.to_string()),
            }),
        }
    }
}
