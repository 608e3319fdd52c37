use thiserror::Error;

/// Errors raised while loading settings at startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Required setting '{name}' is missing")]
    Missing { name: String },

    #[error("Setting '{name}' must be at least {min} characters, got {actual}")]
    TooShort {
        name: String,
        min: usize,
        actual: usize,
    },

    #[error("Setting '{name}' is invalid: {reason}")]
    Invalid { name: String, reason: String },
}

impl SettingsError {
    pub fn missing(name: &str) -> Self {
        Self::Missing {
            name: name.to_string(),
        }
    }

    pub fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
