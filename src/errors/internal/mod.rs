use thiserror::Error;

pub mod authorization;
pub mod credential;
pub mod seed;

pub use authorization::AuthorizationError;
pub use credential::CredentialError;
pub use seed::SeedError;

/// Internal error type for store, coordinator and seed operations
///
/// Separates infrastructure errors (shared) from domain errors.
/// Not exposed via API - endpoints convert to AuthError or AdminError.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error("Database error: {operation} failed: {source}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse {
        value_type: String,
        message: String,
    },

    #[error("Crypto error: {operation} failed: {message}")]
    Crypto {
        operation: String,
        message: String,
    },

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    #[error(transparent)]
    Seed(#[from] SeedError),
}

impl InternalError {
    pub fn database(operation: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::Database {
            operation: operation.into(),
            source,
        }
    }

    pub fn parse(value_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            value_type: value_type.into(),
            message: message.into(),
        }
    }

    pub fn crypto(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Crypto {
            operation: operation.into(),
            message: message.into(),
        }
    }
}
