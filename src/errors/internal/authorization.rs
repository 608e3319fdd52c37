use thiserror::Error;

/// A policy check came back as deny
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationError {
    #[error("{reason}")]
    Denied { reason: String },
}
