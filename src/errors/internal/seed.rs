use thiserror::Error;

/// Failures inside seed routines
///
/// Most of these are logged and skipped by the caller rather than
/// aborting the whole batch.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Missing prerequisite {entity} '{key}'")]
    MissingPrerequisite { entity: String, key: String },

    #[error("Download of {url} failed: {reason}")]
    Download { url: String, reason: String },

    #[error("Writing media file {path} failed: {source}")]
    Storage {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SeedError {
    pub fn missing(entity: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingPrerequisite {
            entity: entity.into(),
            key: key.into(),
        }
    }
}
