//! Repository error taxonomy

use thiserror::Error;

/// Errors surfaced by content repository access
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Transport-level failure talking to the repository
    #[error("repository request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The repository answered with a body we could not decode
    #[error("repository response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    /// The repository answered but its content is unusable
    #[error("repository error: {0}")]
    Repository(String),
}
