use thiserror::Error;

/// Error type for repository operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A reading would break the store's range invariant
    #[error("Validation error: {0}")]
    Validation(String),
}
