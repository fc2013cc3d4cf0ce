//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Domain errors - failures a handler can surface to a client.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: PostId },

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl DomainError {
    /// Shorthand for a missing post.
    pub fn post_not_found(id: PostId) -> Self {
        Self::NotFound {
            entity_type: "post",
            id,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
