use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostChanges, PostId};
use crate::error::RepoError;

/// Generic repository trait for lookups and removal by id.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. Returns `false` when nothing matched.
    async fn delete(&self, id: ID) -> Result<bool, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    /// Persist a new post; the store assigns id and timestamps.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Every live post, ordered by id.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Overwrite the given fields and return the updated post, or `None`
    /// when no live post has that id.
    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Option<Post>, RepoError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), RepoError> {
        Ok(())
    }
}
