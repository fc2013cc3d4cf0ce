//! Shared fixtures for handler tests.

use std::sync::Arc;

use async_trait::async_trait;

use posts_core::domain::{NewPost, NotFoundPolicy, Post, PostChanges, PostId};
use posts_core::error::RepoError;
use posts_core::ports::{BaseRepository, PostRepository};
use posts_infra::InMemoryPostRepository;

use crate::state::AppState;

pub fn memory_state(policy: NotFoundPolicy) -> AppState {
    AppState::new(Arc::new(InMemoryPostRepository::new()), policy)
}

pub fn failing_state() -> AppState {
    AppState::new(Arc::new(FailingRepository), NotFoundPolicy::Strict)
}

/// A store whose every call fails.
pub struct FailingRepository;

fn failure() -> RepoError {
    RepoError::Query("connection reset by peer".to_string())
}

#[async_trait]
impl BaseRepository<Post, PostId> for FailingRepository {
    async fn find_by_id(&self, _id: PostId) -> Result<Option<Post>, RepoError> {
        Err(failure())
    }

    async fn delete(&self, _id: PostId) -> Result<bool, RepoError> {
        Err(failure())
    }
}

#[async_trait]
impl PostRepository for FailingRepository {
    async fn create(&self, _post: NewPost) -> Result<Post, RepoError> {
        Err(failure())
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        Err(failure())
    }

    async fn update(&self, _id: PostId, _changes: PostChanges) -> Result<Option<Post>, RepoError> {
        Err(failure())
    }

    async fn ping(&self) -> Result<(), RepoError> {
        Err(RepoError::Connection("no route to host".to_string()))
    }
}
