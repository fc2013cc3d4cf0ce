//! In-memory post repository - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use posts_core::domain::{NewPost, Post, PostChanges, PostId};
use posts_core::error::RepoError;
use posts_core::ports::{BaseRepository, PostRepository};

struct Store {
    posts: BTreeMap<PostId, Post>,
    next_id: PostId,
}

/// In-memory post store using a `BTreeMap` behind an async RwLock.
///
/// Ids start at 1 and are never reused. Deleted posts are removed outright.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                posts: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.get(&id).cloned())
    }

    async fn delete(&self, id: PostId) -> Result<bool, RepoError> {
        let mut store = self.store.write().await;
        Ok(store.posts.remove(&id).is_some())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id += 1;

        let now = Utc::now();
        let post = Post {
            id,
            title: post.title,
            body: post.body,
            created_at: now,
            updated_at: now,
        };
        store.posts.insert(id, post.clone());

        tracing::debug!(post_id = id, "Stored post in memory");
        Ok(post)
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.values().cloned().collect())
    }

    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Option<Post>, RepoError> {
        let mut store = self.store.write().await;
        let Some(post) = store.posts.get_mut(&id) else {
            return Ok(None);
        };

        if !changes.is_empty() {
            post.apply(changes, Utc::now());
        }
        Ok(Some(post.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryPostRepository::new();
        let first = repo.create(NewPost::new("a", "1")).await.unwrap();
        let second = repo.create(NewPost::new("b", "2")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, first.updated_at);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = InMemoryPostRepository::new();
        for title in ["one", "two", "three"] {
            repo.create(NewPost::new(title, "")).await.unwrap();
        }

        let titles: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_update_keeps_fields_without_changes() {
        let repo = InMemoryPostRepository::new();
        let post = repo.create(NewPost::new("title", "body")).await.unwrap();

        let updated = repo
            .update(post.id, PostChanges::from_fields("new title".into(), String::new()))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "new title");
        assert_eq!(updated.body, "body");
        assert!(updated.updated_at >= post.updated_at);
    }

    #[tokio::test]
    async fn test_update_without_changes_leaves_post_untouched() {
        let repo = InMemoryPostRepository::new();
        let post = repo.create(NewPost::new("title", "body")).await.unwrap();

        let same = repo
            .update(post.id, PostChanges::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(same, post);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryPostRepository::new();
        let result = repo
            .update(42, PostChanges::from_fields("t".into(), "b".into()))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_whether_a_post_existed() {
        let repo = InMemoryPostRepository::new();
        let post = repo.create(NewPost::new("title", "body")).await.unwrap();

        assert!(repo.delete(post.id).await.unwrap());
        assert!(!repo.delete(post.id).await.unwrap());
        assert_eq!(repo.find_by_id(post.id).await.unwrap(), None);

        // Ids are not reused after a delete.
        let next = repo.create(NewPost::default()).await.unwrap();
        assert_eq!(next.id, post.id + 1);
    }
}
