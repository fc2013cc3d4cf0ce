//! Application state - shared across all handlers.

use std::sync::Arc;

use posts_core::NotFoundPolicy;
use posts_core::ports::PostRepository;
use posts_infra::InMemoryPostRepository;

use crate::config::AppConfig;

/// Shared application state, injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub not_found: NotFoundPolicy,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>, not_found: NotFoundPolicy) -> Self {
        Self { posts, not_found }
    }

    /// Build the state from configuration, connecting to the database when
    /// one is configured.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let posts = post_repository(config).await?;
        tracing::info!("Application state initialized");
        Ok(Self::new(posts, config.not_found))
    }
}

#[cfg(feature = "postgres")]
async fn post_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn PostRepository>> {
    use anyhow::Context;
    use posts_infra::{DatabasePool, PostgresPostRepository};

    match &config.database {
        Some(db_config) => {
            let pool = DatabasePool::connect(db_config)
                .await
                .context("failed to connect to the posts database")?;
            Ok(Arc::new(PostgresPostRepository::new(pool.conn)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            Ok(Arc::new(InMemoryPostRepository::new()))
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn post_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn PostRepository>> {
    if config.database.is_some() {
        tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
    }
    tracing::info!("Running without postgres feature - using in-memory repository");
    Ok(Arc::new(InMemoryPostRepository::new()))
}
