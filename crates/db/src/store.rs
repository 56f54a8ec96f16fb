//! The article store seam.
//!
//! [`ArticleStore`] is what the API's mutation coordinator talks to. The
//! production implementation, [`PgArticleStore`], delegates to
//! [`ArticleRepo`]; tests substitute an in-memory implementation.

use async_trait::async_trait;
use newsroom_core::types::DbId;

use crate::models::article::{Article, CreateArticle};
use crate::repositories::ArticleRepo;
use crate::DbPool;

/// Persistence operations required by the newsroom service.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Persist a new article and return the stored record.
    async fn insert(&self, input: &CreateArticle) -> Result<Article, sqlx::Error>;

    /// Look up a single article.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Article>, sqlx::Error>;

    /// Add one like to an article, returning the updated record or `None`
    /// when the id is unknown.
    async fn increment_likes(&self, id: DbId) -> Result<Option<Article>, sqlx::Error>;

    /// All articles ordered by timestamp, newest first.
    async fn list_by_recency(&self) -> Result<Vec<Article>, sqlx::Error>;

    /// At most `limit` articles ordered by views, highest first.
    async fn list_top_viewed(&self, limit: i64) -> Result<Vec<Article>, sqlx::Error>;

    /// Confirm the backing store is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;

    /// Release backing resources. Called once during shutdown.
    async fn close(&self);
}

/// [`ArticleStore`] backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgArticleStore {
    pool: DbPool,
}

impl PgArticleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleStore for PgArticleStore {
    async fn insert(&self, input: &CreateArticle) -> Result<Article, sqlx::Error> {
        ArticleRepo::create(&self.pool, input).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        ArticleRepo::find_by_id(&self.pool, id).await
    }

    async fn increment_likes(&self, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        ArticleRepo::increment_likes(&self.pool, id).await
    }

    async fn list_by_recency(&self) -> Result<Vec<Article>, sqlx::Error> {
        ArticleRepo::list_by_recency(&self.pool).await
    }

    async fn list_top_viewed(&self, limit: i64) -> Result<Vec<Article>, sqlx::Error> {
        ArticleRepo::list_top_viewed(&self.pool, limit).await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}
