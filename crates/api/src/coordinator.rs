//! The news mutation coordinator.
//!
//! [`NewsCoordinator`] owns the one real invariant of the service: a
//! successful write is always followed by a `news-update` broadcast of the
//! stored record, and nothing is broadcast for a write that failed. Reads go
//! straight to the store and never broadcast.

use std::sync::Arc;

use newsroom_core::error::CoreError;
use newsroom_core::news::{ENTITY_NEWS, TRENDING_LIMIT};
use newsroom_core::types::DbId;
use newsroom_core::validation::validate_input;
use newsroom_db::models::article::{Article, CreateArticle};
use newsroom_db::ArticleStore;

use crate::ws::messages::news_update_message;
use crate::ws::WsManager;

/// Failure of a coordinator operation.
#[derive(Debug, thiserror::Error)]
pub enum NewsError {
    /// Domain-level failure (validation, not found).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The article store rejected or failed the operation.
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),
}

/// Ties article persistence to real-time fan-out.
pub struct NewsCoordinator {
    store: Arc<dyn ArticleStore>,
    ws_manager: Arc<WsManager>,
}

impl NewsCoordinator {
    pub fn new(store: Arc<dyn ArticleStore>, ws_manager: Arc<WsManager>) -> Self {
        Self { store, ws_manager }
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Validate and persist a new article, then broadcast the stored record.
    pub async fn create(&self, input: CreateArticle) -> Result<Article, NewsError> {
        validate_input(&input)?;

        let article = self.store.insert(&input).await?;
        tracing::info!(article_id = article.id, category = %article.category, "Article created");

        self.broadcast_update(&article).await;
        Ok(article)
    }

    /// Add one like to an article, then broadcast the updated record.
    ///
    /// An unknown id yields [`CoreError::NotFound`] and nothing is written or
    /// broadcast.
    pub async fn like(&self, id: DbId) -> Result<Article, NewsError> {
        let article = self
            .store
            .increment_likes(id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: ENTITY_NEWS,
                id,
            })?;
        tracing::info!(article_id = article.id, likes = article.likes, "Article liked");

        self.broadcast_update(&article).await;
        Ok(article)
    }

    /// Handle a `new-article` event received on the real-time channel.
    ///
    /// Same semantics as [`create`](Self::create); the originating client
    /// gets no direct reply, so the result is returned for the socket loop
    /// to log.
    pub async fn ingest_from_channel(
        &self,
        conn_id: &str,
        input: CreateArticle,
    ) -> Result<Article, NewsError> {
        tracing::debug!(conn_id, "Ingesting article from channel");
        self.create(input).await
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// A single article, or [`CoreError::NotFound`].
    pub async fn get(&self, id: DbId) -> Result<Article, NewsError> {
        let article = self.store.find_by_id(id).await?.ok_or(CoreError::NotFound {
            entity: ENTITY_NEWS,
            id,
        })?;
        Ok(article)
    }

    /// Every article, newest first.
    pub async fn list_all(&self) -> Result<Vec<Article>, NewsError> {
        Ok(self.store.list_by_recency().await?)
    }

    /// The most viewed articles, at most [`TRENDING_LIMIT`].
    pub async fn list_trending(&self) -> Result<Vec<Article>, NewsError> {
        Ok(self.store.list_top_viewed(TRENDING_LIMIT).await?)
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Whether the article store currently answers.
    pub async fn store_healthy(&self) -> bool {
        self.store.health_check().await.is_ok()
    }

    /// Release the article store.
    pub async fn shutdown(&self) {
        self.store.close().await;
    }

    /// Push the stored record to every connected client.
    async fn broadcast_update(&self, article: &Article) {
        match news_update_message(article) {
            Ok(message) => {
                let recipients = self.ws_manager.broadcast(message).await;
                tracing::debug!(article_id = article.id, recipients, "Broadcast news-update");
            }
            Err(e) => {
                tracing::error!(article_id = article.id, error = %e, "Failed to encode news-update");
            }
        }
    }
}
