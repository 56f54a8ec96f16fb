//! Repository for the `news_articles` table.

use sqlx::PgPool;
use newsroom_core::types::DbId;

use crate::models::article::{Article, CreateArticle};

/// Column list for news_articles queries.
const COLUMNS: &str = r#"id, title, category, content, likes, views, "timestamp""#;

/// Provides insert, lookup, like and listing operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article, letting the database assign id and defaults.
    pub async fn create(pool: &PgPool, input: &CreateArticle) -> Result<Article, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO news_articles (title, category, content, likes, views, "timestamp")
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, 0), COALESCE($6, NOW()))
             RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.content)
            .bind(input.likes)
            .bind(input.views)
            .bind(input.timestamp)
            .fetch_one(pool)
            .await
    }

    /// Find an article by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news_articles WHERE id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Increment `likes` by one in a single statement.
    ///
    /// Returns `None` when no row matches. The read-modify-write happens
    /// inside Postgres, so concurrent likes on the same row all count.
    pub async fn increment_likes(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE news_articles SET likes = likes + 1
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every article, most recent first.
    pub async fn list_by_recency(pool: &PgPool) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!(
            r#"SELECT {COLUMNS} FROM news_articles
             ORDER BY "timestamp" DESC, id DESC"#
        );
        sqlx::query_as::<_, Article>(&query).fetch_all(pool).await
    }

    /// List the most viewed articles, capped at `limit`.
    pub async fn list_top_viewed(pool: &PgPool, limit: i64) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!(
            r#"SELECT {COLUMNS} FROM news_articles
             ORDER BY views DESC, "timestamp" DESC
             LIMIT $1"#
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
