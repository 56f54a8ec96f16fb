//! News article model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use newsroom_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `news_articles` table.
///
/// This is the canonical record: it is what handlers return and what every
/// `news-update` broadcast carries.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub content: String,
    pub likes: i32,
    pub views: i32,
    pub timestamp: Timestamp,
}

/// DTO for creating a new article, accepted from `POST /news` and from the
/// `new-article` channel event.
///
/// Counters and timestamp are optional; the store fills in `0` and `NOW()`.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateArticle {
    pub title: String,
    pub category: String,
    pub content: String,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub likes: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub views: Option<i32>,
    pub timestamp: Option<Timestamp>,
}

impl CreateArticle {
    /// Build a payload with only the text fields set.
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            content: content.into(),
            likes: None,
            views: None,
            timestamp: None,
        }
    }
}
