//! Handlers for the news article endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use newsroom_core::news::{
    MSG_CREATE_FAILED, MSG_LIKE_FAILED, MSG_LIST_FAILED, MSG_TRENDING_FAILED,
};

use crate::error::{AppError, AppResult};
use crate::extract::{ArticleBody, ArticleId};
use crate::state::AppState;

/// GET /news
///
/// All articles, most recent first.
pub async fn list_news(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let articles = state
        .news
        .list_all()
        .await
        .map_err(|e| AppError::from_news(e, MSG_LIST_FAILED))?;

    Ok(Json(articles))
}

/// POST /news
///
/// Create an article and broadcast it to every connected client.
pub async fn create_news(
    State(state): State<AppState>,
    ArticleBody(input): ArticleBody,
) -> AppResult<impl IntoResponse> {
    let article = state
        .news
        .create(input)
        .await
        .map_err(|e| AppError::from_news(e, MSG_CREATE_FAILED))?;

    Ok((StatusCode::CREATED, Json(article)))
}

/// GET /news/{id}
pub async fn get_news(
    State(state): State<AppState>,
    ArticleId(id): ArticleId,
) -> AppResult<impl IntoResponse> {
    let article = state
        .news
        .get(id)
        .await
        .map_err(|e| AppError::from_news(e, MSG_LIST_FAILED))?;

    Ok(Json(article))
}

/// GET /news/trending
///
/// Up to five articles ordered by views.
pub async fn list_trending(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let articles = state
        .news
        .list_trending()
        .await
        .map_err(|e| AppError::from_news(e, MSG_TRENDING_FAILED))?;

    Ok(Json(articles))
}

/// POST /news/{id}/like
///
/// Add one like and broadcast the updated article.
pub async fn like_news(
    State(state): State<AppState>,
    ArticleId(id): ArticleId,
) -> AppResult<impl IntoResponse> {
    let article = state
        .news
        .like(id)
        .await
        .map_err(|e| AppError::from_news(e, MSG_LIKE_FAILED))?;

    Ok(Json(article))
}
