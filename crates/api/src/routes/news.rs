//! Route definitions for news articles.
//!
//! Registered under `/news`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::news;
use crate::state::AppState;

/// News routes, registered as `/news`.
///
/// ```text
/// GET    /                list_news
/// POST   /                create_news
/// GET    /trending        list_trending
/// GET    /{id}            get_news
/// POST   /{id}/like       like_news
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(news::list_news).post(news::create_news))
        .route("/trending", get(news::list_trending))
        .route("/{id}", get(news::get_news))
        .route("/{id}/like", post(news::like_news))
}
