pub mod health;
pub mod news;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the news route tree.
///
/// ```text
/// /ws                         WebSocket (new-article in, news-update out)
///
/// /news                       list (GET), create (POST)
/// /news/trending              top articles by views (GET)
/// /news/{id}/like             like (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .nest("/news", news::router())
}
