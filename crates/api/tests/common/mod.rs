#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::extract::ws::Message;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tokio::sync::mpsc::UnboundedReceiver;
use tower::ServiceExt;

use newsroom_api::config::{CorsOrigins, ServerConfig};
use newsroom_api::coordinator::NewsCoordinator;
use newsroom_api::router::build_app_router;
use newsroom_api::state::AppState;
use newsroom_api::ws::WsManager;
use newsroom_core::types::DbId;
use newsroom_db::models::article::{Article, CreateArticle};
use newsroom_db::ArticleStore;

// ---------------------------------------------------------------------------
// In-memory article store
// ---------------------------------------------------------------------------

/// [`ArticleStore`] kept in a `Vec`, with a switch to simulate an
/// unavailable database.
#[derive(Default)]
pub struct InMemoryArticleStore {
    articles: Mutex<Vec<Article>>,
    next_id: AtomicI64,
    failing: AtomicBool,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of everything stored, in insertion order.
    pub fn snapshot(&self) -> Vec<Article> {
        self.articles.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.failing.load(Ordering::SeqCst) {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn insert(&self, input: &CreateArticle) -> Result<Article, sqlx::Error> {
        self.check()?;
        let article = Article {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            title: input.title.clone(),
            category: input.category.clone(),
            content: input.content.clone(),
            likes: input.likes.unwrap_or(0),
            views: input.views.unwrap_or(0),
            timestamp: input.timestamp.unwrap_or_else(chrono::Utc::now),
        };
        self.articles.lock().unwrap().push(article.clone());
        Ok(article)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        self.check()?;
        Ok(self.snapshot().into_iter().find(|a| a.id == id))
    }

    async fn increment_likes(&self, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        self.check()?;
        let mut articles = self.articles.lock().unwrap();
        Ok(articles.iter_mut().find(|a| a.id == id).map(|a| {
            a.likes += 1;
            a.clone()
        }))
    }

    async fn list_by_recency(&self) -> Result<Vec<Article>, sqlx::Error> {
        self.check()?;
        let mut articles = self.snapshot();
        articles.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        Ok(articles)
    }

    async fn list_top_viewed(&self, limit: i64) -> Result<Vec<Article>, sqlx::Error> {
        self.check()?;
        let mut articles = self.snapshot();
        articles.sort_by(|a, b| {
            b.views
                .cmp(&a.views)
                .then(b.timestamp.cmp(&a.timestamp))
        });
        articles.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(articles)
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        self.check()
    }

    async fn close(&self) {}
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
    }
}

/// Everything a test needs to drive the service and observe its effects.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryArticleStore>,
    pub ws_manager: Arc<WsManager>,
    pub news: Arc<NewsCoordinator>,
}

/// Build the full application router over an in-memory store.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app() -> TestApp {
    build_test_app_with_config(test_config())
}

pub fn build_test_app_with_config(config: ServerConfig) -> TestApp {
    let store = Arc::new(InMemoryArticleStore::new());
    let ws_manager = Arc::new(WsManager::new());
    let dyn_store: Arc<dyn ArticleStore> = store.clone();
    let news = Arc::new(NewsCoordinator::new(dyn_store, Arc::clone(&ws_manager)));

    let state = AppState {
        config: Arc::new(config),
        ws_manager: Arc::clone(&ws_manager),
        news: Arc::clone(&news),
    };

    TestApp {
        router: build_app_router(state),
        store,
        ws_manager,
        news,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw_json(app, uri, &body.to_string()).await
}

/// POST a body that is labelled JSON but need not parse as JSON.
pub async fn post_raw_json(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Broadcast helpers
// ---------------------------------------------------------------------------

/// Pop the next queued frame for a registered connection, decoded as JSON.
///
/// Broadcasts are queued before the mutating call returns, so a synchronous
/// `try_recv` is enough.
pub fn next_broadcast(rx: &mut UnboundedReceiver<Message>) -> Option<serde_json::Value> {
    match rx.try_recv().ok()? {
        Message::Text(text) => Some(serde_json::from_str(text.as_str()).unwrap()),
        other => panic!("expected a text frame, got {other:?}"),
    }
}
