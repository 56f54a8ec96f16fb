use std::sync::Arc;

use crate::config::ServerConfig;
use crate::coordinator::NewsCoordinator;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// WebSocket connection roster (browser clients).
    pub ws_manager: Arc<WsManager>,
    /// Article mutation coordinator and query surface.
    pub news: Arc<NewsCoordinator>,
}
