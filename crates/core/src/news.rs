//! News article constants shared by the store, the HTTP surface and the
//! real-time channel.

// ---------------------------------------------------------------------------
// Entity naming
// ---------------------------------------------------------------------------

/// Entity name used in not-found errors.
pub const ENTITY_NEWS: &str = "News";

// ---------------------------------------------------------------------------
// Query limits
// ---------------------------------------------------------------------------

/// Number of articles returned by the trending endpoint.
pub const TRENDING_LIMIT: i64 = 5;

// ---------------------------------------------------------------------------
// Channel event names
// ---------------------------------------------------------------------------

/// Client-to-server event carrying a new article payload.
pub const EVENT_NEW_ARTICLE: &str = "new-article";

/// Server-to-all event carrying the canonical stored article.
pub const EVENT_NEWS_UPDATE: &str = "news-update";

// ---------------------------------------------------------------------------
// Client-facing messages
// ---------------------------------------------------------------------------

/// Plain-text body of the root liveness route.
pub const LIVENESS_MESSAGE: &str = "News API is running...";

pub const MSG_LIST_FAILED: &str = "Failed to fetch news";
pub const MSG_CREATE_FAILED: &str = "Failed to add news";
pub const MSG_TRENDING_FAILED: &str = "Failed to fetch trending news";
pub const MSG_LIKE_FAILED: &str = "Failed to like news";

/// Body rejected before it could be read as an article.
pub const MSG_INVALID_ARTICLE_BODY: &str = "Invalid article payload";
