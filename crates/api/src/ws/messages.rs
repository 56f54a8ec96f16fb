//! JSON framing for the real-time channel.
//!
//! Every text frame is an object of the form `{"event": <name>, "data": ..}`.
//! Clients send `new-article`; the server broadcasts `news-update`.

use axum::extract::ws::Message;
use newsroom_core::news::{EVENT_NEWS_UPDATE, EVENT_NEW_ARTICLE};
use newsroom_db::models::article::{Article, CreateArticle};
use serde::Deserialize;

/// Raw inbound frame before the payload is interpreted.
#[derive(Debug, Deserialize)]
struct InboundFrame {
    event: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// A decoded client-to-server event.
#[derive(Debug)]
pub enum InboundEvent {
    NewArticle(CreateArticle),
}

/// Why an inbound text frame could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("Invalid JSON frame: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    #[error("Invalid payload for {event}: {source}")]
    InvalidPayload {
        event: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode a client text frame.
pub fn parse_inbound(text: &str) -> Result<InboundEvent, FrameError> {
    let frame: InboundFrame = serde_json::from_str(text).map_err(FrameError::InvalidJson)?;

    match frame.event.as_str() {
        EVENT_NEW_ARTICLE => serde_json::from_value(frame.data)
            .map(InboundEvent::NewArticle)
            .map_err(|source| FrameError::InvalidPayload {
                event: EVENT_NEW_ARTICLE,
                source,
            }),
        _ => Err(FrameError::UnknownEvent(frame.event)),
    }
}

/// Build the `news-update` frame carrying a stored article.
pub fn news_update_message(article: &Article) -> Result<Message, serde_json::Error> {
    let payload = serde_json::json!({
        "event": EVENT_NEWS_UPDATE,
        "data": serde_json::to_value(article)?,
    });
    Ok(Message::Text(payload.to_string().into()))
}
