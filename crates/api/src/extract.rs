//! Request extractors whose rejections are [`AppError`] JSON responses.
//!
//! axum's stock `Path` and `Json` rejections answer in plain text and echo
//! parser output; these wrappers keep every failure on the `{ "error", "code" }`
//! contract.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use newsroom_core::error::CoreError;
use newsroom_core::news::{ENTITY_NEWS, MSG_INVALID_ARTICLE_BODY};
use newsroom_core::types::DbId;
use newsroom_db::models::article::CreateArticle;

use crate::error::AppError;

/// Article id taken from the `{id}` path segment.
///
/// Ids are opaque to clients: a segment that is not an integer cannot name a
/// stored article and is reported as not found.
#[derive(Debug, Clone, Copy)]
pub struct ArticleId(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for ArticleId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            Err(rejection) => rejection.body_text(),
        };

        match raw.parse::<DbId>() {
            Ok(id) => Ok(ArticleId(id)),
            Err(_) => Err(AppError::Core(CoreError::MalformedId {
                entity: ENTITY_NEWS,
                raw,
            })),
        }
    }
}

/// JSON body of a create request.
///
/// Syntax errors, missing fields and wrong content types all become a 400
/// `VALIDATION_ERROR`; the deserializer's message is only logged.
#[derive(Debug)]
pub struct ArticleBody(pub CreateArticle);

impl<S: Send + Sync> FromRequest<S> for ArticleBody {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<CreateArticle>::from_request(req, state).await {
            Ok(Json(input)) => Ok(ArticleBody(input)),
            Err(rejection) => {
                tracing::debug!(
                    status = %rejection.status(),
                    detail = %rejection.body_text(),
                    "Rejected article body",
                );
                Err(AppError::Core(CoreError::Validation(
                    MSG_INVALID_ARTICLE_BODY.to_string(),
                )))
            }
        }
    }
}
