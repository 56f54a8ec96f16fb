use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A path identifier that cannot name any stored record.
    #[error("Entity not found: {entity} with malformed id '{raw}'")]
    MalformedId { entity: &'static str, raw: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}
