//! Newsroom domain primitives.
//!
//! Zero internal deps: shared types, the domain error enum, and the news
//! constants used by both the repository layer and the API server.

pub mod error;
pub mod news;
pub mod types;
pub mod validation;
