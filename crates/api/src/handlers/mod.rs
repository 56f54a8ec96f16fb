//! Request handlers.
//!
//! Handlers delegate to the [`NewsCoordinator`](crate::coordinator::NewsCoordinator)
//! and map failures via [`AppError`](crate::error::AppError).

pub mod news;
