//! Newsroom API server library.
//!
//! Exposes the building blocks (config, state, error handling, the mutation
//! coordinator, routes, WebSocket infrastructure) so integration tests and
//! the binary entrypoint can both access them.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
pub mod ws;
