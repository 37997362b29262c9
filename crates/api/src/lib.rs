//! Movie catalog API server library.
//!
//! Exposes the building blocks (config, state, error handling, projection,
//! routes) so integration tests and the binary entrypoint share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod projection;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
