//! Domain types and request-parsing rules for the movie catalog.
//!
//! This crate has no I/O. It holds the error taxonomy, the typed domain
//! values shared by the store and the HTTP layer, the filter parser and
//! the paginator.

pub mod error;
pub mod filters;
pub mod pagination;
pub mod rating;
pub mod types;
