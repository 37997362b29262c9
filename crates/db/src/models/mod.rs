//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus the insert DTO used by data-loading tooling.

pub mod genre;
pub mod movie;
pub mod person;
