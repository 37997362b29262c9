//! Response envelope types for the catalog endpoints.
//!
//! Successful listings use [`PageResponse`]; every failure uses
//! [`ErrorResponse`]. Both are sent with HTTP 200.

use catalog_core::error::ErrorKind;
use serde::Serialize;

/// `{"error": [kind]}` envelope. Always exactly one kind.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: [ErrorKind; 1],
}

impl ErrorResponse {
    pub fn new(kind: ErrorKind) -> Self {
        Self { error: [kind] }
    }
}

/// `{"pages", "total", "results"}` envelope for `/movies/`.
///
/// `pages` carries the requested page number, not the page count. Clients
/// depend on this field name, so it stays as is.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub pages: i64,
    pub total: i64,
    pub results: Vec<T>,
}
