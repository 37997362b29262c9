use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalog_core::error::ErrorKind;
use catalog_db::StoreError;

use crate::response::ErrorResponse;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as `{"error": [kind]}` with HTTP 200; clients read
/// the outcome from the body, not the status line.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request was understood and refused with a specific kind.
    #[error("Request rejected: {0}")]
    Rejected(#[from] ErrorKind),

    /// The catalog store failed. Reported to clients as `internal`.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// The kind reported to the client.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Rejected(kind) => *kind,
            AppError::Store(_) => ErrorKind::Internal,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Rejected(kind) => tracing::debug!(%kind, "Request rejected"),
            AppError::Store(err) => tracing::error!(error = %err, "Catalog store error"),
        }

        (StatusCode::OK, Json(ErrorResponse::new(self.kind()))).into_response()
    }
}
