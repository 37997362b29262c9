use serde::Serialize;

/// Flat error kinds returned to API clients inside `{"error": [kind]}`.
///
/// The serialized form is the wire string (e.g. `genre__invalid`), which
/// clients match on. Never rename a variant's string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    #[serde(rename = "genre__invalid")]
    GenreInvalid,
    #[serde(rename = "src__invalid")]
    SrcInvalid,
    #[serde(rename = "page__invalid")]
    PageInvalid,
    #[serde(rename = "page__out_of_bounds")]
    PageOutOfBounds,
    #[serde(rename = "movie__not_found")]
    MovieNotFound,
    #[serde(rename = "internal")]
    Internal,
}

impl ErrorKind {
    /// The wire string for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::GenreInvalid => "genre__invalid",
            ErrorKind::SrcInvalid => "src__invalid",
            ErrorKind::PageInvalid => "page__invalid",
            ErrorKind::PageOutOfBounds => "page__out_of_bounds",
            ErrorKind::MovieNotFound => "movie__not_found",
            ErrorKind::Internal => "internal",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for ErrorKind {}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
