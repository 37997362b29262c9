//! Query parameter types for the catalog handlers.

/// Raw query parameters for `GET /movies/`.
///
/// Values are kept as strings; validation happens in the handler in a
/// fixed order so the first failing filter decides the error kind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MovieListParams {
    pub genre_id: Option<String>,
    pub src: Option<String>,
    pub page: Option<String>,
}

impl MovieListParams {
    /// Collect parameters from decoded query pairs.
    ///
    /// A repeated key keeps its last value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "genre_id" => params.genre_id = Some(value),
                "src" => params.src = Some(value),
                "page" => params.page = Some(value),
                _ => {}
            }
        }
        params
    }
}
