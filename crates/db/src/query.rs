//! The filtered movie query.
//!
//! Both filters are exclusions: a genre filter drops movies tagged with
//! that genre, and a search phrase drops movies whose title starts with it.
//! Filters combine with AND. Each store evaluates the same [`MovieQuery`];
//! PostgreSQL renders it with [`MovieQuery::where_clause`] and the
//! in-process store with [`MovieQuery::matches`].

use catalog_core::filters::SearchPhrase;
use catalog_core::types::DbId;

/// Ordering applied to every movie listing.
pub const MOVIE_ORDER_BY: &str = "ORDER BY m.created_at DESC, m.id ASC";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieQuery {
    excluded_genre: Option<DbId>,
    excluded_title_prefix: Option<SearchPhrase>,
}

impl MovieQuery {
    /// Every movie.
    pub fn all() -> Self {
        Self::default()
    }

    /// Drop movies whose genre set contains `genre_id`.
    pub fn excluding_genre(mut self, genre_id: DbId) -> Self {
        self.excluded_genre = Some(genre_id);
        self
    }

    /// Drop movies whose title starts with `phrase`, ignoring case.
    pub fn excluding_title_prefix(mut self, phrase: SearchPhrase) -> Self {
        self.excluded_title_prefix = Some(phrase);
        self
    }

    pub fn excluded_genre(&self) -> Option<DbId> {
        self.excluded_genre
    }

    pub fn excluded_title_prefix(&self) -> Option<&SearchPhrase> {
        self.excluded_title_prefix.as_ref()
    }

    /// Whether a movie with this title and genre set survives the filters.
    pub fn matches(&self, title: &str, genre_ids: &[DbId]) -> bool {
        if let Some(genre_id) = self.excluded_genre {
            if genre_ids.contains(&genre_id) {
                return false;
            }
        }
        if let Some(phrase) = &self.excluded_title_prefix {
            if phrase.is_prefix_of(title) {
                return false;
            }
        }
        true
    }

    /// Render the filters as a SQL `WHERE` clause over `movies m`.
    ///
    /// Placeholders start at `$first_bind`; returns the clause and the next
    /// free placeholder index. Bind values with [`MovieQuery::excluded_genre`]
    /// then [`MovieQuery::excluded_title_prefix`], skipping absent ones.
    pub fn where_clause(&self, first_bind: u32) -> (String, u32) {
        let mut conditions = Vec::new();
        let mut bind_idx = first_bind;

        if self.excluded_genre.is_some() {
            conditions.push(format!(
                "NOT EXISTS (SELECT 1 FROM movie_genres mg \
                 WHERE mg.movie_id = m.id AND mg.genre_id = ${bind_idx})"
            ));
            bind_idx += 1;
        }
        if self.excluded_title_prefix.is_some() {
            conditions.push(format!(
                "NOT starts_with(lower(m.title), lower(${bind_idx}))"
            ));
            bind_idx += 1;
        }

        let clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        (clause, bind_idx)
    }
}
