//! Parsing rules for the movie list filters (`genre_id`, `src`).
//!
//! Only the syntactic half of `genre_id` validation lives here; whether the
//! id names an existing genre is checked against the store by the caller.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ErrorKind;
use crate::types::DbId;

/// Minimum length of a trimmed search phrase.
pub const MIN_SEARCH_LENGTH: usize = 2;

/// Maximum length of a trimmed search phrase.
pub const MAX_SEARCH_LENGTH: usize = 20;

static GENRE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));

/// Letters, digits, space and `! ? : ; , .` only.
static SEARCH_PHRASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 !?:;,.]+$").expect("valid regex"));

/// Treat a missing or empty query value as "no filter".
pub fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}

/// Parse the first comma-separated token of a `genre_id` value.
///
/// The remaining tokens are ignored. The token must be plain ASCII digits;
/// a digit string too large for [`DbId`] cannot name a genre and is
/// rejected the same way.
pub fn parse_genre_token(raw: &str) -> Result<DbId, ErrorKind> {
    let token = raw.split(',').next().unwrap_or_default();

    if !GENRE_TOKEN_RE.is_match(token) {
        return Err(ErrorKind::GenreInvalid);
    }

    token.parse::<DbId>().map_err(|_| ErrorKind::GenreInvalid)
}

/// A validated title-prefix search phrase.
///
/// Matching against titles is case-insensitive; the phrase keeps the casing
/// it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPhrase(String);

impl SearchPhrase {
    /// Trim and validate a raw `src` value.
    pub fn parse(raw: &str) -> Result<Self, ErrorKind> {
        let phrase = raw.trim();
        let len = phrase.chars().count();

        if !(MIN_SEARCH_LENGTH..=MAX_SEARCH_LENGTH).contains(&len) {
            return Err(ErrorKind::SrcInvalid);
        }
        if !SEARCH_PHRASE_RE.is_match(phrase) {
            return Err(ErrorKind::SrcInvalid);
        }

        Ok(Self(phrase.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `title` starts with this phrase, ignoring case.
    pub fn is_prefix_of(&self, title: &str) -> bool {
        title.to_lowercase().starts_with(&self.0.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- parse_genre_token ---------------------------------------------------

    #[test]
    fn genre_takes_first_token_only() {
        assert_eq!(parse_genre_token("1,2"), Ok(1));
        assert_eq!(parse_genre_token("42,abc,1.5"), Ok(42));
    }

    #[test]
    fn genre_single_token() {
        assert_eq!(parse_genre_token("7"), Ok(7));
    }

    #[test]
    fn genre_rejects_decimal_point() {
        assert_eq!(parse_genre_token("1.6,2"), Err(ErrorKind::GenreInvalid));
    }

    #[test]
    fn genre_rejects_words() {
        assert_eq!(parse_genre_token("tests,2"), Err(ErrorKind::GenreInvalid));
    }

    #[test]
    fn genre_rejects_sign_and_whitespace() {
        assert_eq!(parse_genre_token("-1"), Err(ErrorKind::GenreInvalid));
        assert_eq!(parse_genre_token("+1"), Err(ErrorKind::GenreInvalid));
        assert_eq!(parse_genre_token(" 1"), Err(ErrorKind::GenreInvalid));
        assert_eq!(parse_genre_token("1 ,2"), Err(ErrorKind::GenreInvalid));
    }

    #[test]
    fn genre_rejects_empty_first_token() {
        assert_eq!(parse_genre_token(",2"), Err(ErrorKind::GenreInvalid));
    }

    #[test]
    fn genre_rejects_overflowing_id() {
        assert_eq!(
            parse_genre_token("99999999999999999999999"),
            Err(ErrorKind::GenreInvalid)
        );
    }

    // -- SearchPhrase --------------------------------------------------------

    #[test]
    fn phrase_too_short() {
        assert_eq!(SearchPhrase::parse("s"), Err(ErrorKind::SrcInvalid));
    }

    #[test]
    fn phrase_too_long() {
        assert_eq!(
            SearchPhrase::parse("very long string which has more than"),
            Err(ErrorKind::SrcInvalid)
        );
        assert_eq!(
            SearchPhrase::parse(&"a".repeat(21)),
            Err(ErrorKind::SrcInvalid)
        );
    }

    #[test]
    fn phrase_length_bounds_are_inclusive() {
        assert!(SearchPhrase::parse("ab").is_ok());
        assert!(SearchPhrase::parse(&"a".repeat(20)).is_ok());
    }

    #[test]
    fn phrase_is_trimmed_before_length_check() {
        assert_eq!(SearchPhrase::parse("   a   "), Err(ErrorKind::SrcInvalid));
        assert_eq!(SearchPhrase::parse("  test  ").unwrap().as_str(), "test");
    }

    #[test]
    fn phrase_whitespace_only_is_invalid() {
        assert_eq!(SearchPhrase::parse("     "), Err(ErrorKind::SrcInvalid));
    }

    #[test]
    fn phrase_allows_punctuation_set() {
        assert!(SearchPhrase::parse("Who? Me: yes; ok.!").is_ok());
        assert!(SearchPhrase::parse("Up, up, away").is_ok());
    }

    #[test]
    fn phrase_rejects_other_characters() {
        assert_eq!(
            SearchPhrase::parse("very_long"),
            Err(ErrorKind::SrcInvalid)
        );
        assert_eq!(SearchPhrase::parse("50%"), Err(ErrorKind::SrcInvalid));
        assert_eq!(SearchPhrase::parse("it's"), Err(ErrorKind::SrcInvalid));
    }

    #[test]
    fn phrase_accepts_any_case() {
        assert!(SearchPhrase::parse("TEST").is_ok());
        assert!(SearchPhrase::parse("tEsT").is_ok());
    }

    #[test]
    fn prefix_match_ignores_case() {
        let phrase = SearchPhrase::parse("test").unwrap();
        assert!(phrase.is_prefix_of("TestTitle"));
        assert!(!phrase.is_prefix_of("TitleTest"));
    }

    // -- non_empty -----------------------------------------------------------

    #[test]
    fn empty_value_is_absent() {
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(" ")), Some(" "));
    }
}
