//! Page-number pagination over a counted result set.
//!
//! The page size is fixed per process and injected at construction; clients
//! only choose the page number.

use crate::error::{CoreError, ErrorKind};

/// Default number of movies per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page used when the request carries no `page` parameter.
pub const FIRST_PAGE: i64 = 1;

/// Splits a result set of known size into fixed-size pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: i64,
}

/// The slice of the result set that a valid page request maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// The requested (1-based) page number.
    pub number: i64,
    /// Number of leading rows to skip.
    pub offset: i64,
    /// Maximum number of rows on the page.
    pub limit: i64,
    /// Size of the whole filtered result set.
    pub total: i64,
    /// Number of pages the result set spans (`0` when it is empty).
    pub pages: i64,
}

impl Paginator {
    /// Create a paginator. A page size of zero is rejected.
    pub fn new(page_size: u32) -> Result<Self, CoreError> {
        if page_size == 0 {
            return Err(CoreError::Config(
                "page size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            page_size: i64::from(page_size),
        })
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Number of pages needed for `total` rows.
    pub fn page_count(&self, total: i64) -> i64 {
        if total <= 0 {
            return 0;
        }
        (total + self.page_size - 1) / self.page_size
    }

    /// Resolve a raw `page` parameter against a result set of `total` rows.
    ///
    /// A missing parameter means the first page. The first page is always
    /// valid, even for an empty result set.
    pub fn page(&self, raw: Option<&str>, total: i64) -> Result<PageWindow, ErrorKind> {
        let number = match raw {
            None => FIRST_PAGE,
            Some(raw) => parse_page_number(raw)?,
        };

        let pages = self.page_count(total);
        if number < FIRST_PAGE || number > pages.max(FIRST_PAGE) {
            return Err(ErrorKind::PageOutOfBounds);
        }

        Ok(PageWindow {
            number,
            offset: (number - 1) * self.page_size,
            limit: self.page_size,
            total,
            pages,
        })
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_size: i64::from(DEFAULT_PAGE_SIZE),
        }
    }
}

/// Parse an integer-like page value: optional sign followed by digits,
/// surrounding whitespace ignored.
///
/// A well-formed integer too large to represent can never be in range, so
/// it maps to [`ErrorKind::PageOutOfBounds`] rather than being malformed.
fn parse_page_number(raw: &str) -> Result<i64, ErrorKind> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErrorKind::PageInvalid);
    }

    trimmed
        .parse::<i64>()
        .map_err(|_| ErrorKind::PageOutOfBounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paginator(size: u32) -> Paginator {
        Paginator::new(size).unwrap()
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(Paginator::new(0).is_err());
    }

    #[test]
    fn default_page_size() {
        assert_eq!(Paginator::default().page_size(), 10);
    }

    #[test]
    fn page_count_rounds_up() {
        let p = paginator(10);
        assert_eq!(p.page_count(0), 0);
        assert_eq!(p.page_count(1), 1);
        assert_eq!(p.page_count(10), 1);
        assert_eq!(p.page_count(11), 2);
    }

    #[test]
    fn missing_page_means_first() {
        let window = paginator(10).page(None, 25).unwrap();
        assert_eq!(window.number, 1);
        assert_eq!(window.offset, 0);
        assert_eq!(window.limit, 10);
        assert_eq!(window.pages, 3);
    }

    #[test]
    fn last_page_offset() {
        let window = paginator(10).page(Some("3"), 25).unwrap();
        assert_eq!(window.offset, 20);
        assert_eq!(window.total, 25);
    }

    #[test]
    fn page_past_end_is_out_of_bounds() {
        assert_eq!(
            paginator(10).page(Some("5"), 2),
            Err(ErrorKind::PageOutOfBounds)
        );
    }

    #[test]
    fn zero_and_negative_pages_are_out_of_bounds() {
        let p = paginator(10);
        assert_eq!(p.page(Some("0"), 5), Err(ErrorKind::PageOutOfBounds));
        assert_eq!(p.page(Some("-1"), 5), Err(ErrorKind::PageOutOfBounds));
    }

    #[test]
    fn non_integer_pages_are_invalid() {
        let p = paginator(10);
        for raw in ["tests", "", " ", "2.0", "1e3", "+", "0x1", "1 2"] {
            assert_eq!(p.page(Some(raw), 5), Err(ErrorKind::PageInvalid), "{raw:?}");
        }
    }

    #[test]
    fn sign_and_whitespace_are_accepted() {
        let p = paginator(10);
        assert_eq!(p.page(Some(" 1 "), 5).unwrap().number, 1);
        assert_eq!(p.page(Some("+2"), 15).unwrap().number, 2);
    }

    #[test]
    fn huge_integer_is_out_of_bounds_not_invalid() {
        assert_eq!(
            paginator(10).page(Some("99999999999999999999999"), 5),
            Err(ErrorKind::PageOutOfBounds)
        );
    }

    #[test]
    fn empty_result_set_allows_only_first_page() {
        let p = paginator(10);
        let window = p.page(Some("1"), 0).unwrap();
        assert_eq!(window.pages, 0);
        assert_eq!(window.offset, 0);
        assert_eq!(p.page(Some("2"), 0), Err(ErrorKind::PageOutOfBounds));
    }

    #[test]
    fn pages_tile_the_result_set() {
        for size in 1..=4u32 {
            let p = paginator(size);
            for total in 0..=13i64 {
                let mut covered = Vec::new();
                for number in 1..=p.page_count(total) {
                    let w = p.page(Some(&number.to_string()), total).unwrap();
                    assert!(w.limit <= i64::from(size));
                    let end = (w.offset + w.limit).min(total);
                    covered.extend(w.offset..end);
                }
                assert_eq!(covered, (0..total).collect::<Vec<_>>());
            }
        }
    }
}
