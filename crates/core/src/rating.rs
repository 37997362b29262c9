//! Typed values for movie ratings and person roles.
//!
//! Each type round-trips through the text form stored in the database and
//! serializes to the same text on the wire.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// MPA rating
// ---------------------------------------------------------------------------

/// MPA content rating code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MpaRating {
    G,
    Pg,
    Pg13,
    R,
    Nc17,
}

impl MpaRating {
    pub const ALL: [MpaRating; 5] = [
        MpaRating::G,
        MpaRating::Pg,
        MpaRating::Pg13,
        MpaRating::R,
        MpaRating::Nc17,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MpaRating::G => "G",
            MpaRating::Pg => "PG",
            MpaRating::Pg13 => "PG-13",
            MpaRating::R => "R",
            MpaRating::Nc17 => "NC-17",
        }
    }
}

impl FromStr for MpaRating {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rating| rating.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown MPA rating '{s}'")))
    }
}

impl TryFrom<String> for MpaRating {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for MpaRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MpaRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Person role
// ---------------------------------------------------------------------------

/// The primary credit a person is catalogued under.
///
/// This is descriptive only: which movie lists a person appears in is
/// decided by the per-movie director/writer/star associations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonRole {
    Director,
    Writer,
    Actor,
}

impl PersonRole {
    pub fn as_str(self) -> &'static str {
        match self {
            PersonRole::Director => "director",
            PersonRole::Writer => "writer",
            PersonRole::Actor => "actor",
        }
    }
}

impl FromStr for PersonRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "director" => Ok(PersonRole::Director),
            "writer" => Ok(PersonRole::Writer),
            "actor" => Ok(PersonRole::Actor),
            other => Err(CoreError::Validation(format!("Unknown person role '{other}'"))),
        }
    }
}

impl TryFrom<String> for PersonRole {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for PersonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PersonRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// IMDb rating
// ---------------------------------------------------------------------------

/// Largest representable rating in hundredths (`9.99`).
pub const MAX_IMDB_HUNDREDTHS: i16 = 999;

/// A `NUMERIC(3,2)` rating held as an integer number of hundredths.
///
/// Always rendered with exactly two decimal places, e.g. `7.50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImdbRating(i16);

impl ImdbRating {
    pub fn from_hundredths(hundredths: i16) -> Result<Self, CoreError> {
        if !(0..=MAX_IMDB_HUNDREDTHS).contains(&hundredths) {
            return Err(CoreError::Validation(format!(
                "IMDb rating must be between 0.00 and 9.99 (got {hundredths} hundredths)"
            )));
        }
        Ok(Self(hundredths))
    }

    pub fn hundredths(self) -> i16 {
        self.0
    }
}

impl FromStr for ImdbRating {
    type Err = CoreError;

    /// Accepts `7`, `7.5` and `7.50`; more than two fractional digits is
    /// rejected rather than rounded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::Validation(format!("Invalid IMDb rating '{s}'"));

        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

        if whole.is_empty() || whole.len() > 1 || frac.len() > 2 {
            return Err(invalid());
        }
        if !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }

        let whole: i16 = whole.parse().map_err(|_| invalid())?;
        let frac: i16 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i16>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        Self::from_hundredths(whole * 100 + frac)
    }
}

impl TryFrom<i16> for ImdbRating {
    type Error = CoreError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::from_hundredths(value)
    }
}

impl fmt::Display for ImdbRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for ImdbRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mpa_rating_round_trips_text() {
        for rating in MpaRating::ALL {
            assert_eq!(rating.as_str().parse::<MpaRating>().unwrap(), rating);
        }
    }

    #[test]
    fn mpa_rating_rejects_unknown_code() {
        assert!("PG13".parse::<MpaRating>().is_err());
        assert!("g".parse::<MpaRating>().is_err());
    }

    #[test]
    fn mpa_rating_serializes_as_code() {
        assert_eq!(serde_json::to_value(MpaRating::Nc17).unwrap(), "NC-17");
    }

    #[test]
    fn person_role_parses_lowercase_names() {
        assert_eq!("actor".parse::<PersonRole>().unwrap(), PersonRole::Actor);
        assert!("star".parse::<PersonRole>().is_err());
    }

    #[test]
    fn imdb_rating_always_has_two_decimals() {
        assert_eq!("7.5".parse::<ImdbRating>().unwrap().to_string(), "7.50");
        assert_eq!("7".parse::<ImdbRating>().unwrap().to_string(), "7.00");
        assert_eq!("0.05".parse::<ImdbRating>().unwrap().to_string(), "0.05");
        assert_eq!("9.99".parse::<ImdbRating>().unwrap().to_string(), "9.99");
    }

    #[test]
    fn imdb_rating_serializes_as_string() {
        let rating: ImdbRating = "7.5".parse().unwrap();
        assert_eq!(serde_json::to_value(rating).unwrap(), "7.50");
    }

    #[test]
    fn imdb_rating_rejects_out_of_range_and_malformed() {
        for raw in ["10", "10.0", "7.555", "-1", "", ".5", "abc", "7.a"] {
            assert!(raw.parse::<ImdbRating>().is_err(), "{raw:?}");
        }
    }

    #[test]
    fn imdb_rating_from_hundredths_bounds() {
        assert!(ImdbRating::try_from(999i16).is_ok());
        assert!(ImdbRating::try_from(1000i16).is_err());
        assert!(ImdbRating::try_from(-1i16).is_err());
    }
}
