use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Day, Month, ParseError, consts::RANGE_SEPARATOR, prelude::*};

/// Error type for range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Lower bound is after upper bound.
    #[error("Invalid month range: lower ({lower}) is after upper ({upper})")]
    InvalidMonthRange { lower: Month, upper: Month },

    /// Lower bound is after upper bound.
    #[error("Invalid day range: lower ({lower}) is after upper ({upper})")]
    InvalidDayRange { lower: Day, upper: Day },

    /// Error parsing a bound.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

/// A closed, non-empty range of eligible [`Month`]s (both bounds inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{lower}/{upper}")]
pub struct MonthRange {
    lower: Month,
    upper: Month,
}

impl MonthRange {
    /// Creates a new month range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidMonthRange` if lower > upper.
    pub fn new(lower: Month, upper: Month) -> Result<Self, RangeError> {
        if lower > upper {
            return Err(RangeError::InvalidMonthRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Returns the earliest eligible month
    pub const fn lower_bound(&self) -> Month {
        self.lower
    }

    /// Returns the latest eligible month
    pub const fn upper_bound(&self) -> Month {
        self.upper
    }

    /// Inclusive membership test
    pub fn contains(&self, month: Month) -> bool {
        self.lower <= month && month <= self.upper
    }
}

impl FromStr for MonthRange {
    type Err = RangeError;

    /// Parses the form `YYYY-MM/YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lower, upper) = split_range(s)?;
        Self::new(lower.parse::<Month>()?, upper.parse::<Month>()?)
    }
}

impl PartialOrd for MonthRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MonthRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare lower bounds first, then upper bounds
        match self.lower.cmp(&other.lower) {
            Ordering::Equal => self.upper.cmp(&other.upper),
            ord => ord,
        }
    }
}

impl Serialize for MonthRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MonthRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A closed, non-empty range of eligible [`Day`]s (both bounds inclusive).
///
/// The bounds need not align to month boundaries; a range may start or end in
/// the middle of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{lower}/{upper}")]
pub struct DayRange {
    lower: Day,
    upper: Day,
}

impl DayRange {
    /// Creates a new day range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidDayRange` if lower > upper.
    pub fn new(lower: Day, upper: Day) -> Result<Self, RangeError> {
        if lower > upper {
            return Err(RangeError::InvalidDayRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Returns the earliest eligible day
    pub const fn lower_bound(&self) -> Day {
        self.lower
    }

    /// Returns the latest eligible day
    pub const fn upper_bound(&self) -> Day {
        self.upper
    }

    /// Inclusive membership test
    pub fn contains(&self, day: Day) -> bool {
        self.lower <= day && day <= self.upper
    }
}

impl FromStr for DayRange {
    type Err = RangeError;

    /// Parses the form `YYYY-MM-DD/YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lower, upper) = split_range(s)?;
        Self::new(lower.parse::<Day>()?, upper.parse::<Day>()?)
    }
}

impl PartialOrd for DayRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DayRange {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.lower.cmp(&other.lower) {
            Ordering::Equal => self.upper.cmp(&other.upper),
            ord => ord,
        }
    }
}

impl Serialize for DayRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DayRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Splits `lower/upper` on the single range separator.
fn split_range(s: &str) -> Result<(&str, &str), RangeError> {
    let trimmed = s.trim();
    let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

    match separator_count {
        0 => Err(RangeError::InvalidFormat(format!(
            "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
        ))),
        1 => {
            let pos = trimmed.find(RANGE_SEPARATOR).ok_or_else(|| {
                RangeError::InvalidFormat(format!(
                    "Separator '{RANGE_SEPARATOR}' not found despite count == 1"
                ))
            })?;
            Ok((trimmed[..pos].trim(), trimmed[pos + 1..].trim()))
        },
        _ => Err(RangeError::InvalidFormat(format!(
            "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
        ))),
    }
}
