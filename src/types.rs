use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, DAYS_OF_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::num::NonZeroU16;
use std::str::FromStr;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month-of-year value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MonthOfYear(NonZeroU8);

impl MonthOfYear {
    /// Creates a new MonthOfYear, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for MonthOfYear {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MonthOfYear> for u8 {
    fn from(month: MonthOfYear) -> Self {
        month.0.get()
    }
}

impl fmt::Display for MonthOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identity of one calendar month: a year paired with a month of that year.
///
/// Months are totally ordered chronologically. Stepping to an adjacent month is
/// calendar arithmetic and lives on the [`Calendar`](crate::Calendar) trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
pub struct Month {
    year:  Year,
    month: MonthOfYear,
}

impl Month {
    /// Creates a new Month from raw year and month-of-year numbers.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` or `ParseError::InvalidMonth` if either
    /// component is out of range.
    pub fn new(year: u16, month: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: MonthOfYear::new(month)?,
        })
    }

    /// Creates a Month from already-validated components
    pub const fn from_parts(year: Year, month: MonthOfYear) -> Self {
        Self { year, month }
    }

    /// Returns the year component
    #[inline]
    pub const fn year(self) -> Year {
        self.year
    }

    /// Returns the month-of-year component
    #[inline]
    pub const fn month_of_year(self) -> MonthOfYear {
        self.month
    }
}

impl FromStr for Month {
    type Err = ParseError;

    /// Parses the ISO form `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 2 {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }
        let year = parse_u16(parts[0])?;
        let month = parse_u8(parts[1])?;
        Self::new(year, month)
    }
}

impl Serialize for Month {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One calendar day: a [`Month`] plus a day-of-month ordinal.
///
/// The ordinal is validated against the month's length, leap years included, so
/// a `Day` always names a date that exists. Days are totally ordered
/// chronologically and every day belongs to exactly one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{:02}", "month", "day")]
pub struct Day {
    month: Month,
    day:   NonZeroU8,
}

impl Day {
    /// Creates a new Day, validating the ordinal against the month's length.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the ordinal is 0 or past the end of
    /// the month.
    pub fn new(month: Month, day: u8) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            month: month.month_of_year().get(),
            day,
            year: month.year().get(),
        };
        let non_zero = NonZeroU8::new(day).ok_or(invalid.clone())?;
        if day > days_in_month(month.year().get(), month.month_of_year().get()) {
            return Err(invalid);
        }
        Ok(Self {
            month,
            day: non_zero,
        })
    }

    /// Returns the month this day belongs to
    #[inline]
    pub const fn month(self) -> Month {
        self.month
    }

    /// Returns the day-of-month ordinal as u8
    #[inline]
    pub const fn day_of_month(self) -> u8 {
        self.day.get()
    }
}

impl FromStr for Day {
    type Err = ParseError;

    /// Parses the ISO form `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }
        let year = parse_u16(parts[0])?;
        let month = parse_u8(parts[1])?;
        let day = parse_u8(parts[2])?;
        Self::new(Month::new(year, month)?, day)
    }
}

impl Serialize for Day {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The ordinal of a weekday-header slot within a month, in the range
/// `1..=DAYS_OF_WEEK` (1..=7).
///
/// Position 1 has no predecessor and position 7 has no successor; the stepping
/// methods return `None` at the ends rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfWeekPosition(NonZeroU8);

impl DayOfWeekPosition {
    /// The first weekday-header slot of a month
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// The last weekday-header slot of a month
    pub const LAST: Self = match NonZeroU8::new(DAYS_OF_WEEK) {
        Some(value) => Self(value),
        None => unreachable!(),
    };

    /// Creates a new DayOfWeekPosition, validating the range `1..=DAYS_OF_WEEK`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDayOfWeekPosition` if the value is 0 or > 7.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero =
            NonZeroU8::new(value).ok_or(ParseError::InvalidDayOfWeekPosition(value))?;
        if value > DAYS_OF_WEEK {
            return Err(ParseError::InvalidDayOfWeekPosition(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the position as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Whether this is the first position of a month
    #[inline]
    pub const fn is_first(self) -> bool {
        self.0.get() == Self::FIRST.0.get()
    }

    /// Whether this is the last position of a month
    #[inline]
    pub const fn is_last(self) -> bool {
        self.0.get() == DAYS_OF_WEEK
    }

    /// The position one slot earlier, or `None` for the first position
    pub fn try_predecessor(self) -> Option<Self> {
        NonZeroU8::new(self.0.get() - 1).map(Self)
    }

    /// The position one slot later, or `None` for the last position
    pub fn try_successor(self) -> Option<Self> {
        if self.is_last() {
            None
        } else {
            NonZeroU8::new(self.0.get() + 1).map(Self)
        }
    }
}

impl TryFrom<u8> for DayOfWeekPosition {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayOfWeekPosition> for u8 {
    fn from(position: DayOfWeekPosition) -> Self {
        position.0.get()
    }
}

impl fmt::Display for DayOfWeekPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Helper to parse u16 with better error messages
fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(2000).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(
            Year::new(10000),
            Err(ParseError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_month_of_year_new_valid() {
        for m in 1..=12 {
            assert!(MonthOfYear::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_of_year_new_invalid() {
        assert!(matches!(
            MonthOfYear::new(0),
            Err(ParseError::InvalidMonth(0))
        ));
        assert!(matches!(
            MonthOfYear::new(13),
            Err(ParseError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_month_accessors_and_display() {
        let month = Month::new(2024, 3).unwrap();
        assert_eq!(month.year().get(), 2024);
        assert_eq!(month.month_of_year().get(), 3);
        assert_eq!(month.to_string(), "2024-03");
    }

    #[test]
    fn test_month_ordering() {
        let jan = Month::new(2024, 1).unwrap();
        let feb = Month::new(2024, 2).unwrap();
        let dec_prev = Month::new(2023, 12).unwrap();
        assert!(jan < feb);
        assert!(dec_prev < jan);
        assert_eq!(jan, jan);
    }

    #[test]
    fn test_month_from_str() {
        let month = "2024-03".parse::<Month>().unwrap();
        assert_eq!(month, Month::new(2024, 3).unwrap());

        assert!("2024".parse::<Month>().is_err());
        assert!("2024-03-15".parse::<Month>().is_err());
        assert!("2024-13".parse::<Month>().is_err());
        assert!("".parse::<Month>().is_err());
        assert!("20XX-03".parse::<Month>().is_err());
    }

    #[test]
    fn test_month_serde_string_format() {
        let month = Month::new(2024, 3).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, r#""2024-03""#);

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);

        let result: Result<Month, _> = serde_json::from_str(r#""2024-13""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_day_new_valid() {
        // January - 31 days
        assert!(Day::new(Month::new(2024, 1).unwrap(), 1).is_ok());
        assert!(Day::new(Month::new(2024, 1).unwrap(), 31).is_ok());

        // February non-leap - 28 days
        assert!(Day::new(Month::new(2023, 2).unwrap(), 28).is_ok());
        assert!(Day::new(Month::new(2023, 2).unwrap(), 29).is_err());

        // February leap year - 29 days
        assert!(Day::new(Month::new(2024, 2).unwrap(), 29).is_ok());
        assert!(Day::new(Month::new(2024, 2).unwrap(), 30).is_err());

        // April - 30 days
        assert!(Day::new(Month::new(2024, 4).unwrap(), 30).is_ok());
        assert!(Day::new(Month::new(2024, 4).unwrap(), 31).is_err());
    }

    #[test]
    fn test_day_new_invalid_zero() {
        let result = Day::new(Month::new(2024, 1).unwrap(), 0);
        assert!(matches!(result, Err(ParseError::InvalidDay { .. })));
    }

    #[test]
    fn test_day_accessors_and_display() {
        let day = Day::new(Month::new(2024, 8).unwrap(), 15).unwrap();
        assert_eq!(day.month(), Month::new(2024, 8).unwrap());
        assert_eq!(day.day_of_month(), 15);
        assert_eq!(day.to_string(), "2024-08-15");
    }

    #[test]
    fn test_day_ordering_across_months() {
        let jan31 = Day::new(Month::new(2024, 1).unwrap(), 31).unwrap();
        let feb01 = Day::new(Month::new(2024, 2).unwrap(), 1).unwrap();
        let dec31_prev = Day::new(Month::new(2023, 12).unwrap(), 31).unwrap();
        assert!(jan31 < feb01);
        assert!(dec31_prev < jan31);
    }

    #[test]
    fn test_day_from_str() {
        let day = "2024-08-15".parse::<Day>().unwrap();
        assert_eq!(day, Day::new(Month::new(2024, 8).unwrap(), 15).unwrap());

        assert!("2024-08".parse::<Day>().is_err());
        assert!("2024-02-30".parse::<Day>().is_err());
        assert!("".parse::<Day>().is_err());
    }

    #[test]
    fn test_day_serde_string_format() {
        let day = Day::new(Month::new(2024, 8).unwrap(), 15).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, r#""2024-08-15""#);

        let parsed: Day = serde_json::from_str(&json).unwrap();
        assert_eq!(day, parsed);

        let result: Result<Day, _> = serde_json::from_str(r#""2024-02-30""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_day_of_week_position_bounds() {
        assert!(DayOfWeekPosition::new(0).is_err());
        for p in 1..=7 {
            assert!(DayOfWeekPosition::new(p).is_ok(), "Position {p} valid");
        }
        assert!(matches!(
            DayOfWeekPosition::new(8),
            Err(ParseError::InvalidDayOfWeekPosition(8))
        ));
    }

    #[test]
    fn test_day_of_week_position_first_last() {
        assert_eq!(DayOfWeekPosition::FIRST.get(), 1);
        assert_eq!(DayOfWeekPosition::LAST.get(), 7);
        assert!(DayOfWeekPosition::FIRST.is_first());
        assert!(!DayOfWeekPosition::FIRST.is_last());
        assert!(DayOfWeekPosition::LAST.is_last());
        assert!(!DayOfWeekPosition::LAST.is_first());
    }

    #[test]
    fn test_day_of_week_position_stepping() {
        let first = DayOfWeekPosition::FIRST;
        let last = DayOfWeekPosition::LAST;

        assert_eq!(first.try_predecessor(), None);
        assert_eq!(last.try_successor(), None);

        let second = first.try_successor().unwrap();
        assert_eq!(second.get(), 2);
        assert_eq!(second.try_predecessor().unwrap(), first);

        // Walk the whole ordinal range in both directions
        let mut position = first;
        for expected in 2..=7 {
            position = position.try_successor().unwrap();
            assert_eq!(position.get(), expected);
        }
        for expected in (1..=6).rev() {
            position = position.try_predecessor().unwrap();
            assert_eq!(position.get(), expected);
        }
    }

    #[test]
    fn test_day_of_week_position_serde() {
        let position = DayOfWeekPosition::new(3).unwrap();
        let json = serde_json::to_string(&position).unwrap();
        assert_eq!(json, "3");

        let parsed: DayOfWeekPosition = serde_json::from_str(&json).unwrap();
        assert_eq!(position, parsed);

        let result: Result<DayOfWeekPosition, _> = serde_json::from_str("8");
        assert!(result.is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u16,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2020,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_days_in_month_table() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29, "Century year divisible by 400");
        assert_eq!(days_in_month(1900, 2), 28, "Century year not divisible by 400");
    }
}
