//! The date-arithmetic capability the enumerator is built on.

use crate::consts::{MAX_MONTH, MIN_DAY};
use crate::types::{Day, Month, days_in_month};

/// Date arithmetic consumed by [`ItemTypeEnumerator`](crate::ItemTypeEnumerator).
///
/// Implementations must be deterministic, side-effect-free, and consistent:
/// offsetting by `+n` then `-n` is the identity. Queries take `&self` only, so
/// any implementation without interior mutability is safe to share across
/// concurrent enumerations.
pub trait Calendar {
    /// The month `by` calendar-month steps away from `month` (negative steps
    /// go backward).
    fn month_offset(&self, month: Month, by: i32) -> Month;

    /// The day `by` days away from `day` (negative steps go backward). Month
    /// and year boundaries are crossed as needed.
    fn day_offset(&self, day: Day, by: i32) -> Day;

    /// The first day of `month`.
    fn first_day_of_month(&self, month: Month) -> Day;

    /// The last day of `month`, leap years honored.
    fn last_day_of_month(&self, month: Month) -> Day;
}

/// Proleptic-Gregorian implementation of [`Calendar`] over the supported year
/// span `1..=9999`.
///
/// Arithmetic that would leave that span panics: the operations are total for
/// any in-range input, and the enumerator only ever steps one slot past its
/// configured ranges, so keeping ranges away from the very first and last
/// representable months keeps every computation in bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GregorianCalendar;

impl Calendar for GregorianCalendar {
    fn month_offset(&self, month: Month, by: i32) -> Month {
        let months = i32::from(MAX_MONTH);
        let zero_based = i32::from(month.year().get()) * months
            + i32::from(month.month_of_year().get())
            - 1
            + by;
        let year = u16::try_from(zero_based.div_euclid(months)).unwrap_or_else(|_| {
            panic!("month arithmetic left the supported year span: {month} offset by {by}")
        });
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let month_of_year = (zero_based.rem_euclid(months) + 1) as u8;
        Month::new(year, month_of_year).unwrap_or_else(|err| {
            panic!("month arithmetic left the supported year span: {err}")
        })
    }

    fn day_offset(&self, day: Day, by: i32) -> Day {
        let mut month = day.month();
        let mut ordinal = i32::from(day.day_of_month()) + by;
        loop {
            if ordinal < i32::from(MIN_DAY) {
                month = self.month_offset(month, -1);
                ordinal += i32::from(month_length(month));
            } else if ordinal > i32::from(month_length(month)) {
                ordinal -= i32::from(month_length(month));
                month = self.month_offset(month, 1);
            } else {
                break;
            }
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ordinal = ordinal as u8;
        Day::new(month, ordinal).unwrap_or_else(|err| {
            panic!("day arithmetic produced an impossible date: {err}")
        })
    }

    fn first_day_of_month(&self, month: Month) -> Day {
        Day::new(month, MIN_DAY).unwrap_or_else(|err| {
            panic!("every month contains its first day: {err}")
        })
    }

    fn last_day_of_month(&self, month: Month) -> Day {
        Day::new(month, month_length(month)).unwrap_or_else(|err| {
            panic!("every month contains its last day: {err}")
        })
    }
}

fn month_length(month: Month) -> u8 {
    days_in_month(month.year().get(), month.month_of_year().get())
}
