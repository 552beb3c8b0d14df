//! # calendar_slots
//!
//! Computes the ordered sequence of structural "slots" that make up a
//! calendar grid — month headers, weekday headers, individual days, and
//! optional month footers — and walks that sequence backward or forward from
//! any starting slot. Rendering, geometry, and scrolling are a consumer's
//! concern; this crate only answers "which slot comes next, and is it still
//! eligible".
//!
//! ## Quick Start
//!
//! ```
//! use calendar_slots::{
//!     DayRange, GregorianCalendar, ItemType, ItemTypeEnumerator, LayoutPolicy, MonthRange,
//! };
//!
//! let enumerator = ItemTypeEnumerator::new(
//!     GregorianCalendar,
//!     LayoutPolicy::Vertical { pin_days_of_week_to_top: false },
//!     "2024-01/2024-03".parse::<MonthRange>()?,
//!     "2024-01-15/2024-03-10".parse::<DayRange>()?,
//!     true,
//! );
//!
//! let seed = ItemType::Day("2024-01-20".parse()?);
//! let visible: Vec<ItemType> = enumerator.iter_forward(seed).take(5).collect();
//! assert_eq!(visible.len(), 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `types` | Validated value types: years, months, days, weekday positions |
//! | `range` | Closed month/day eligibility ranges |
//! | `layout` | Layout policy (orientation and weekday-header pinning) |
//! | `calendar` | Date-arithmetic capability trait and Gregorian implementation |
//! | `enumerator` | The bidirectional slot-sequence state machine |
//! | `consts` | Calendar constants and text separators |

mod calendar;
mod consts;
mod enumerator;
mod layout;
mod prelude;
mod range;
mod types;

pub use calendar::{Calendar, GregorianCalendar};
pub use consts::*;
pub use enumerator::{ItemTypeEnumerator, ItemTypes};
pub use layout::LayoutPolicy;
pub use range::{DayRange, MonthRange, RangeError};
pub use types::{Day, DayOfWeekPosition, Month, MonthOfYear, Year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// One slot in a calendar grid's structural sequence.
///
/// The variant plus its payload uniquely identifies a slot: a month has one
/// header, at most one footer, up to seven weekday headers, and one slot per
/// day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    /// Slot introducing a month (its title)
    #[display(fmt = "month-header({})", "_0")]
    MonthHeader(Month),
    /// Optional trailing slot closing out a month
    #[display(fmt = "month-footer({})", "_0")]
    MonthFooter(Month),
    /// One of up to seven slots labeling weekday columns within a month
    #[display(fmt = "day-of-week-header({}, {})", "_0", "_1")]
    DayOfWeekHeader(DayOfWeekPosition, Month),
    /// Slot for a single day
    #[display(fmt = "day({})", "_0")]
    Day(Day),
}

impl ItemType {
    /// The month a slot belongs to; for day slots, the day's month.
    pub const fn month(&self) -> Month {
        match *self {
            Self::MonthHeader(month)
            | Self::MonthFooter(month)
            | Self::DayOfWeekHeader(_, month) => month,
            Self::Day(day) => day.month(),
        }
    }
}

/// Error type for value construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Invalid day-of-week position: {} (must be 1-{})", "_0", DAYS_OF_WEEK)]
    InvalidDayOfWeekPosition(u8),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}
