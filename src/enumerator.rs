//! The bidirectional slot-sequence state machine.

use crate::calendar::Calendar;
use crate::layout::LayoutPolicy;
use crate::range::{DayRange, MonthRange};
use crate::types::DayOfWeekPosition;
use crate::{Day, ItemType, Month};
use std::iter::FusedIterator;

/// Walks the ordered sequence of structural slots making up a calendar grid.
///
/// The enumerator owns nothing but its constructor-supplied configuration, so
/// every traversal is independent and reentrant; `&self` is enough for
/// concurrent use when the calendar is shareable.
///
/// A traversal is bounded by the configured ranges, never by the transition
/// functions: [`predecessor`](Self::predecessor) and
/// [`successor`](Self::successor) always produce a structurally valid
/// neighbor, including one step past a boundary, and
/// [`is_in_range`](Self::is_in_range) is the sole stopping condition.
#[derive(Debug, Clone)]
pub struct ItemTypeEnumerator<C> {
    calendar:                C,
    layout_policy:           LayoutPolicy,
    month_range:             MonthRange,
    day_range:               DayRange,
    generates_month_footers: bool,
}

impl<C: Calendar> ItemTypeEnumerator<C> {
    /// Creates an enumerator for the given configuration.
    ///
    /// When `generates_month_footers` is false, no `MonthFooter` slot is ever
    /// produced, regardless of layout policy.
    pub const fn new(
        calendar: C,
        layout_policy: LayoutPolicy,
        month_range: MonthRange,
        day_range: DayRange,
        generates_month_footers: bool,
    ) -> Self {
        Self {
            calendar,
            layout_policy,
            month_range,
            day_range,
            generates_month_footers,
        }
    }

    /// Whether a slot falls inside the configured ranges: month-bearing slots
    /// are tested against the month range, day slots against the day range.
    pub fn is_in_range(&self, item_type: ItemType) -> bool {
        match item_type {
            ItemType::MonthHeader(month)
            | ItemType::MonthFooter(month)
            | ItemType::DayOfWeekHeader(_, month) => self.month_range.contains(month),
            ItemType::Day(day) => self.day_range.contains(day),
        }
    }

    /// The slot immediately before `item_type` in the sequence.
    ///
    /// Two behaviors here are deliberate and covered by tests:
    /// a footer's predecessor is the *previous* month's last day, same as a
    /// header's, so backward walks place each footer just before its month's
    /// first day rather than after its last; and in pinned layouts the slot
    /// before a month's first eligible day is that month's footer (or its
    /// header when footers are disabled).
    ///
    /// # Panics
    /// Panics if a weekday-header position underflows its ordinal range,
    /// which is unreachable while the first-position guard is in place.
    pub fn predecessor(&self, item_type: ItemType) -> ItemType {
        match item_type {
            ItemType::MonthHeader(month) | ItemType::MonthFooter(month) => {
                let previous_month = self.calendar.month_offset(month, -1);
                ItemType::Day(self.calendar.last_day_of_month(previous_month))
            },
            ItemType::DayOfWeekHeader(position, month) => {
                if position.is_first() {
                    ItemType::MonthHeader(month)
                } else {
                    let previous_position = position.try_predecessor().unwrap_or_else(|| {
                        panic!(
                            "no day-of-week position precedes {position}; \
                             a first-position guard is missing"
                        )
                    });
                    ItemType::DayOfWeekHeader(previous_position, month)
                }
            },
            ItemType::Day(day) => {
                let first_day_of_month = self.calendar.first_day_of_month(day.month());
                if day == first_day_of_month || day == self.day_range.lower_bound() {
                    if self.layout_policy.pins_days_of_week_to_top() {
                        if self.generates_month_footers {
                            ItemType::MonthFooter(day.month())
                        } else {
                            ItemType::MonthHeader(day.month())
                        }
                    } else {
                        ItemType::DayOfWeekHeader(DayOfWeekPosition::LAST, day.month())
                    }
                } else {
                    ItemType::Day(self.calendar.day_offset(day, -1))
                }
            },
        }
    }

    /// The slot immediately after `item_type` in the sequence.
    ///
    /// # Panics
    /// Panics if a weekday-header position overflows its ordinal range,
    /// which is unreachable while the last-position guard is in place.
    pub fn successor(&self, item_type: ItemType) -> ItemType {
        match item_type {
            ItemType::MonthHeader(month) => {
                if self.layout_policy.pins_days_of_week_to_top() {
                    ItemType::Day(self.first_eligible_day(month))
                } else {
                    ItemType::DayOfWeekHeader(DayOfWeekPosition::FIRST, month)
                }
            },
            ItemType::MonthFooter(month) => {
                if self.layout_policy.pins_days_of_week_to_top() {
                    let next_day = self
                        .calendar
                        .day_offset(self.last_eligible_day(month), 1);
                    ItemType::MonthHeader(next_day.month())
                } else {
                    ItemType::MonthHeader(self.calendar.month_offset(month, 1))
                }
            },
            ItemType::DayOfWeekHeader(position, month) => {
                if position.is_last() {
                    ItemType::Day(self.first_eligible_day(month))
                } else {
                    let next_position = position.try_successor().unwrap_or_else(|| {
                        panic!(
                            "no day-of-week position follows {position}; \
                             a last-position guard is missing"
                        )
                    });
                    ItemType::DayOfWeekHeader(next_position, month)
                }
            },
            ItemType::Day(day) => {
                let next_day = self.calendar.day_offset(day, 1);
                if day.month() != next_day.month() {
                    if self.generates_month_footers {
                        ItemType::MonthFooter(day.month())
                    } else {
                        ItemType::MonthHeader(next_day.month())
                    }
                } else if day == self.day_range.upper_bound() {
                    if self.generates_month_footers {
                        ItemType::MonthFooter(day.month())
                    } else {
                        ItemType::MonthHeader(self.calendar.month_offset(day.month(), 1))
                    }
                } else {
                    ItemType::Day(next_day)
                }
            },
        }
    }

    /// Lazily walks backward from (and excluding) `starting_at` until a slot
    /// falls outside the configured ranges.
    pub fn iter_backward(&self, starting_at: ItemType) -> ItemTypes<'_, C> {
        ItemTypes {
            enumerator: self,
            cursor:     Some(self.predecessor(starting_at)),
            direction:  Direction::Backward,
        }
    }

    /// Lazily walks forward from (and including) `starting_at` until a slot
    /// falls outside the configured ranges.
    pub fn iter_forward(&self, starting_at: ItemType) -> ItemTypes<'_, C> {
        ItemTypes {
            enumerator: self,
            cursor:     Some(starting_at),
            direction:  Direction::Forward,
        }
    }

    /// Drives both traversals from `starting_at`: first every slot strictly
    /// before the seed (newest first), then the seed and every slot after it.
    ///
    /// Each handler returns `true` to continue and `false` to end its
    /// direction's walk; the two passes share no state, so stopping one does
    /// not affect the other. The seed is only ever delivered to `on_forward`.
    pub fn enumerate<B, F>(&self, starting_at: ItemType, mut on_backward: B, mut on_forward: F)
    where
        B: FnMut(ItemType) -> bool,
        F: FnMut(ItemType) -> bool,
    {
        for item_type in self.iter_backward(starting_at) {
            if !on_backward(item_type) {
                break;
            }
        }
        for item_type in self.iter_forward(starting_at) {
            if !on_forward(item_type) {
                break;
            }
        }
    }

    /// The first day of `month` to appear in the sequence: the later of the
    /// month's first day and the day range's lower bound.
    fn first_eligible_day(&self, month: Month) -> Day {
        let first_day = self.calendar.first_day_of_month(month);
        if month == self.day_range.lower_bound().month() {
            first_day.max(self.day_range.lower_bound())
        } else {
            first_day
        }
    }

    /// The last day of `month` to appear in the sequence.
    ///
    /// Like the lower-bound case this takes the *later* of the month's last
    /// day and the range bound, so a day range ending mid-month does not
    /// shorten the month here. Tests document the resulting behavior.
    fn last_eligible_day(&self, month: Month) -> Day {
        let last_day = self.calendar.last_day_of_month(month);
        if month == self.day_range.upper_bound().month() {
            last_day.max(self.day_range.upper_bound())
        } else {
            last_day
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Backward,
    Forward,
}

/// Lazy, fused slot iterator returned by
/// [`ItemTypeEnumerator::iter_backward`] and
/// [`ItemTypeEnumerator::iter_forward`].
#[derive(Debug)]
pub struct ItemTypes<'a, C> {
    enumerator: &'a ItemTypeEnumerator<C>,
    cursor:     Option<ItemType>,
    direction:  Direction,
}

impl<C: Calendar> Iterator for ItemTypes<'_, C> {
    type Item = ItemType;

    fn next(&mut self) -> Option<ItemType> {
        let item_type = self.cursor?;
        if !self.enumerator.is_in_range(item_type) {
            self.cursor = None;
            return None;
        }
        self.cursor = Some(match self.direction {
            Direction::Backward => self.enumerator.predecessor(item_type),
            Direction::Forward => self.enumerator.successor(item_type),
        });
        Some(item_type)
    }
}

impl<C: Calendar> FusedIterator for ItemTypes<'_, C> {}
