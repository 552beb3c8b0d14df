use serde::{Deserialize, Serialize};

/// How the surrounding grid lays months out, as far as slot ordering cares.
///
/// Only the vertical variant's pin flag affects transitions: pinned weekday
/// headers render once above the whole grid instead of once per month, so no
/// weekday-header slots appear in the sequence. Horizontal layouts behave as
/// if the flag were false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutPolicy {
    /// Months stacked vertically; weekday headers optionally pinned above the grid
    Vertical { pin_days_of_week_to_top: bool },
    /// Months laid out horizontally; weekday headers always repeat per month
    Horizontal,
}

impl LayoutPolicy {
    /// Whether weekday headers are pinned above the grid rather than emitted
    /// once per month.
    pub const fn pins_days_of_week_to_top(self) -> bool {
        matches!(
            self,
            Self::Vertical {
                pin_days_of_week_to_top: true
            }
        )
    }
}
