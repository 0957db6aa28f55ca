//! The pair of visible calendar pages and the rules for moving them.
//!
//! The first page is always strictly before the second. Every mutation is
//! checked against that ordering and dropped when it would break it.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prelude::*;
use crate::{CalendarMonth, MIN_NAVIGABLE_GAP};

/// Which of the two calendars an intent targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    #[display(fmt = "first")]
    First,
    #[display(fmt = "second")]
    Second,
}

/// One step of month navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationAction {
    #[display(fmt = "previous")]
    Previous,
    #[display(fmt = "next")]
    Next,
}

impl NavigationAction {
    /// Signed month delta
    pub const fn delta(self) -> i32 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Whether a calendar's back and forward arrows are usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavState {
    pub back:    bool,
    pub forward: bool,
}

/// The two visible pages, `first < second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibleMonths {
    first:  CalendarMonth,
    second: CalendarMonth,
}

/// Error returned when a pair of pages is not strictly ordered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Visible months out of order: {first} is not before {second}")]
pub struct MonthOrderError {
    pub first:  CalendarMonth,
    pub second: CalendarMonth,
}

impl VisibleMonths {
    /// Creates a pair of pages.
    ///
    /// # Errors
    /// Returns `MonthOrderError` unless `first < second`.
    pub fn new(first: CalendarMonth, second: CalendarMonth) -> Result<Self, MonthOrderError> {
        if first < second {
            Ok(Self { first, second })
        } else {
            Err(MonthOrderError { first, second })
        }
    }

    /// Last month and this month
    pub fn default_for(today: NaiveDate) -> Self {
        let second = CalendarMonth::of(today);
        let first = today
            .checked_sub_months(Months::new(1))
            .map_or(second, CalendarMonth::of);
        Self { first, second }
    }

    /// Pages showing a complete range: its start month, and either its end
    /// month or, when the range sits inside one month, the month after.
    pub fn spanning(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        let first = CalendarMonth::of(start);
        let second = if first.contains(end) {
            first.add_months(1)?
        } else {
            CalendarMonth::of(end)
        };
        Self::new(first, second).ok()
    }

    pub const fn first(&self) -> CalendarMonth {
        self.first
    }

    pub const fn second(&self) -> CalendarMonth {
        self.second
    }

    pub const fn get(&self, marker: Marker) -> CalendarMonth {
        match marker {
            Marker::First => self.first,
            Marker::Second => self.second,
        }
    }

    /// Jumps the first page to `month` if it stays before the second.
    pub fn set_first(&mut self, month: CalendarMonth) -> bool {
        if month < self.second {
            self.first = month;
            true
        } else {
            debug!(requested = %month, second = %self.second, "Rejected first month");
            false
        }
    }

    /// Jumps the second page to `month` if it stays after the first.
    pub fn set_second(&mut self, month: CalendarMonth) -> bool {
        if self.first < month {
            self.second = month;
            true
        } else {
            debug!(requested = %month, first = %self.first, "Rejected second month");
            false
        }
    }

    pub fn set(&mut self, marker: Marker, month: CalendarMonth) -> bool {
        match marker {
            Marker::First => self.set_first(month),
            Marker::Second => self.set_second(month),
        }
    }

    /// Moves one page by a signed number of months, keeping the order.
    pub fn shift(&mut self, marker: Marker, delta: i32) -> bool {
        match self.get(marker).add_months(delta) {
            Some(candidate) => self.set(marker, candidate),
            None => false,
        }
    }

    pub fn navigate(&mut self, marker: Marker, action: NavigationAction) -> bool {
        self.shift(marker, action.delta())
    }

    /// The pages are far enough apart to be moved towards each other.
    pub fn can_navigate_closer(&self) -> bool {
        self.first.months_until(self.second) >= MIN_NAVIGABLE_GAP
    }

    /// Arrow availability for one calendar: the outer arrows always work,
    /// the inner ones only while there is a gap to close.
    pub fn nav_state(&self, marker: Marker) -> NavState {
        let closer = self.can_navigate_closer();
        match marker {
            Marker::First => NavState { back: true, forward: closer },
            Marker::Second => NavState { back: closer, forward: true },
        }
    }
}
