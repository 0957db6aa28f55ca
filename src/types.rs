use crate::ParseError;
use crate::consts::{DATE_SEPARATOR, MAX_MONTH, MONTHS_IN_YEAR};
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    pub const JANUARY: Self = Self(NonZeroU8::MIN);

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
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

    /// Month of a calendar date
    #[allow(clippy::cast_possible_truncation)]
    pub fn of<D: Datelike>(date: &D) -> Self {
        // month0 is 0..=11
        Self(NonZeroU8::MIN.saturating_add(date.month0() as u8))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based index, convenient for name tables
    #[inline]
    pub const fn index0(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A calendar page: one month of one year.
///
/// Ordering is by year, then month. Two dates in the same month map to the
/// same `CalendarMonth`, so comparisons are at month granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth(NaiveDate); // always the 1st of the month

impl CalendarMonth {
    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    /// Creates a month page, returning `None` if the year is outside the
    /// representable calendar.
    pub fn new(year: i32, month: Month) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, u32::from(month.get()), 1).map(Self)
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> Month {
        Month::of(&self.0)
    }

    /// First day of the month
    pub const fn first_day(self) -> NaiveDate {
        self.0
    }

    /// Last day of the month
    pub fn last_day(self) -> NaiveDate {
        self.0
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .unwrap_or(self.0)
    }

    /// Number of days in the month
    pub fn len_days(self) -> u32 {
        self.last_day().day()
    }

    /// Whether `date` falls on this page
    pub fn contains(self, date: NaiveDate) -> bool {
        Self::of(date) == self
    }

    /// Shifts the page by a signed number of months.
    /// Returns `None` past the representable calendar.
    pub fn add_months(self, delta: i32) -> Option<Self> {
        let shifted = if delta >= 0 {
            self.0.checked_add_months(Months::new(delta.unsigned_abs()))
        } else {
            self.0.checked_sub_months(Months::new(delta.unsigned_abs()))
        };
        shifted.map(Self)
    }

    /// Number of calendar months from `self` to `other` (negative if `other`
    /// is earlier).
    pub fn months_until(self, other: Self) -> i32 {
        (other.year() - self.year()) * MONTHS_IN_YEAR
            + i32::from(other.month().get())
            - i32::from(self.month().get())
    }

    /// Same year, different month (jump-to selectors)
    pub fn with_month(self, month: Month) -> Option<Self> {
        Self::new(self.year(), month)
    }

    /// Same month, different year (jump-to selectors)
    pub fn with_year(self, year: i32) -> Option<Self> {
        Self::new(year, self.month())
    }
}

impl From<NaiveDate> for CalendarMonth {
    fn from(date: NaiveDate) -> Self {
        Self::of(date)
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{DATE_SEPARATOR}{:02}", self.year(), self.month().get())
    }
}
