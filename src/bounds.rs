use chrono::{Months, NaiveDate};
use tracing::{debug, warn};

use crate::{
    CalendarMonth, DEFAULT_MIN_YEARS_BACK, DateInput, DateRange, MONTHS_IN_YEAR, RangeError,
    VisibleMonths, resolve_optional,
};

/// Inclusive limits on selectable days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    min: NaiveDate,
    max: NaiveDate,
}

impl Bounds {
    /// Creates bounds with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if min > max.
    pub fn new(min: NaiveDate, max: NaiveDate) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::InvalidRange { start: min, end: max });
        }
        Ok(Self { min, max })
    }

    /// One year back through today
    pub fn default_for(today: NaiveDate) -> Self {
        let min = today
            .checked_sub_months(Months::new(DEFAULT_MIN_YEARS_BACK * MONTHS_IN_YEAR.unsigned_abs()))
            .unwrap_or(today);
        Self { min, max: today }
    }

    /// Resolves optional configured limits. Missing or unparseable limits
    /// fall back to the defaults for `today`; a minimum after the maximum
    /// discards both.
    pub fn resolve(min: Option<&DateInput>, max: Option<&DateInput>, today: NaiveDate) -> Self {
        let defaults = Self::default_for(today);
        let min = resolve_optional(min, defaults.min);
        let max = resolve_optional(max, defaults.max);
        Self::new(min, max).unwrap_or_else(|err| {
            warn!(error = %err, "Inverted bounds, using defaults");
            defaults
        })
    }

    pub const fn min(&self) -> NaiveDate {
        self.min
    }

    pub const fn max(&self) -> NaiveDate {
        self.max
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.min <= day && day <= self.max
    }

    pub fn clamp(&self, day: NaiveDate) -> NaiveDate {
        day.clamp(self.min, self.max)
    }

    /// Pages to show when a session opens with `initial` as its range.
    ///
    /// A complete range is clamped into the bounds and spanned; a start-only
    /// range shows the clamped start's month next to this month. Anything
    /// that cannot produce strictly ordered pages yields the defaults.
    pub fn initial_months(&self, initial: &DateRange, today: NaiveDate) -> VisibleMonths {
        let defaults = VisibleMonths::default_for(today);
        let months = match (initial.start(), initial.end()) {
            (Some(_), Some(_)) => initial
                .clamped(self.min, self.max)
                .and_then(|range| range.dates())
                .and_then(|(start, end)| VisibleMonths::spanning(start, end)),
            (Some(start), None) => {
                VisibleMonths::new(CalendarMonth::of(self.clamp(start)), CalendarMonth::of(today)).ok()
            },
            _ => None,
        };
        months.unwrap_or_else(|| {
            if !initial.is_empty() {
                debug!(initial = %initial, "Initial range has no usable pages, using defaults");
            }
            defaults
        })
    }
}
