use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{ParseError, RANGE_SEPARATOR};

/// A possibly partial selection of days (inclusive).
///
/// Three shapes are representable: nothing chosen, only a start, or both
/// ends with `start <= end`. An end without a start is not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange", into = "RawDateRange")]
pub struct DateRange {
    start: Option<NaiveDate>,
    end:   Option<NaiveDate>,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// End date given without a start date.
    #[error("Invalid date range: end ({end}) has no start")]
    MissingStart { end: NaiveDate },

    /// Error parsing a date.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

impl DateRange {
    /// The empty selection
    pub const EMPTY: Self = Self { start: None, end: None };

    /// Creates a complete range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start: Some(start), end: Some(end) })
    }

    /// A selection with only its start chosen
    pub const fn starting(start: NaiveDate) -> Self {
        Self { start: Some(start), end: None }
    }

    /// Builds a range from optional ends.
    ///
    /// # Errors
    /// Returns `RangeError` if start > end or an end is given without a start.
    pub fn from_parts(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, RangeError> {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            (Some(start), None) => Ok(Self::starting(start)),
            (None, None) => Ok(Self::EMPTY),
            (None, Some(end)) => Err(RangeError::MissingStart { end }),
        }
    }

    pub const fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub const fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Both ends, if the range is complete
    pub const fn dates(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    pub const fn is_complete(&self) -> bool {
        self.end.is_some()
    }

    /// Checks if a complete range contains `day`
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.dates().is_some_and(|(start, end)| start <= day && day <= end)
    }

    /// A complete range whose start and end are the same day
    pub fn is_single_day(&self) -> bool {
        self.dates().is_some_and(|(start, end)| start == end)
    }

    pub fn is_start(&self, day: NaiveDate) -> bool {
        self.start == Some(day)
    }

    pub fn is_end(&self, day: NaiveDate) -> bool {
        self.end == Some(day)
    }

    /// Narrows a complete range into `[min, max]`.
    ///
    /// Returns `None` when the range is incomplete or lies entirely outside
    /// the bounds, so that clamping would invert it.
    pub fn clamped(&self, min: NaiveDate, max: NaiveDate) -> Option<Self> {
        let (start, end) = self.dates()?;
        Self::new(start.max(min), end.min(max)).ok()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{start}{RANGE_SEPARATOR}")?;
        }
        if let Some(end) = self.end {
            write!(f, "{end}")?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_date:   Option<NaiveDate>,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = RangeError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::from_parts(raw.start_date, raw.end_date)
    }
}

impl From<DateRange> for RawDateRange {
    fn from(range: DateRange) -> Self {
        Self { start_date: range.start, end_date: range.end }
    }
}

/// A named preset range offered next to the calendars.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDefinedRange", into = "RawDefinedRange")]
pub struct DefinedRange {
    label: String,
    start: NaiveDate,
    end:   NaiveDate,
}

impl DefinedRange {
    /// Creates a preset with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(label: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { label: label.into(), start, end })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// The preset as a selectable range
    pub const fn range(&self) -> DateRange {
        DateRange { start: Some(self.start), end: Some(self.end) }
    }

    /// Whether `selected` covers exactly the same days as this preset
    pub fn matches(&self, selected: &DateRange) -> bool {
        selected.dates() == Some((self.start, self.end))
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDefinedRange {
    label:      String,
    start_date: NaiveDate,
    end_date:   NaiveDate,
}

impl TryFrom<RawDefinedRange> for DefinedRange {
    type Error = RangeError;

    fn try_from(raw: RawDefinedRange) -> Result<Self, Self::Error> {
        Self::new(raw.label, raw.start_date, raw.end_date)
    }
}

impl From<DefinedRange> for RawDefinedRange {
    fn from(range: DefinedRange) -> Self {
        Self { label: range.label, start_date: range.start, end_date: range.end }
    }
}
