//! Date-like inputs accepted for bounds and configured ranges.
//!
//! A host may hand the picker a real date or a string. Strings are parsed
//! with a precision grammar; a string naming only a year or a month resolves
//! to the first day of that period.

use crate::prelude::*;
use crate::{
    DATE_SEPARATOR, JANUARY, MAX_MONTH, MIN_DAY, MONTH_FIRST_SEPARATOR, TIME_SEPARATOR,
    TIME_SEPARATOR_SPACE,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {_0}")]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// A concrete date, or something that should parse into one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, From)]
#[serde(untagged)]
pub enum DateInput {
    Date(NaiveDate),
    Text(String),
}

impl DateInput {
    /// Parses the input into a date.
    ///
    /// # Errors
    /// Returns `ParseError` if a text input is not a recognised date.
    pub fn parse(&self) -> Result<NaiveDate, ParseError> {
        match self {
            Self::Date(date) => Ok(*date),
            Self::Text(text) => parse_date_like(text),
        }
    }

    /// Parses the input, falling back to `default` when it is not a date.
    pub fn resolve(&self, default: NaiveDate) -> NaiveDate {
        self.parse().unwrap_or_else(|err| {
            warn!(input = ?self, error = %err, fallback = %default, "Unparseable date input, using default");
            default
        })
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// Resolves an optional input, substituting `default` when absent or invalid.
pub fn resolve_optional(input: Option<&DateInput>, default: NaiveDate) -> NaiveDate {
    input.map_or(default, |input| input.resolve(default))
}

/// Parses a date-like string.
///
/// Accepted forms: `YYYY`, `YYYY-MM`, `YYYY-MM-DD` (optionally followed by
/// `T` and a time, which is ignored), `MM/YYYY` and `MM/DD/YYYY`. Partial
/// dates resolve to the first day of the period they name.
///
/// # Errors
/// Returns `ParseError` describing the first component that failed.
pub fn parse_date_like(s: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    // Drop an ISO time of day, keep the calendar date
    let trimmed = trimmed
        .split_once(|c| c == TIME_SEPARATOR || c == TIME_SEPARATOR_SPACE)
        .map_or(trimmed, |(date, _)| date.trim_end());

    // Strictly enforce delimiters: DATE_SEPARATOR for ISO, MONTH_FIRST_SEPARATOR for month-first
    let has_hyphen = trimmed.contains(DATE_SEPARATOR);
    let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);

    if has_hyphen && has_slash {
        return Err(ParseError::InvalidFormat(format!(
            "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
        )));
    }

    if has_hyphen {
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [year, month] => build(parse_year(year)?, parse_u8(month)?, MIN_DAY),
            [year, month, day] => build(parse_year(year)?, parse_u8(month)?, parse_u8(day)?),
            _ => Err(ParseError::InvalidFormat(format!(
                "Too many {DATE_SEPARATOR} separators: expected 0-2, found {}",
                parts.len() - 1
            ))),
        }
    } else if has_slash {
        let parts: Vec<&str> = trimmed.split(MONTH_FIRST_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [month, year] => build(parse_year(year)?, parse_u8(month)?, MIN_DAY),
            [month, day, year] => build(parse_year(year)?, parse_u8(month)?, parse_u8(day)?),
            _ => Err(ParseError::InvalidFormat(format!(
                "Too many {MONTH_FIRST_SEPARATOR} separators: expected 1-2, found {}",
                parts.len() - 1
            ))),
        }
    } else {
        build(parse_year(trimmed)?, JANUARY, MIN_DAY)
    }
}

fn parse_year(s: &str) -> Result<i32, ParseError> {
    // Signs are not part of the grammar; `u16` keeps years to four digits' worth
    s.parse::<u16>()
        .map(i32::from)
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

fn build(year: i32, month: u8, day: u8) -> Result<NaiveDate, ParseError> {
    if year == 0 {
        return Err(ParseError::InvalidYear(year));
    }
    crate::Month::new(month)?;
    NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
        .ok_or(ParseError::InvalidDay { year, month, day })
}

impl FromStr for DateInput {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date_like(s).map(Self::Date)
    }
}
