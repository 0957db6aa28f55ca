//! One calendar page as data: a grid of weeks with per-day display state.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{CalendarMonth, DAYS_PER_WEEK, Marker, NavState, Session, YEAR_OPTIONS};

/// How a single day should be drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayState {
    /// Start or end of the selection
    pub filled:         bool,
    /// Today
    pub outlined:       bool,
    /// Inside the selection or its hover preview
    pub highlighted:    bool,
    /// Outside this page's month or outside the bounds
    pub disabled:       bool,
    pub start_of_range: bool,
    pub end_of_range:   bool,
    /// Belongs to this page's month (leading/trailing days do not)
    pub in_month:       bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayCell {
    pub date:  NaiveDate,
    pub state: DayState,
}

/// A calendar page bound to a session.
#[derive(Debug, Clone, Copy)]
pub struct MonthView<'a> {
    session: &'a Session,
    marker:  Marker,
    month:   CalendarMonth,
}

impl<'a> MonthView<'a> {
    pub const fn new(session: &'a Session, marker: Marker) -> Self {
        Self { session, marker, month: session.months().get(marker) }
    }

    pub const fn marker(&self) -> Marker {
        self.marker
    }

    pub const fn month(&self) -> CalendarMonth {
        self.month
    }

    /// Localised `MMMM yyyy`
    pub fn title(&self) -> String {
        self.session.locale().format_month(self.month)
    }

    pub fn weekday_labels(&self) -> [&'static str; DAYS_PER_WEEK] {
        self.session.locale().weekday_labels()
    }

    pub fn nav_state(&self) -> NavState {
        self.session.months().nav_state(self.marker)
    }

    /// Years for a jump-to selector, centred on this page's year
    pub fn year_options(&self) -> Vec<i32> {
        let half = i32::try_from(YEAR_OPTIONS / 2).unwrap_or_default();
        let first = self.month.year() - half;
        (0..YEAR_OPTIONS)
            .filter_map(|i| i32::try_from(i).ok())
            .map(|i| first + i)
            .collect()
    }

    /// Days from the start of the week holding the 1st to the end of the
    /// week holding the last day, in rows of seven.
    pub fn weeks(&self) -> Vec<[DayCell; DAYS_PER_WEEK]> {
        let locale = self.session.locale();
        let first = locale.start_of_week(self.month.first_day());
        let last = locale.end_of_week(self.month.last_day());

        let days: Vec<DayCell> = first
            .iter_days()
            .take_while(|day| *day <= last)
            .map(|date| DayCell { date, state: self.day_state(date) })
            .collect();

        days.chunks_exact(DAYS_PER_WEEK)
            .filter_map(|week| <[DayCell; DAYS_PER_WEEK]>::try_from(week).ok())
            .collect()
    }

    pub fn day_state(&self, day: NaiveDate) -> DayState {
        let session = self.session;
        let range = session.range();
        let single = range.is_single_day();
        let is_start = range.is_start(day);
        let is_end = range.is_end(day);
        let in_month = self.month.contains(day);

        DayState {
            filled: is_start || is_end,
            outlined: day == session.today(),
            highlighted: (range.contains(day) || session.in_hover_range(day)) && !single,
            disabled: !in_month || !session.bounds().contains(day),
            start_of_range: is_start && !single,
            end_of_range: is_end && !single,
            in_month,
        }
    }
}
