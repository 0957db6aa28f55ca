//! Per-activation picker state and its transitions.
//!
//! A [`Session`] is built once when the picker opens and dropped when it
//! closes. Hosts feed it intents (clicks, hovers, navigation, presets) and
//! read back what to render. Transitions that would break an invariant are
//! ignored and report `false`; none of them fail.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::prelude::*;
use crate::{
    Bounds, CalendarMonth, DateRange, DefinedRange, Locale, Marker, NavigationAction, PickerConfig,
    VisibleMonths, default_ranges,
};

/// Where a selection stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Nothing chosen
    #[display(fmt = "empty")]
    Empty,
    /// Start chosen, hovering previews the end
    #[display(fmt = "start selected")]
    StartSelected,
    /// Both ends chosen
    #[display(fmt = "range complete")]
    RangeComplete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    today:   NaiveDate,
    bounds:  Bounds,
    locale:  Locale,
    presets: Vec<DefinedRange>,
    range:   DateRange,
    months:  VisibleMonths,
    hover:   Option<NaiveDate>,
}

impl Session {
    /// Builds fresh state from configuration, resolving bounds and the
    /// initial pages against `today`.
    pub fn open(config: &PickerConfig, today: NaiveDate) -> Self {
        let bounds = Bounds::resolve(config.min_date.as_ref(), config.max_date.as_ref(), today);
        let locale = config.locale.unwrap_or_default();
        let presets = config
            .defined_ranges
            .clone()
            .unwrap_or_else(|| default_ranges(today, &locale));
        let range = config.initial_date_range.unwrap_or_default();
        let months = bounds.initial_months(&range, today);

        debug!(
            today = %today,
            min = %bounds.min(),
            max = %bounds.max(),
            range = %range,
            first = %months.first(),
            second = %months.second(),
            "Opened picker session"
        );

        Self { today, bounds, locale, presets, range, months, hover: None }
    }

    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    pub const fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn presets(&self) -> &[DefinedRange] {
        &self.presets
    }

    /// The range as currently selected
    pub const fn range(&self) -> &DateRange {
        &self.range
    }

    pub const fn months(&self) -> &VisibleMonths {
        &self.months
    }

    pub const fn first_month(&self) -> CalendarMonth {
        self.months.first()
    }

    pub const fn second_month(&self) -> CalendarMonth {
        self.months.second()
    }

    pub const fn hover_day(&self) -> Option<NaiveDate> {
        self.hover
    }

    pub const fn phase(&self) -> Phase {
        match (self.range.start(), self.range.end()) {
            (None, _) => Phase::Empty,
            (Some(_), None) => Phase::StartSelected,
            (Some(_), Some(_)) => Phase::RangeComplete,
        }
    }

    /// A click either finishes a started range (when `day` is not before its
    /// start) or starts a new one at `day`.
    pub fn day_click(&mut self, day: NaiveDate) {
        self.range = match (self.range.start(), self.range.end()) {
            (Some(start), None) if day >= start => DateRange::new(start, day).unwrap_or(DateRange::starting(day)),
            _ => DateRange::starting(day),
        };
        self.hover = Some(day);
    }

    /// Tracks the hovered day while an end is pending. Returns whether the
    /// hover changed.
    pub fn day_hover(&mut self, day: NaiveDate) -> bool {
        if self.phase() != Phase::StartSelected || self.hover == Some(day) {
            return false;
        }
        self.hover = Some(day);
        true
    }

    /// Whether `day` lies in the pending span from the start to the hovered
    /// day.
    pub fn in_hover_range(&self, day: NaiveDate) -> bool {
        match (self.range.start(), self.range.end(), self.hover) {
            (Some(start), None, Some(hover)) => hover > start && start <= day && day <= hover,
            _ => false,
        }
    }

    /// Commits a range, clamped into the bounds, and brings it into view.
    ///
    /// An incomplete range resets the selection and the pages. A complete
    /// range lying wholly outside the bounds is ignored and returns `false`.
    pub fn apply_range(&mut self, range: DateRange) -> bool {
        if !range.is_complete() {
            self.reset();
            return true;
        }

        let Some(clamped) = range.clamped(self.bounds.min(), self.bounds.max()) else {
            debug!(range = %range, "Rejected range outside bounds");
            return false;
        };
        let Some((start, end)) = clamped.dates() else {
            return false;
        };
        let Some(months) = VisibleMonths::spanning(start, end) else {
            debug!(range = %clamped, "Rejected range at the edge of the calendar");
            return false;
        };

        self.range = clamped;
        self.months = months;
        true
    }

    /// Commits the preset at `index`. Out-of-range indices are ignored.
    pub fn select_preset(&mut self, index: usize) -> bool {
        match self.presets.get(index) {
            Some(preset) => {
                let range = preset.range();
                debug!(label = preset.label(), range = %range, "Selected preset");
                self.apply_range(range)
            },
            None => false,
        }
    }

    pub fn navigate_month(&mut self, marker: Marker, action: NavigationAction) -> bool {
        self.months.navigate(marker, action)
    }

    pub fn set_first_month(&mut self, month: CalendarMonth) -> bool {
        self.months.set_first(month)
    }

    pub fn set_second_month(&mut self, month: CalendarMonth) -> bool {
        self.months.set_second(month)
    }

    pub fn set_month(&mut self, marker: Marker, month: CalendarMonth) -> bool {
        self.months.set(marker, month)
    }

    /// The range to hand to the host on Apply
    pub const fn committed(&self) -> DateRange {
        self.range
    }

    /// Drops the selection and shows the default pages. Returns the now
    /// empty range for the host.
    pub fn clear(&mut self) -> DateRange {
        self.reset();
        self.range
    }

    fn reset(&mut self) {
        self.range = DateRange::EMPTY;
        self.hover = None;
        self.months = VisibleMonths::default_for(self.today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ym, ymd};
    use crate::{DateInput, Month};

    fn today() -> NaiveDate {
        ymd(2024, 6, 15)
    }

    fn session() -> Session {
        Session::open(&PickerConfig::default(), today())
    }

    fn bounded(min: &str, max: &str) -> Session {
        let config = PickerConfig {
            min_date: Some(DateInput::from(min)),
            max_date: Some(DateInput::from(max)),
            ..PickerConfig::default()
        };
        Session::open(&config, today())
    }

    #[test]
    fn test_open_defaults() {
        let session = session();
        assert_eq!(session.phase(), Phase::Empty);
        assert_eq!(session.bounds().min(), ymd(2023, 6, 15));
        assert_eq!(session.bounds().max(), today());
        assert_eq!((session.first_month(), session.second_month()), (ym(2024, 5), ym(2024, 6)));
        assert_eq!(session.presets().len(), 9);
        assert_eq!(session.hover_day(), None);
    }

    #[test]
    fn test_open_with_initial_range() {
        let config = PickerConfig {
            initial_date_range: Some(DateRange::new(ymd(2024, 1, 5), ymd(2024, 3, 1)).unwrap()),
            ..PickerConfig::default()
        };
        let session = Session::open(&config, today());
        assert_eq!(session.phase(), Phase::RangeComplete);
        assert_eq!((session.first_month(), session.second_month()), (ym(2024, 1), ym(2024, 3)));
    }

    #[test]
    fn test_click_from_empty_starts_range() {
        let mut session = session();
        let day = ymd(2024, 6, 3);
        session.day_click(day);
        assert_eq!(*session.range(), DateRange::starting(day));
        assert_eq!(session.phase(), Phase::StartSelected);
        assert_eq!(session.hover_day(), Some(day));
    }

    #[test]
    fn test_second_click_completes_or_restarts() {
        struct TestCase {
            second:      NaiveDate,
            expected:    DateRange,
            description: &'static str,
        }

        let first = ymd(2024, 6, 10);
        let cases = [
            TestCase {
                second:      ymd(2024, 6, 12),
                expected:    DateRange::new(first, ymd(2024, 6, 12)).unwrap(),
                description: "later day completes",
            },
            TestCase {
                second:      first,
                expected:    DateRange::new(first, first).unwrap(),
                description: "same day completes a single-day range",
            },
            TestCase {
                second:      ymd(2024, 6, 2),
                expected:    DateRange::starting(ymd(2024, 6, 2)),
                description: "earlier day restarts",
            },
        ];

        for case in &cases {
            let mut session = session();
            session.day_click(first);
            session.day_click(case.second);
            assert_eq!(*session.range(), case.expected, "{}", case.description);
            assert_eq!(session.hover_day(), Some(case.second), "{}", case.description);
        }
    }

    #[test]
    fn test_click_after_complete_restarts() {
        let mut session = session();
        session.day_click(ymd(2024, 6, 1));
        session.day_click(ymd(2024, 6, 5));
        session.day_click(ymd(2024, 6, 9));
        assert_eq!(*session.range(), DateRange::starting(ymd(2024, 6, 9)));
    }

    #[test]
    fn test_click_sequences_keep_order() {
        let days = [
            ymd(2024, 5, 30),
            ymd(2024, 6, 1),
            ymd(2024, 6, 2),
            ymd(2024, 6, 14),
            ymd(2024, 7, 1),
        ];

        for a in days {
            for b in days {
                for c in days {
                    let mut session = session();
                    for day in [a, b, c] {
                        session.day_click(day);
                        let range = session.range();
                        if let (Some(start), Some(end)) = (range.start(), range.end()) {
                            assert!(start <= end, "clicks {a} {b} {c} inverted the range");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_clicks_are_not_clamped() {
        let mut session = bounded("2024-06-01", "2024-06-30");
        session.day_click(ymd(2024, 5, 1));
        session.day_click(ymd(2024, 7, 31));
        assert_eq!(session.range().dates(), Some((ymd(2024, 5, 1), ymd(2024, 7, 31))));
    }

    #[test]
    fn test_hover_only_while_start_selected() {
        let mut session = session();
        assert!(!session.day_hover(ymd(2024, 6, 3)));
        assert_eq!(session.hover_day(), None);

        session.day_click(ymd(2024, 6, 1));
        assert!(session.day_hover(ymd(2024, 6, 3)));
        assert!(!session.day_hover(ymd(2024, 6, 3)), "same day is not a change");
        assert_eq!(session.hover_day(), Some(ymd(2024, 6, 3)));

        session.day_click(ymd(2024, 6, 4));
        assert!(!session.day_hover(ymd(2024, 6, 8)));
        assert_eq!(session.hover_day(), Some(ymd(2024, 6, 4)));
    }

    #[test]
    fn test_in_hover_range() {
        let mut session = session();
        session.day_click(ymd(2024, 6, 5));
        session.day_hover(ymd(2024, 6, 8));

        assert!(session.in_hover_range(ymd(2024, 6, 5)));
        assert!(session.in_hover_range(ymd(2024, 6, 7)));
        assert!(session.in_hover_range(ymd(2024, 6, 8)));
        assert!(!session.in_hover_range(ymd(2024, 6, 4)));
        assert!(!session.in_hover_range(ymd(2024, 6, 9)));

        // Hovering on or before the start previews nothing
        session.day_hover(ymd(2024, 6, 5));
        assert!(!session.in_hover_range(ymd(2024, 6, 5)));
        session.day_hover(ymd(2024, 6, 1));
        assert!(!session.in_hover_range(ymd(2024, 6, 3)));
    }

    #[test]
    fn test_in_hover_range_false_once_complete() {
        let mut session = session();
        session.day_click(ymd(2024, 6, 5));
        session.day_hover(ymd(2024, 6, 10));
        session.day_click(ymd(2024, 6, 10));
        for day in 1..=30 {
            assert!(!session.in_hover_range(ymd(2024, 6, day)));
        }
    }

    #[test]
    fn test_apply_range_clamps() {
        let mut session = bounded("2024-01-10", "2024-05-20");
        let range = DateRange::new(ymd(2023, 12, 1), ymd(2024, 8, 1)).unwrap();
        assert!(session.apply_range(range));
        assert_eq!(session.range().dates(), Some((ymd(2024, 1, 10), ymd(2024, 5, 20))));
        assert_eq!((session.first_month(), session.second_month()), (ym(2024, 1), ym(2024, 5)));
    }

    #[test]
    fn test_apply_range_same_month_shows_next() {
        let mut session = session();
        assert!(session.apply_range(DateRange::new(ymd(2024, 3, 2), ymd(2024, 3, 28)).unwrap()));
        assert_eq!((session.first_month(), session.second_month()), (ym(2024, 3), ym(2024, 4)));
    }

    #[test]
    fn test_apply_range_two_months_shows_end() {
        let mut session = session();
        assert!(session.apply_range(DateRange::new(ymd(2023, 11, 30), ymd(2024, 2, 1)).unwrap()));
        assert_eq!((session.first_month(), session.second_month()), (ym(2023, 11), ym(2024, 2)));
    }

    #[test]
    fn test_apply_incomplete_range_resets() {
        let mut session = session();
        session.apply_range(DateRange::new(ymd(2024, 1, 1), ymd(2024, 3, 1)).unwrap());
        assert!(session.apply_range(DateRange::starting(ymd(2024, 2, 1))));
        assert_eq!(*session.range(), DateRange::EMPTY);
        assert_eq!(*session.months(), VisibleMonths::default_for(today()));
    }

    #[test]
    fn test_apply_range_outside_bounds_is_ignored() {
        let mut session = session();
        let before = session.clone();
        let range = DateRange::new(ymd(2010, 1, 1), ymd(2010, 2, 1)).unwrap();
        assert!(!session.apply_range(range));
        assert_eq!(session, before);
    }

    #[test]
    fn test_applied_ranges_respect_bounds() {
        let mut session = bounded("2024-02-10", "2024-04-20");
        let starts = [ymd(2024, 1, 1), ymd(2024, 2, 10), ymd(2024, 3, 15)];
        let ends = [ymd(2024, 3, 15), ymd(2024, 4, 20), ymd(2024, 9, 1)];
        for start in starts {
            for end in ends {
                if session.apply_range(DateRange::new(start, end).unwrap()) {
                    let (s, e) = session.range().dates().unwrap();
                    assert!(s >= session.bounds().min());
                    assert!(e <= session.bounds().max());
                }
            }
        }
    }

    #[test]
    fn test_select_preset() {
        let mut session = session();
        // "Yesterday"
        assert!(session.select_preset(1));
        assert_eq!(session.range().dates(), Some((ymd(2024, 6, 14), ymd(2024, 6, 14))));
        assert_eq!((session.first_month(), session.second_month()), (ym(2024, 6), ym(2024, 7)));

        assert!(!session.select_preset(99));
    }

    #[test]
    fn test_select_preset_is_clamped() {
        let mut session = session();
        // "This Year" ends after today, the default maximum
        assert!(session.select_preset(7));
        assert_eq!(session.range().dates(), Some((ymd(2024, 1, 1), today())));
    }

    #[test]
    fn test_month_navigation_keeps_order() {
        let mut session = session();
        let steps = [
            (Marker::First, NavigationAction::Next),
            (Marker::First, NavigationAction::Previous),
            (Marker::Second, NavigationAction::Previous),
            (Marker::Second, NavigationAction::Next),
            (Marker::First, NavigationAction::Next),
            (Marker::First, NavigationAction::Next),
        ];
        for (marker, action) in steps {
            let before = *session.months();
            let applied = session.navigate_month(marker, action);
            assert!(session.first_month() < session.second_month());
            if !applied {
                assert_eq!(*session.months(), before);
            }
        }
    }

    #[test]
    fn test_direct_month_setters() {
        let mut session = session();
        assert!(session.set_first_month(ym(2024, 1)));
        assert!(!session.set_first_month(ym(2024, 6)));
        assert!(session.set_second_month(ym(2024, 12)));
        assert!(!session.set_second_month(ym(2023, 12)));
        assert!(session.set_month(Marker::First, ym(2024, 1).with_month(Month::new(11).unwrap()).unwrap()));
        assert_eq!((session.first_month(), session.second_month()), (ym(2024, 11), ym(2024, 12)));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut session = session();
        session.apply_range(DateRange::new(ymd(2024, 1, 1), ymd(2024, 3, 1)).unwrap());
        session.day_click(ymd(2024, 2, 2));

        assert_eq!(session.clear(), DateRange::EMPTY);
        assert_eq!(session.phase(), Phase::Empty);
        assert_eq!(session.hover_day(), None);
        assert_eq!((session.first_month(), session.second_month()), (ym(2024, 5), ym(2024, 6)));
    }

    #[test]
    fn test_committed_is_unchanged_range() {
        let mut session = session();
        session.day_click(ymd(2024, 6, 1));
        assert_eq!(session.committed(), DateRange::starting(ymd(2024, 6, 1)));
        session.day_click(ymd(2024, 6, 3));
        assert_eq!(session.committed(), DateRange::new(ymd(2024, 6, 1), ymd(2024, 6, 3)).unwrap());
    }
}
