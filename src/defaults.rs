//! The preset list offered when the host supplies none.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::{CalendarMonth, DefinedRange, Locale};

/// Today, Yesterday, This Week, Last Week, Last 7 Days, This Month, Last
/// Month, This Year, Last Year. Weeks start on the locale's first weekday.
///
/// Presets that would fall off the representable calendar are left out.
pub fn default_ranges(today: NaiveDate, locale: &Locale) -> Vec<DefinedRange> {
    let yesterday = today.checked_sub_days(Days::new(1));
    let week_ago = today.checked_sub_days(Days::new(7));
    let this_month = CalendarMonth::of(today);
    let last_month = this_month.add_months(-1);
    let this_year = year_span(today.year());
    let last_year = today.year().checked_sub(1).and_then(year_span);

    let candidates = [
        ("Today", Some((today, today))),
        ("Yesterday", yesterday.map(|d| (d, d))),
        ("This Week", Some((locale.start_of_week(today), locale.end_of_week(today)))),
        (
            "Last Week",
            week_ago.map(|d| (locale.start_of_week(d), locale.end_of_week(d))),
        ),
        ("Last 7 Days", week_ago.map(|d| (d, today))),
        ("This Month", Some((this_month.first_day(), this_month.last_day()))),
        ("Last Month", last_month.map(|m| (m.first_day(), m.last_day()))),
        ("This Year", this_year),
        ("Last Year", last_year),
    ];

    candidates
        .into_iter()
        .filter_map(|(label, span)| span.and_then(|(start, end)| DefinedRange::new(label, start, end).ok()))
        .collect()
}

fn year_span(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let end = start.checked_add_months(Months::new(12))?.checked_sub_days(Days::new(1))?;
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ymd;

    fn spans(ranges: &[DefinedRange]) -> Vec<(&str, NaiveDate, NaiveDate)> {
        ranges.iter().map(|r| (r.label(), r.start(), r.end())).collect()
    }

    #[test]
    fn test_default_ranges_sunday_week() {
        // 2024-03-06 is a Wednesday
        let ranges = default_ranges(ymd(2024, 3, 6), &Locale::EN_US);
        assert_eq!(
            spans(&ranges),
            vec![
                ("Today", ymd(2024, 3, 6), ymd(2024, 3, 6)),
                ("Yesterday", ymd(2024, 3, 5), ymd(2024, 3, 5)),
                ("This Week", ymd(2024, 3, 3), ymd(2024, 3, 9)),
                ("Last Week", ymd(2024, 2, 25), ymd(2024, 3, 2)),
                ("Last 7 Days", ymd(2024, 2, 28), ymd(2024, 3, 6)),
                ("This Month", ymd(2024, 3, 1), ymd(2024, 3, 31)),
                ("Last Month", ymd(2024, 2, 1), ymd(2024, 2, 29)),
                ("This Year", ymd(2024, 1, 1), ymd(2024, 12, 31)),
                ("Last Year", ymd(2023, 1, 1), ymd(2023, 12, 31)),
            ]
        );
    }

    #[test]
    fn test_default_ranges_monday_week() {
        let ranges = default_ranges(ymd(2024, 3, 6), &Locale::DE_DE);
        let this_week = ranges.iter().find(|r| r.label() == "This Week").unwrap();
        assert_eq!((this_week.start(), this_week.end()), (ymd(2024, 3, 4), ymd(2024, 3, 10)));

        let last_week = ranges.iter().find(|r| r.label() == "Last Week").unwrap();
        assert_eq!((last_week.start(), last_week.end()), (ymd(2024, 2, 26), ymd(2024, 3, 3)));
    }

    #[test]
    fn test_default_ranges_across_new_year() {
        let ranges = default_ranges(ymd(2024, 1, 1), &Locale::EN_US);
        let last_month = ranges.iter().find(|r| r.label() == "Last Month").unwrap();
        assert_eq!((last_month.start(), last_month.end()), (ymd(2023, 12, 1), ymd(2023, 12, 31)));

        let yesterday = ranges.iter().find(|r| r.label() == "Yesterday").unwrap();
        assert_eq!(yesterday.start(), ymd(2023, 12, 31));
    }
}
