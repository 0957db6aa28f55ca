//! Locale data used for labels and week layout.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::{CalendarMonth, DAYS_PER_WEEK, Month};

/// Error returned for an unknown locale identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown locale: {0}")]
pub struct LocaleError(pub String);

/// Month names, weekday names and first day of week for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    id:             &'static str,
    months:         [&'static str; 12],
    // Monday first
    weekdays:       [&'static str; 7],
    week_starts_on: Weekday,
}

impl Locale {
    pub const EN_US: Self = Self {
        id:             "en-US",
        months:         [
            "January", "February", "March", "April", "May", "June", "July", "August", "September",
            "October", "November", "December",
        ],
        weekdays:       ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
        week_starts_on: Weekday::Sun,
    };

    pub const EN_GB: Self = Self { id: "en-GB", week_starts_on: Weekday::Mon, ..Self::EN_US };

    pub const DE_DE: Self = Self {
        id:             "de-DE",
        months:         [
            "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
            "Oktober", "November", "Dezember",
        ],
        weekdays:       ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"],
        week_starts_on: Weekday::Mon,
    };

    pub const FR_FR: Self = Self {
        id:             "fr-FR",
        months:         [
            "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
            "octobre", "novembre", "décembre",
        ],
        weekdays:       ["lu", "ma", "me", "je", "ve", "sa", "di"],
        week_starts_on: Weekday::Mon,
    };

    pub const ES_ES: Self = Self {
        id:             "es-ES",
        months:         [
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
            "octubre", "noviembre", "diciembre",
        ],
        weekdays:       ["lu", "ma", "mi", "ju", "vi", "sá", "do"],
        week_starts_on: Weekday::Mon,
    };

    pub const ALL: [Self; 5] = [Self::EN_US, Self::EN_GB, Self::DE_DE, Self::FR_FR, Self::ES_ES];

    pub const fn id(&self) -> &'static str {
        self.id
    }

    pub const fn week_starts_on(&self) -> Weekday {
        self.week_starts_on
    }

    pub const fn month_name(&self, month: Month) -> &'static str {
        self.months[month.index0()]
    }

    /// Short weekday labels in grid order, starting at the locale's first
    /// day of week
    pub fn weekday_labels(&self) -> [&'static str; DAYS_PER_WEEK] {
        let offset = self.week_starts_on.num_days_from_monday() as usize;
        std::array::from_fn(|i| self.weekdays[(offset + i) % DAYS_PER_WEEK])
    }

    /// `dd MMMM yyyy`
    pub fn format_long(&self, date: NaiveDate) -> String {
        format!("{:02} {} {:04}", date.day(), self.month_name(Month::of(&date)), date.year())
    }

    /// `MMMM yyyy`
    pub fn format_month(&self, month: CalendarMonth) -> String {
        format!("{} {:04}", self.month_name(month.month()), month.year())
    }

    /// First day of the week containing `date`
    pub fn start_of_week(&self, date: NaiveDate) -> NaiveDate {
        let back = (date.weekday().num_days_from_monday() + 7
            - self.week_starts_on.num_days_from_monday())
            % 7;
        date.checked_sub_days(Days::new(u64::from(back))).unwrap_or(date)
    }

    /// Last day of the week containing `date`
    pub fn end_of_week(&self, date: NaiveDate) -> NaiveDate {
        let start = self.start_of_week(date);
        start.checked_add_days(Days::new(6)).unwrap_or(date)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::EN_US
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    /// Accepts identifiers case-insensitively with `-` or `_`, and a bare
    /// language tag (`en` resolves to `en-US`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|locale| locale.id.eq_ignore_ascii_case(&wanted))
            .or_else(|| {
                Self::ALL.into_iter().find(|locale| {
                    locale
                        .id
                        .split_once('-')
                        .is_some_and(|(lang, _)| lang.eq_ignore_ascii_case(&wanted))
                })
            })
            .ok_or(LocaleError(s.to_owned()))
    }
}

impl Serialize for Locale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.id)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ym, ymd};

    #[test]
    fn test_parse_identifiers() {
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::EN_US);
        assert_eq!("en_gb".parse::<Locale>().unwrap(), Locale::EN_GB);
        assert_eq!("DE-de".parse::<Locale>().unwrap(), Locale::DE_DE);
        assert_eq!("fr".parse::<Locale>().unwrap(), Locale::FR_FR);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::EN_US);
        assert_eq!("xx-YY".parse::<Locale>(), Err(LocaleError("xx-YY".to_owned())));
    }

    #[test]
    fn test_format_long() {
        assert_eq!(Locale::EN_US.format_long(ymd(2024, 3, 5)), "05 March 2024");
        assert_eq!(Locale::DE_DE.format_long(ymd(2024, 3, 5)), "05 März 2024");
        assert_eq!(Locale::FR_FR.format_long(ymd(2024, 8, 15)), "15 août 2024");
    }

    #[test]
    fn test_format_month() {
        assert_eq!(Locale::EN_US.format_month(ym(2024, 12)), "December 2024");
        assert_eq!(Locale::ES_ES.format_month(ym(2024, 1)), "enero 2024");
    }

    #[test]
    fn test_week_bounds_sunday_start() {
        // 2024-03-06 is a Wednesday
        let wed = ymd(2024, 3, 6);
        assert_eq!(Locale::EN_US.start_of_week(wed), ymd(2024, 3, 3));
        assert_eq!(Locale::EN_US.end_of_week(wed), ymd(2024, 3, 9));

        let sun = ymd(2024, 3, 3);
        assert_eq!(Locale::EN_US.start_of_week(sun), sun);
    }

    #[test]
    fn test_week_bounds_monday_start() {
        let wed = ymd(2024, 3, 6);
        assert_eq!(Locale::EN_GB.start_of_week(wed), ymd(2024, 3, 4));
        assert_eq!(Locale::EN_GB.end_of_week(wed), ymd(2024, 3, 10));

        let sun = ymd(2024, 3, 10);
        assert_eq!(Locale::EN_GB.start_of_week(sun), ymd(2024, 3, 4));
    }

    #[test]
    fn test_weekday_labels_follow_week_start() {
        assert_eq!(Locale::EN_US.weekday_labels(), ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]);
        assert_eq!(Locale::EN_GB.weekday_labels(), ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]);
    }

    #[test]
    fn test_serde_as_identifier() {
        assert_eq!(serde_json::to_string(&Locale::DE_DE).unwrap(), r#""de-DE""#);
        let parsed: Locale = serde_json::from_str(r#""en-GB""#).unwrap();
        assert_eq!(parsed, Locale::EN_GB);
        assert!(serde_json::from_str::<Locale>(r#""tlh""#).is_err());
    }
}
